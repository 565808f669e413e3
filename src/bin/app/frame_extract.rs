/*
 * The frame_extract module grabs a single still frame from a remote video.
 *
 * Decoding is delegated to ffmpeg: the frame nearest the requested offset is encoded
 * as PNG on stdout and wrapped into an iced image handle. Both execution modes run
 * the same argument list, so they produce the same frame for the same locator and
 * offset; they only differ in which thread waits for it.
 */

use std::process::Stdio;

use bytes::Bytes;
use iced::widget::image::Handle;
use url::Url;

const FFMPEG: &str = "ffmpeg";

// Wrapper for the various types of errors that can occur while grabbing a frame.
#[derive(Debug)]
pub (crate) struct FetchError {
    error: String
}

impl FetchError {
    fn new(error: String) -> Self {
        Self { error }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(value: std::io::Error) -> Self {
        Self::new(value.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(value: url::ParseError) -> Self {
        Self::new(format!("Invalid video locator: {}", value))
    }
}

impl From<&str> for FetchError {
    fn from(value: &str) -> Self {
        Self::new(String::from(value))
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for FetchError {}

// A malformed locator fails here, before any process is spawned.
fn parse_locator(locator: &str) -> Result<Url, FetchError> {
    Url::parse(locator).map_err(FetchError::from)
}

// Argument list for a single-frame grab, shared by both execution modes.
fn frame_args(url: &Url, offset_secs: u64) -> Vec<String> {
    [
        "-hide_banner",
        "-loglevel", "error",
        "-ss", &offset_secs.to_string(),
        "-i", url.as_str(),
        "-frames:v", "1",
        "-f", "image2pipe",
        "-c:v", "png",
        "pipe:1"
    ].iter().map(|s| s.to_string()).collect()
}

fn frame_from_output(output: std::process::Output) -> Result<Handle, FetchError> {
    if !output.status.success() {
        let reason = String::from_utf8_lossy(&output.stderr);
        let reason = reason.trim();

        return Err(if reason.is_empty() {
            FetchError::from("Ffmpeg exited with an error.")
        } else {
            FetchError::new(String::from(reason))
        });
    }

    if output.stdout.is_empty() {
        return Err(FetchError::from("Ffmpeg produced no frame data."));
    }

    Ok(Handle::from_bytes(Bytes::from(output.stdout)))
}

// Grab a frame on the calling thread. Called from the UI thread, this holds up
// rendering until ffmpeg is done. No retries, no timeout.
pub (crate) fn extract_frame_blocking(locator: &str, offset_secs: u64) -> Result<Handle, FetchError> {
    let url = parse_locator(locator)?;

    let output = std::process::Command::new(FFMPEG)
        .args(frame_args(&url, offset_secs))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    frame_from_output(output)
}

// Grab a frame without blocking the UI thread. Dropping the future (an aborted
// iced task) kills the ffmpeg process rather than letting the decode run out.
pub (crate) async fn extract_frame(locator: &str, offset_secs: u64) -> Result<Handle, FetchError> {
    let url = parse_locator(locator)?;

    let output = tokio::process::Command::new(FFMPEG)
        .args(frame_args(&url, offset_secs))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await?;

    frame_from_output(output)
}

// Checks that ffmpeg can be run at all, returns its version banner.
pub (crate) fn ffmpeg_version() -> Result<String, FetchError> {
    let output = std::process::Command::new(FFMPEG)
        .arg("-version")
        .output()?;

    if !output.status.success() {
        return Err(FetchError::from("Ffmpeg -version exited with an error."));
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(String::from)
        .ok_or(FetchError::from("Ffmpeg -version produced no output."))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};

    const SAMPLE: &str = "https://example.com/video.mp4";

    fn output(code: i32, stdout: &[u8], stderr: &[u8]) -> Output {
        Output {
            status: ExitStatus::from_raw(code),
            stdout: stdout.to_vec(),
            stderr: stderr.to_vec()
        }
    }

    #[test]
    fn malformed_locator_fails_without_spawning() {
        assert!(extract_frame_blocking("not even close to a url", 60).is_err());
    }

    #[tokio::test]
    async fn malformed_locator_fails_without_spawning_async() {
        assert!(extract_frame("not even close to a url", 60).await.is_err());
    }

    #[test]
    fn args_request_one_png_frame_at_the_offset() {
        let url = Url::parse(SAMPLE).unwrap();
        let args = frame_args(&url, 60);

        let offset_at = args.iter().position(|a| a == "-ss").unwrap();
        assert_eq!(args[offset_at + 1], "60");

        let input_at = args.iter().position(|a| a == "-i").unwrap();
        assert_eq!(args[input_at + 1], SAMPLE);

        let frames_at = args.iter().position(|a| a == "-frames:v").unwrap();
        assert_eq!(args[frames_at + 1], "1");

        assert_eq!(args.last().unwrap(), "pipe:1");
    }

    #[test]
    fn both_modes_build_the_same_command() {
        // The blocking and concurrent grabs share frame_args, so pinning the
        // full argument list pins the ffmpeg invocation for both.
        let url = Url::parse(SAMPLE).unwrap();

        assert_eq!(
            frame_args(&url, 90),
            [
                "-hide_banner",
                "-loglevel", "error",
                "-ss", "90",
                "-i", SAMPLE,
                "-frames:v", "1",
                "-f", "image2pipe",
                "-c:v", "png",
                "pipe:1"
            ]
        );
    }

    #[test]
    fn failed_decode_reports_stderr() {
        let result = frame_from_output(output(256, b"", b"Connection refused\n"));

        match result {
            Err(e) => assert_eq!(e.to_string(), "Connection refused"),
            Ok(_) => panic!("Expected an error.")
        }
    }

    #[test]
    fn empty_frame_data_is_an_error() {
        assert!(frame_from_output(output(0, b"", b"")).is_err());
    }

    #[test]
    fn png_bytes_become_a_handle() {
        assert!(frame_from_output(output(0, &[0x89, b'P', b'N', b'G'], b"")).is_ok());
    }
}
