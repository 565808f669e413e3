use log::error;

use super::super::FilmstripError;

// How a load pass runs the frame grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub (crate) enum LoadMode {
    // On the UI thread; the window freezes until every row is done.
    Blocking,
    // One background task per row; the window stays responsive.
    Concurrent
}

impl LoadMode {
    pub (crate) const ALL: [Self; 2] = [Self::Blocking, Self::Concurrent];
}

impl std::fmt::Display for LoadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LoadMode::Blocking => "Blocking",
            LoadMode::Concurrent => "Concurrent"
        };

        write!(f, "{}", s)
    }
}

// Settings that can be changed, directly or indirectly, by the user. These settings are persistant between runs.
#[derive(serde::Serialize, serde::Deserialize)]
pub (crate) struct FilmstripSettings {
    window_size: (f32, f32),
    load_mode: LoadMode,
    capture_offset_secs: u64
}

impl FilmstripSettings {
    // Create with default settings.
    pub (crate) fn new() -> Self {
        Self {
            window_size: (800.0, 600.0),
            load_mode: LoadMode::Concurrent,
            capture_offset_secs: 60
        }
    }

    pub (crate) fn window_size(&self) -> (f32, f32) {
        self.window_size
    }

    pub (crate) fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_size = (width, height);
    }

    pub (crate) fn load_mode(&self) -> LoadMode {
        self.load_mode
    }

    pub (crate) fn set_load_mode(&mut self, mode: LoadMode) {
        self.load_mode = mode;
    }

    pub (crate) fn capture_offset(&self) -> u64 {
        self.capture_offset_secs
    }

    pub (crate) fn set_capture_offset(&mut self, secs: u64) {
        self.capture_offset_secs = secs;
    }

    // Load settings from the settings.json file, if it exists.
    pub (crate) fn load() -> Result<Self, FilmstripError> {
        use std::io::Read;

        match std::fs::File::open("settings.json") {
            Ok(mut file) => {
                let mut buffer = String::new();
                match file.read_to_string(&mut buffer) {
                    Ok(_) => serde_json::from_str::<FilmstripSettings>(buffer.as_str()).map_err(FilmstripError::new),
                    Err(e) => Err(FilmstripError::new(e))
                }
            },
            Err(e) => Err(FilmstripError::new(e))
        }
    }

    // Serialize settings to JSON and write to file.
    pub (crate) fn save(&self) {
        use std::io::Write;

        match std::fs::File::create("settings.json") {
            Ok(mut file) => {
                match serde_json::to_string_pretty(self) {
                    Ok(pretty_json) => if let Err(e) = file.write_all(pretty_json.as_bytes()) {
                        error!("Failed to save settings: {}", e);
                    },
                    Err(e) => error!("Failed to save settings: {}", e)
                }
            },
            Err(e) => error!("Failed to save settings: {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_demo() {
        let settings = FilmstripSettings::new();

        assert_eq!(settings.capture_offset(), 60);
        assert_eq!(settings.load_mode(), LoadMode::Concurrent);
    }

    #[test]
    fn settings_survive_a_json_round_trip() {
        let mut settings = FilmstripSettings::new();
        settings.set_load_mode(LoadMode::Blocking);
        settings.set_capture_offset(120);
        settings.set_window_size(1024.0, 768.0);

        let json = serde_json::to_string(&settings).unwrap();
        let restored: FilmstripSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.load_mode(), LoadMode::Blocking);
        assert_eq!(restored.capture_offset(), 120);
        assert_eq!(restored.window_size(), (1024.0, 768.0));
    }
}
