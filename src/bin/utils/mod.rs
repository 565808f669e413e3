// Format a playback offset in seconds as a readable timestamp.
pub (crate) fn format_offset(seconds: u64, include_hour: bool) -> String {
    let (hours, rest) = (seconds / 3600, seconds % 3600);
    let (minutes, secs) = (rest / 60, rest % 60);

    if include_hour {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
    else {
        format!("{:02}:{:02}", minutes + hours * 60, secs)
    }
}

#[cfg(test)]
mod tests {

    #[test]
    fn test_format_offset() {
        use super::format_offset;

        assert_eq!(format_offset(0, false), "00:00");
        assert_eq!(format_offset(0, true), "00:00:00");

        assert_eq!(format_offset(60, false), "01:00");
        assert_eq!(format_offset(60, true), "00:01:00");

        assert_eq!(format_offset(90, false), "01:30");
        assert_eq!(format_offset(90, true), "00:01:30");

        assert_eq!(format_offset(7330, false), "122:10");
        assert_eq!(format_offset(7330, true), "02:02:10");

        assert_eq!(format_offset(360_000, true), "100:00:00");
    }
}
