mod ascii_table;

pub use self::ascii_table::AsciiTable;
use overwatch::StatValue;

/// Format a stat for display.
///
/// Durations are shown as hours, minutes and seconds.
pub fn format_stat(value: StatValue) -> String {
    match value {
        StatValue::Duration(ms) => format_duration(ms),
        value => value.to_string(),
    }
}

/// Format a duration in milliseconds like `12h 04m 33s`.
pub fn format_duration(ms: i64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_durations() {
        assert_eq!(format_duration(43_473_000), "12h 04m 33s");
        assert_eq!(format_duration(180_000), "3m 00s");
        assert_eq!(format_duration(9_000), "9s");
    }

    #[test]
    fn format_stats() {
        assert_eq!(format_stat(StatValue::Integer(1234)), "1234");
        assert_eq!(format_stat(StatValue::Float(52.3)), "52.3");
        assert_eq!(format_stat(StatValue::Duration(3_600_000)), "1h 00m 00s");
        assert_eq!(format_stat(StatValue::Invalid), "NaN");
    }
}
