#[cfg(test)]
mod tests {
    use takt::libs::formatter::format_seconds;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_seconds(0), "00:00:00");
    }

    #[test]
    fn test_format_minutes_and_seconds() {
        assert_eq!(format_seconds(5), "00:00:05");
        assert_eq!(format_seconds(65), "00:01:05");
        assert_eq!(format_seconds(3599), "00:59:59");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_seconds(3600), "01:00:00");
        assert_eq!(format_seconds(3661), "01:01:01");
        assert_eq!(format_seconds(8 * 3600 + 30 * 60), "08:30:00");
    }

    #[test]
    fn test_format_over_a_hundred_hours() {
        assert_eq!(format_seconds(100 * 3600), "100:00:00");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(format_seconds(-5), "00:00:00");
    }
}
