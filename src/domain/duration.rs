use chrono::Duration;

/// Format a duration as zero-padded "HH:MM:SS".
///
/// Rounds to the nearest second. Hours are not wrapped at a day, so long
/// totals simply widen the hour field. Negative input renders as zero.
pub fn format_hms(duration: Duration) -> String {
    let total = rounded_seconds(duration);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn rounded_seconds(duration: Duration) -> i64 {
    if duration <= Duration::zero() {
        return 0;
    }
    let whole = duration.num_seconds();
    if duration.subsec_nanos() >= 500_000_000 {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_hms(Duration::zero()), "00:00:00");
    }

    #[test]
    fn test_format_components() {
        let d = Duration::hours(1) + Duration::minutes(2) + Duration::seconds(3);
        assert_eq!(format_hms(d), "01:02:03");
    }

    #[test]
    fn test_format_rounds_to_nearest_second() {
        assert_eq!(format_hms(Duration::milliseconds(1499)), "00:00:01");
        assert_eq!(format_hms(Duration::milliseconds(1500)), "00:00:02");
        assert_eq!(format_hms(Duration::milliseconds(59_600)), "00:01:00");
    }

    #[test]
    fn test_format_hours_not_wrapped() {
        assert_eq!(format_hms(Duration::hours(27)), "27:00:00");
        assert_eq!(format_hms(Duration::hours(123) + Duration::seconds(4)), "123:00:04");
    }

    #[test]
    fn test_format_negative_is_zero() {
        assert_eq!(format_hms(Duration::seconds(-10)), "00:00:00");
    }
}
