//! Launch countdown

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Units with their labels, in display order
    pub fn units(&self) -> [(&'static str, i64); 4] {
        [
            ("DAYS", self.days),
            ("HRS", self.hours),
            ("MIN", self.minutes),
            ("SEC", self.seconds),
        ]
    }
}

/// Time remaining until `target`; all zero once it has passed
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let diff = (target - now).num_seconds();
    if diff <= 0 {
        return TimeLeft::default();
    }
    TimeLeft {
        days: diff / 86_400,
        hours: (diff % 86_400) / 3600,
        minutes: (diff % 3600) / 60,
        seconds: diff % 60,
    }
}

/// Parse an RFC 3339 launch date
pub fn parse_target(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.with_timezone(&Utc))
}

/// Zero-pad to two digits
pub fn pad2(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_left_breakdown() {
        let target = parse_target("2026-01-08T00:00:00Z").unwrap();
        let now = target - Duration::days(3) - Duration::hours(4) - Duration::minutes(5) - Duration::seconds(6);
        assert_eq!(
            time_left(target, now),
            TimeLeft {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
    }

    #[test]
    fn test_time_left_after_target() {
        let target = parse_target("2026-01-08T00:00:00Z").unwrap();
        assert!(time_left(target, target).is_zero());
        assert!(time_left(target, target + Duration::hours(1)).is_zero());
    }

    #[test]
    fn test_parse_target() {
        assert!(parse_target("2026-01-08T00:00:00Z").is_some());
        assert!(parse_target("2026-01-08T02:00:00+02:00") == parse_target("2026-01-08T00:00:00Z"));
        assert!(parse_target("next tuesday").is_none());
    }

    #[test]
    fn test_launch_target_is_utc_midnight() {
        let target = parse_target(crate::SITE.launch_at).unwrap();
        assert_eq!(target.to_rfc3339(), "2026-01-08T00:00:00+00:00");
    }

    #[test]
    fn test_pad2() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(42), "42");
        assert_eq!(pad2(123), "123");
    }

    #[test]
    fn test_units_order() {
        let left = TimeLeft {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        let labels: Vec<_> = left.units().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["DAYS", "HRS", "MIN", "SEC"]);
    }
}
