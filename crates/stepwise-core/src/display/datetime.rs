//! Timestamp display in the system timezone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in the system timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_shape() {
        let ts = Timestamp::from_second(1640995200).unwrap();
        let rendered = LocalDateTime(&ts).to_string();

        // Date and time parts are zero-padded regardless of the zone
        let mut parts = rendered.split(' ');
        assert_eq!(parts.next().map(str::len), Some(10));
        assert_eq!(parts.next().map(str::len), Some(8));
        assert!(parts.next().is_some());
    }
}
