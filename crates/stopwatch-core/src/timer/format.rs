//! Elapsed-time decomposition and `HH:MM:SS.mmm` rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Clock string shown while idle.
pub const ZERO_CLOCK: &str = "00:00:00.000";

/// Whole hours, minutes, seconds and leftover milliseconds of a duration.
///
/// Hours are not wrapped at 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub millis: u16,
}

impl TimeParts {
    /// Decompose fractional milliseconds. The fraction is floored and
    /// negative or non-finite input reads as zero.
    pub fn from_millis(elapsed_ms: f64) -> Self {
        let total = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            elapsed_ms.floor() as u64
        } else {
            0
        };
        Self {
            hours: total / MS_PER_HOUR,
            minutes: ((total % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((total % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
            millis: (total % MS_PER_SECOND) as u16,
        }
    }

    pub fn display_fields(&self) -> DisplayFields {
        DisplayFields {
            hours: format!("{:02}", self.hours),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
            millis: format!(".{:03}", self.millis),
        }
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

/// The four text fields of the display. `millis` carries its leading `.`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub millis: String,
}

impl DisplayFields {
    pub fn zero() -> Self {
        TimeParts::default().display_fields()
    }
}

impl fmt::Display for DisplayFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}{}", self.hours, self.minutes, self.seconds, self.millis)
    }
}

/// `HH:MM:SS.mmm` for a millisecond value.
pub fn format_clock(elapsed_ms: f64) -> String {
    TimeParts::from_millis(elapsed_ms).to_string()
}

/// Window title: `"{prefix} – {clock}"`, or the bare clock when the prefix
/// is blank.
pub fn format_title(prefix: &str, clock: &str) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        clock.to_string()
    } else {
        format!("{prefix} – {clock}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hour_boundary() {
        let parts = TimeParts::from_millis(3_600_000.0);
        assert_eq!(
            parts,
            TimeParts {
                hours: 1,
                minutes: 0,
                seconds: 0,
                millis: 0
            }
        );
        assert_eq!(parts.to_string(), "01:00:00.000");
    }

    #[test]
    fn minute_second_and_millis() {
        let parts = TimeParts::from_millis(61_500.0);
        assert_eq!(
            parts,
            TimeParts {
                hours: 0,
                minutes: 1,
                seconds: 1,
                millis: 500
            }
        );
        assert_eq!(format_clock(61_500.0), "00:01:01.500");
    }

    #[test]
    fn fraction_is_floored() {
        assert_eq!(format_clock(999.999), "00:00:00.999");
        assert_eq!(format_clock(1_000.2), "00:00:01.000");
    }

    #[test]
    fn hours_are_not_wrapped() {
        let ms = 125.0 * 3_600_000.0 + 59.0 * 60_000.0 + 59_999.0;
        assert_eq!(format_clock(ms), "125:59:59.999");
    }

    #[test]
    fn negative_and_nan_read_as_zero() {
        assert_eq!(format_clock(-5.0), ZERO_CLOCK);
        assert_eq!(format_clock(f64::NAN), ZERO_CLOCK);
    }

    #[test]
    fn display_fields_are_padded() {
        let fields = TimeParts::from_millis(3_723_004.0).display_fields();
        assert_eq!(fields.hours, "01");
        assert_eq!(fields.minutes, "02");
        assert_eq!(fields.seconds, "03");
        assert_eq!(fields.millis, ".004");
        assert_eq!(fields.to_string(), "01:02:03.004");
    }

    #[test]
    fn zero_fields() {
        assert_eq!(DisplayFields::zero().to_string(), ZERO_CLOCK);
    }

    #[test]
    fn title_with_and_without_prefix() {
        assert_eq!(format_title("Stopwatch", ZERO_CLOCK), "Stopwatch – 00:00:00.000");
        assert_eq!(format_title("  ", "00:00:01.000"), "00:00:01.000");
    }
}
