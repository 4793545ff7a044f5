//! Bar interval definitions.

use std::num::NonZeroU32;
use std::str::FromStr;

/// Milliseconds per minute.
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Output granularity of a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarInterval {
    /// Raw ticks (no aggregation).
    #[default]
    Tick,
    /// Bars of the given number of minutes.
    Minutes(NonZeroU32),
}

impl BarInterval {
    /// One-minute bars.
    pub const MINUTE: Self = Self::Minutes(NonZeroU32::MIN);

    /// Creates an interval from a minute count, where 0 means raw ticks.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        match NonZeroU32::new(minutes) {
            Some(m) => Self::Minutes(m),
            None => Self::Tick,
        }
    }

    /// Returns the minute count, 0 for raw ticks.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Tick => 0,
            Self::Minutes(m) => m.get(),
        }
    }

    /// Returns the bucket index a timestamp falls in.
    ///
    /// Buckets are aligned to the epoch. Raw ticks are their own bucket.
    #[must_use]
    pub const fn bucket_of(&self, millis: i64) -> i64 {
        match self {
            Self::Tick => millis,
            Self::Minutes(m) => millis.div_euclid(m.get() as i64 * MILLIS_PER_MINUTE),
        }
    }

    /// Returns the opening timestamp of the bucket holding `millis`.
    #[must_use]
    pub const fn bucket_start(&self, millis: i64) -> i64 {
        match self {
            Self::Tick => millis,
            Self::Minutes(m) => {
                let width = m.get() as i64 * MILLIS_PER_MINUTE;
                millis.div_euclid(width) * width
            }
        }
    }

    /// Returns true if this is raw tick data (no aggregation).
    #[must_use]
    pub const fn is_tick(&self) -> bool {
        matches!(self, Self::Tick)
    }
}

impl std::fmt::Display for BarInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tick => write!(f, "tick"),
            Self::Minutes(m) => write!(f, "m{m}"),
        }
    }
}

impl FromStr for BarInterval {
    type Err = BarIntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let err = || BarIntervalParseError(s.to_string());

        match lower.as_str() {
            "tick" | "t1" | "0" => return Ok(Self::Tick),
            "minute" => return Ok(Self::MINUTE),
            "hour" => return Ok(Self::from_minutes(60)),
            "day" | "daily" => return Ok(Self::from_minutes(1440)),
            _ => {}
        }

        // Accept "m5", "5m", "h1", "1h", "d1", "1d" and plain minute counts.
        let (digits, unit) = if let Some(rest) = lower.strip_prefix(['m', 'h', 'd']) {
            (rest, lower.chars().next())
        } else if let Some(rest) = lower.strip_suffix(['m', 'h', 'd']) {
            (rest, lower.chars().last())
        } else {
            (lower.as_str(), Some('m'))
        };

        let count: u32 = digits.parse().map_err(|_| err())?;
        let minutes = match unit {
            Some('h') => count.checked_mul(60),
            Some('d') => count.checked_mul(1440),
            _ => Some(count),
        }
        .ok_or_else(err)?;

        match NonZeroU32::new(minutes) {
            Some(m) => Ok(Self::Minutes(m)),
            None => Err(err()),
        }
    }
}

/// Error returned when parsing an invalid bar interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarIntervalParseError(String);

impl std::fmt::Display for BarIntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid bar interval '{}', expected tick or a minute count such as m1, 5m, h1, d1",
            self.0
        )
    }
}

impl std::error::Error for BarIntervalParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minutes() {
        assert_eq!(BarInterval::from_minutes(0), BarInterval::Tick);
        assert_eq!(BarInterval::from_minutes(1), BarInterval::MINUTE);
        assert_eq!(BarInterval::from_minutes(15).minutes(), 15);
    }

    #[test]
    fn test_bucket_of() {
        assert_eq!(BarInterval::Tick.bucket_of(123), 123);
        assert_eq!(BarInterval::MINUTE.bucket_of(59_999), 0);
        assert_eq!(BarInterval::MINUTE.bucket_of(60_000), 1);
        assert_eq!(BarInterval::MINUTE.bucket_of(-1), -1);
        assert_eq!(BarInterval::from_minutes(5).bucket_of(600_000), 2);
    }

    #[test]
    fn test_bucket_start() {
        assert_eq!(BarInterval::Tick.bucket_start(123), 123);
        assert_eq!(BarInterval::MINUTE.bucket_start(61_500), 60_000);
        assert_eq!(BarInterval::from_minutes(60).bucket_start(3_600_000 + 59_000), 3_600_000);
    }

    #[test]
    fn test_interval_parse() {
        assert_eq!("tick".parse::<BarInterval>().unwrap(), BarInterval::Tick);
        assert_eq!("m1".parse::<BarInterval>().unwrap(), BarInterval::MINUTE);
        assert_eq!("5m".parse::<BarInterval>().unwrap().minutes(), 5);
        assert_eq!("H4".parse::<BarInterval>().unwrap().minutes(), 240);
        assert_eq!("d1".parse::<BarInterval>().unwrap().minutes(), 1440);
        assert_eq!("30".parse::<BarInterval>().unwrap().minutes(), 30);
        assert!("m0".parse::<BarInterval>().is_err());
        assert!("weekly".parse::<BarInterval>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BarInterval::Tick.to_string(), "tick");
        assert_eq!(BarInterval::from_minutes(15).to_string(), "m15");
    }
}
