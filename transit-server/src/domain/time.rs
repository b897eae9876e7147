//! Schedule time handling.
//!
//! GTFS provides times as "HH:MM:SS" strings measured from midnight of the
//! service day. Trips running past midnight keep counting, so "25:10" is
//! ten past one the following morning but still belongs to the previous
//! service day. This module keeps times as minutes past that midnight so
//! comparison and subtraction stay trivial.

use std::fmt;

use chrono::NaiveTime;
use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A time of day on a service day, in whole minutes past midnight.
///
/// Hours may exceed 23 for post-midnight service.
///
/// # Examples
///
/// ```
/// use transit_server::domain::ScheduleTime;
///
/// let t = ScheduleTime::parse("25:10:00").unwrap();
/// assert_eq!(t.minutes(), 25 * 60 + 10);
/// assert_eq!(t.to_string(), "25:10");
/// assert_eq!(t.format_12h(), "1:10 AM");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleTime(u32);

impl ScheduleTime {
    /// Create a time from minutes past midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        Self(hour * 60 + minute)
    }

    /// Parse a time in `H:MM`, `HH:MM` or `HH:MM:SS` form.
    ///
    /// Seconds are validated and then dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_server::domain::ScheduleTime;
    ///
    /// assert!(ScheduleTime::parse("08:10").is_ok());
    /// assert!(ScheduleTime::parse("8:10").is_ok());
    /// assert!(ScheduleTime::parse("24:05:30").is_ok());
    ///
    /// assert!(ScheduleTime::parse("0810").is_err());
    /// assert!(ScheduleTime::parse("08:60").is_err());
    /// assert!(ScheduleTime::parse("").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let trimmed = s.trim();
        let mut parts = trimmed.split(':');

        let hour_str = parts
            .next()
            .ok_or_else(|| TimeError::new(s, "expected HH:MM"))?;
        let minute_str = parts
            .next()
            .ok_or_else(|| TimeError::new(s, "expected HH:MM"))?;
        let second_str = parts.next();
        if parts.next().is_some() {
            return Err(TimeError::new(s, "too many components"));
        }

        if hour_str.is_empty() || hour_str.len() > 2 {
            return Err(TimeError::new(s, "hour must be one or two digits"));
        }
        let hour = parse_digits(hour_str).ok_or_else(|| TimeError::new(s, "invalid hour digits"))?;

        let minute = parse_two_digits(minute_str)
            .ok_or_else(|| TimeError::new(s, "invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new(s, "minute must be 0-59"));
        }

        if let Some(second_str) = second_str {
            let second = parse_two_digits(second_str)
                .ok_or_else(|| TimeError::new(s, "invalid second digits"))?;
            if second > 59 {
                return Err(TimeError::new(s, "second must be 0-59"));
            }
        }

        Ok(Self::from_hm(hour, minute))
    }

    /// Returns minutes past midnight of the service day.
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Returns the hour, which may be 24 or more.
    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0 % 60
    }

    /// Signed number of minutes from `self` until `later`.
    ///
    /// Negative when `later` is actually earlier.
    pub fn minutes_until(&self, later: ScheduleTime) -> i64 {
        i64::from(later.0) - i64::from(self.0)
    }

    /// Formats the wall-clock reading as a 12-hour time, e.g. "8:10 AM".
    ///
    /// Post-midnight hours wrap, so "25:30" renders as "1:30 AM".
    pub fn format_12h(&self) -> String {
        match NaiveTime::from_hms_opt(self.hour() % 24, self.minute(), 0) {
            Some(t) => t.format("%-I:%M %p").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({})", self)
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ScheduleTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse exactly two ASCII digits.
fn parse_two_digits(s: &str) -> Option<u32> {
    if s.len() != 2 {
        return None;
    }
    parse_digits(s)
}

fn parse_digits(s: &str) -> Option<u32> {
    s.bytes().try_fold(0u32, |acc, b| {
        let d = (b as char).to_digit(10)?;
        Some(acc * 10 + d)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = ScheduleTime::parse("00:00").unwrap();
        assert_eq!(t.minutes(), 0);

        let t = ScheduleTime::parse("08:10").unwrap();
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 10);

        let t = ScheduleTime::parse("23:59:59").unwrap();
        assert_eq!(t.minutes(), 23 * 60 + 59);

        let t = ScheduleTime::parse("7:05:00").unwrap();
        assert_eq!(t.minutes(), 7 * 60 + 5);
    }

    #[test]
    fn parse_post_midnight() {
        let t = ScheduleTime::parse("24:00:00").unwrap();
        assert_eq!(t.minutes(), 1440);

        let t = ScheduleTime::parse("26:45").unwrap();
        assert_eq!(t.hour(), 26);
        assert!(t > ScheduleTime::parse("23:59").unwrap());
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            ScheduleTime::parse(" 08:10:00 ").unwrap(),
            ScheduleTime::from_hm(8, 10)
        );
    }

    #[test]
    fn parse_invalid_format() {
        assert!(ScheduleTime::parse("").is_err());
        assert!(ScheduleTime::parse("0810").is_err());
        assert!(ScheduleTime::parse("08:1").is_err());
        assert!(ScheduleTime::parse("08:100").is_err());
        assert!(ScheduleTime::parse("108:10").is_err());
        assert!(ScheduleTime::parse(":10").is_err());
        assert!(ScheduleTime::parse("08-10").is_err());
        assert!(ScheduleTime::parse("08:10:00:00").is_err());
        assert!(ScheduleTime::parse("ab:cd").is_err());
        assert!(ScheduleTime::parse("+8:10").is_err());
    }

    #[test]
    fn parse_out_of_range() {
        assert!(ScheduleTime::parse("08:60").is_err());
        assert!(ScheduleTime::parse("08:10:60").is_err());
    }

    #[test]
    fn error_mentions_input() {
        let err = ScheduleTime::parse("8h10").unwrap_err();
        assert!(err.to_string().contains("8h10"));
    }

    #[test]
    fn minutes_until_is_signed() {
        let a = ScheduleTime::from_hm(8, 10);
        let b = ScheduleTime::from_hm(8, 25);
        assert_eq!(a.minutes_until(b), 15);
        assert_eq!(b.minutes_until(a), -15);
        assert_eq!(a.minutes_until(a), 0);
    }

    #[test]
    fn minutes_until_across_midnight() {
        let late = ScheduleTime::parse("23:50").unwrap();
        let after = ScheduleTime::parse("24:20").unwrap();
        assert_eq!(late.minutes_until(after), 30);
    }

    #[test]
    fn display_keeps_extended_hours() {
        assert_eq!(ScheduleTime::from_hm(8, 5).to_string(), "08:05");
        assert_eq!(ScheduleTime::from_hm(25, 10).to_string(), "25:10");
    }

    #[test]
    fn format_12h() {
        assert_eq!(ScheduleTime::from_hm(0, 5).format_12h(), "12:05 AM");
        assert_eq!(ScheduleTime::from_hm(8, 10).format_12h(), "8:10 AM");
        assert_eq!(ScheduleTime::from_hm(12, 0).format_12h(), "12:00 PM");
        assert_eq!(ScheduleTime::from_hm(17, 45).format_12h(), "5:45 PM");
        assert_eq!(ScheduleTime::from_hm(25, 30).format_12h(), "1:30 AM");
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&ScheduleTime::from_hm(9, 0)).unwrap();
        assert_eq!(json, "\"09:00\"");
    }
}
