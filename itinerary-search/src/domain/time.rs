//! Flight time handling.
//!
//! The reservation feed reports every departure and arrival as a UTC
//! "HH:MM" wall-clock time plus a calendar date. This module provides a
//! date-aware time type and the elapsed-time arithmetic used for leg
//! durations and layovers.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A UTC wall-clock time on a specific calendar date.
///
/// Two times at "01:30" on different dates are different instants, so the
/// date is always carried alongside the time of day.
///
/// # Examples
///
/// ```
/// use itinerary_search::domain::FlightTime;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2015, 5, 10).unwrap();
/// let time = FlightTime::parse_hhmm("14:30", date).unwrap();
/// assert_eq!(time.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightTime {
    date: NaiveDate,
    time: NaiveTime,
}

impl FlightTime {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse a time from "HH:MM" format on the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_search::domain::FlightTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2015, 5, 10).unwrap();
    ///
    /// assert!(FlightTime::parse_hhmm("00:00", date).is_ok());
    /// assert!(FlightTime::parse_hhmm("23:59", date).is_ok());
    ///
    /// assert!(FlightTime::parse_hhmm("1430", date).is_err());
    /// assert!(FlightTime::parse_hhmm("24:00", date).is_err());
    /// ```
    pub fn parse_hhmm(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        // chrono accepts single-digit fields, the feed never sends them
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit);
        if !well_formed {
            return Err(TimeError::new("expected HH:MM"));
        }

        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| TimeError::new("hour or minute out of range"))?;

        Ok(Self { date, time })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn to_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Shift this UTC time by a local UTC offset.
    ///
    /// The calendar date moves with the shift, so an early-morning UTC time
    /// west of Greenwich lands on the previous local day.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_search::domain::FlightTime;
    /// use chrono::{Duration, NaiveDate};
    ///
    /// let date = NaiveDate::from_ymd_opt(2015, 5, 10).unwrap();
    /// let utc = FlightTime::parse_hhmm("02:15", date).unwrap();
    ///
    /// let boston = utc.with_offset(Duration::hours(-5));
    /// assert_eq!(boston.to_string(), "21:15");
    /// assert_eq!(boston.date(), NaiveDate::from_ymd_opt(2015, 5, 9).unwrap());
    /// ```
    pub fn with_offset(&self, offset: Duration) -> Self {
        match self.to_datetime().checked_add_signed(offset) {
            Some(dt) => Self {
                date: dt.date(),
                time: dt.time(),
            },
            None => *self,
        }
    }
}

impl Ord for FlightTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_datetime().cmp(&other.to_datetime())
    }
}

impl PartialOrd for FlightTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlightTime({} {:02}:{:02})",
            self.date,
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Elapsed time between two flight times, in whole minutes.
///
/// Computed field by field: whole days between the two calendar dates times
/// 24, plus the hour difference, plus the minute difference, borrowing an
/// hour when the minute difference is negative. The result is negative when
/// `to` precedes `from`.
///
/// Days are counted on the calendar, so a layover from 31 May to 1 June is
/// one day. Subtracting day-of-month numbers agrees only within a month.
///
/// # Examples
///
/// ```
/// use itinerary_search::domain::{elapsed, FlightTime};
/// use chrono::{Duration, NaiveDate};
///
/// let d1 = NaiveDate::from_ymd_opt(2015, 5, 10).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2015, 5, 11).unwrap();
///
/// let dep = FlightTime::parse_hhmm("22:45", d1).unwrap();
/// let arr = FlightTime::parse_hhmm("01:10", d2).unwrap();
/// assert_eq!(elapsed(dep, arr), Duration::minutes(2 * 60 + 25));
/// ```
pub fn elapsed(from: FlightTime, to: FlightTime) -> Duration {
    let days = to.date.signed_duration_since(from.date).num_days();
    let mut hours = days * 24 + i64::from(to.hour()) - i64::from(from.hour());
    let mut minutes = i64::from(to.minute()) - i64::from(from.minute());
    if minutes < 0 {
        hours -= 1;
        minutes += 60;
    }
    Duration::hours(hours) + Duration::minutes(minutes)
}

/// Formats a duration as hours and minutes, e.g. `05:07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursMinutes(pub Duration);

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.num_minutes();
        let sign = if total < 0 { "-" } else { "" };
        let total = total.abs();
        write!(f, "{sign}{:02}:{:02}", total / 60, total % 60)
    }
}
