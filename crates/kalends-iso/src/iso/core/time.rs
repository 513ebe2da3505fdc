//! Time of day without a date or offset.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use kalends_core::clock::{Clock, SystemClock};

use super::arith;
use super::date::CivilDate;
use super::datetime::CivilDateTime;
use super::duration::Duration;
use super::instant::{Instant, MICROS_PER_SECOND, Temporal, impl_instant_ordering};
use super::offset::UtcOffset;
use super::offset_time::OffsetTime;
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};
use crate::iso::parse;

const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;

/// A wall-clock time at microsecond precision, e.g. `19:35:20`.
///
/// `24:00:00` is kept as written (hour 24) and orders after `23:59:59.999999`.
#[derive(Debug, Clone, Copy)]
pub struct CivilTime {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
}

impl CivilTime {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: 0,
    };

    /// The `24:00:00` end-of-day form.
    pub const END_OF_DAY: Self = Self {
        hour: 24,
        minute: 0,
        second: 0,
        microsecond: 0,
    };

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if a field is out of range.
    pub fn of(hour: u8, minute: u8, second: u8) -> TemporalResult<Self> {
        Self::of_micro(hour, minute, second, 0)
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if a field is out of range, or
    /// if hour 24 is combined with anything but zeros.
    pub fn of_micro(hour: u8, minute: u8, second: u8, microsecond: u32) -> TemporalResult<Self> {
        let end_of_day = hour == 24 && minute == 0 && second == 0 && microsecond == 0;
        if !end_of_day && (hour > 23 || minute > 59 || second > 59 || microsecond > 999_999) {
            return Err(TemporalError::InvalidTime(format!(
                "{hour:02}:{minute:02}:{second:02}.{microsecond:06} is out of range"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
            microsecond,
        })
    }

    /// Splits a microsecond of the day already known to be in range.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "callers pass 0..MICROS_PER_DAY, so every quotient fits"
    )]
    pub(crate) const fn from_micro_of_day(micros: i64) -> Self {
        Self {
            hour: (micros / MICROS_PER_HOUR) as u8,
            minute: (micros % MICROS_PER_HOUR / MICROS_PER_MINUTE) as u8,
            second: (micros % MICROS_PER_MINUTE / MICROS_PER_SECOND) as u8,
            microsecond: (micros % MICROS_PER_SECOND) as u32,
        }
    }

    /// Parses `HH:MM:SS[.f]`. A trailing offset is accepted and discarded.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not a time.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        let (fields, _offset) = parse::parse_time(text)?;
        let time = Self::of_micro(fields.hour, fields.minute, fields.second, fields.microsecond)?;
        tracing::debug!(%time, "Parsed time");
        Ok(time)
    }

    /// The current UTC time of day.
    #[must_use]
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    #[must_use]
    pub fn now_with(clock: &impl Clock) -> Self {
        Self::from(clock.now().time())
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// Microseconds scaled to nanoseconds; no extra precision is stored.
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.microsecond * 1000
    }

    #[must_use]
    pub const fn is_end_of_day(&self) -> bool {
        self.hour == 24
    }

    /// Microseconds since midnight; `MICROS_PER_DAY` for `24:00:00`.
    #[must_use]
    pub const fn micro_of_day(&self) -> i64 {
        self.hour as i64 * MICROS_PER_HOUR
            + self.minute as i64 * MICROS_PER_MINUTE
            + self.second as i64 * MICROS_PER_SECOND
            + self.microsecond as i64
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the result is out of range.
    pub fn with_hour(&self, hour: u8) -> TemporalResult<Self> {
        Self::of_micro(hour, self.minute, self.second, self.microsecond)
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the result is out of range.
    pub fn with_minute(&self, minute: u8) -> TemporalResult<Self> {
        Self::of_micro(self.hour, minute, self.second, self.microsecond)
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the result is out of range.
    pub fn with_second(&self, second: u8) -> TemporalResult<Self> {
        Self::of_micro(self.hour, self.minute, second, self.microsecond)
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the result is out of range.
    pub fn with_microsecond(&self, microsecond: u32) -> TemporalResult<Self> {
        Self::of_micro(self.hour, self.minute, self.second, microsecond)
    }

    /// Adds `amount` of a clock unit, wrapping around midnight.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidUnit`] for calendar units, or
    /// [`TemporalError::Overflow`] if the amount does not fit.
    pub fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        let (_days, micros) = arith::shift_clock(self.micro_of_day(), amount, unit, "CivilTime")?;
        Ok(Self::from_micro_of_day(micros))
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        self.plus(arith::negate(amount)?, unit)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn plus_hours(&self, hours: i64) -> TemporalResult<Self> {
        self.plus(hours, Unit::Hours)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn plus_minutes(&self, minutes: i64) -> TemporalResult<Self> {
        self.plus(minutes, Unit::Minutes)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn plus_seconds(&self, seconds: i64) -> TemporalResult<Self> {
        self.plus(seconds, Unit::Seconds)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus_hours(&self, hours: i64) -> TemporalResult<Self> {
        self.minus(hours, Unit::Hours)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus_minutes(&self, minutes: i64) -> TemporalResult<Self> {
        self.minus(minutes, Unit::Minutes)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus_seconds(&self, seconds: i64) -> TemporalResult<Self> {
        self.minus(seconds, Unit::Seconds)
    }

    /// Adds a duration, wrapping around midnight.
    ///
    /// ## Errors
    /// Returns [`TemporalError::Overflow`] if the day carry does not fit.
    pub fn plus_duration(&self, duration: &Duration) -> TemporalResult<Self> {
        let total = i128::from(self.micro_of_day()) + duration.total_microseconds();
        let (_days, micros) = arith::carry_micros(total)?;
        Ok(Self::from_micro_of_day(micros))
    }

    /// ## Errors
    /// See [`Self::plus_duration`].
    pub fn minus_duration(&self, duration: &Duration) -> TemporalResult<Self> {
        self.plus_duration(&duration.negated())
    }

    #[must_use]
    pub const fn at_date(&self, date: CivilDate) -> CivilDateTime {
        CivilDateTime::new(date, *self)
    }

    #[must_use]
    pub const fn at_offset(&self, offset: UtcOffset) -> OffsetTime {
        OffsetTime::new(*self, offset)
    }
}

impl Temporal for CivilTime {
    fn instant(&self) -> Instant {
        Instant::from_parts(0, self.micro_of_day())
    }
}

impl_instant_ordering!(CivilTime);

/// Writes `HH:MM:SS`, leaving out the fraction.
pub(crate) fn write_hms(f: &mut fmt::Formatter<'_>, time: &CivilTime) -> fmt::Result {
    write!(f, "{:02}:{:02}:{:02}", time.hour, time.minute, time.second)
}

impl fmt::Display for CivilTime {
    /// `HH:MM:SS`, then `.ffffff` when the microseconds are non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hms(f, self)?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        Ok(())
    }
}

impl FromStr for CivilTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for CivilTime {
    /// Truncates nanoseconds; a leap second folds into `:59.999999`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "chrono clock fields are bounded by 59"
    )]
    fn from(value: NaiveTime) -> Self {
        Self {
            hour: value.hour() as u8,
            minute: value.minute() as u8,
            second: value.second() as u8,
            microsecond: (value.nanosecond() / 1000).min(999_999),
        }
    }
}

impl TryFrom<CivilTime> for NaiveTime {
    type Error = TemporalError;

    fn try_from(value: CivilTime) -> Result<Self, Self::Error> {
        Self::from_hms_micro_opt(
            u32::from(value.hour),
            u32::from(value.minute),
            u32::from(value.second),
            value.microsecond,
        )
        .ok_or_else(|| TemporalError::InvalidTime(format!("{value} has no chrono equivalent")))
    }
}
