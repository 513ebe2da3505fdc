//! Date and time of day without an offset.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use kalends_core::clock::{Clock, SystemClock};

use super::arith;
use super::calendar_fields::{DayOfWeek, Month};
use super::date::CivilDate;
use super::duration::Duration;
use super::instant::{Instant, Temporal, impl_instant_ordering};
use super::offset::UtcOffset;
use super::offset_datetime::OffsetDateTime;
use super::period::Period;
use super::time::{CivilTime, write_hms};
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};
use crate::iso::parse;

/// A wall-clock date-time, e.g. `2015-04-25T19:35:20Z`.
///
/// The text form always ends in `Z` and never carries a fraction; the
/// microseconds are still kept in the value. `24:00:00` is stored as written
/// and is equal to midnight of the next day.
#[derive(Debug, Clone, Copy)]
pub struct CivilDateTime {
    date: CivilDate,
    time: CivilTime,
}

impl CivilDateTime {
    #[must_use]
    pub const fn new(date: CivilDate, time: CivilTime) -> Self {
        Self { date, time }
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] or [`TemporalError::InvalidTime`]
    /// if the fields are out of range.
    pub fn of(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TemporalResult<Self> {
        Ok(Self::new(
            CivilDate::of(year, month, day)?,
            CivilTime::of(hour, minute, second)?,
        ))
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS[.f]`, also with a space instead of `T`.
    /// A trailing offset is accepted and discarded, leaving the wall fields.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not a
    /// date-time, or [`TemporalError::InvalidDate`] for a day that does not
    /// exist.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        let fields = parse::parse_date_time(text)?;
        let date = CivilDate::of(fields.date.year, fields.date.month, fields.date.day)?;
        let time = CivilTime::of_micro(
            fields.time.hour,
            fields.time.minute,
            fields.time.second,
            fields.time.microsecond,
        )?;
        let value = Self::new(date, time);
        tracing::debug!(%value, "Parsed date-time");
        Ok(value)
    }

    /// The current UTC date-time.
    ///
    /// ## Errors
    /// Only fails if the clock is outside the calendar range.
    pub fn now() -> TemporalResult<Self> {
        Self::now_with(&SystemClock)
    }

    /// ## Errors
    /// Only fails if the clock is outside the calendar range.
    pub fn now_with(clock: &impl Clock) -> TemporalResult<Self> {
        Self::try_from(clock.now().naive_utc())
    }

    /// Rebuilds the wall fields of an instant.
    pub(crate) fn from_instant(instant: Instant) -> TemporalResult<Self> {
        Ok(Self::new(
            CivilDate::of_epoch_day(instant.epoch_day())?,
            CivilTime::from_micro_of_day(instant.micro_of_day()),
        ))
    }

    #[must_use]
    pub const fn date(&self) -> CivilDate {
        self.date
    }

    #[must_use]
    pub const fn time(&self) -> CivilTime {
        self.time
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.date.month()
    }

    #[must_use]
    pub const fn month_value(&self) -> u8 {
        self.date.month_value()
    }

    #[must_use]
    pub const fn day_of_month(&self) -> u8 {
        self.date.day_of_month()
    }

    #[must_use]
    pub const fn day_of_week(&self) -> DayOfWeek {
        self.date.day_of_week()
    }

    #[must_use]
    pub const fn day_of_year(&self) -> u16 {
        self.date.day_of_year()
    }

    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.date.is_leap_year()
    }

    #[must_use]
    pub fn length_of_month(&self) -> u8 {
        self.date.length_of_month()
    }

    #[must_use]
    pub fn length_of_year(&self) -> u16 {
        self.date.length_of_year()
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.time.hour()
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    #[must_use]
    pub const fn second(&self) -> u8 {
        self.time.second()
    }

    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.time.microsecond()
    }

    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist in the
    /// new year.
    pub fn with_year(&self, year: i32) -> TemporalResult<Self> {
        Ok(Self::new(self.date.with_year(year)?, self.time))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist in the
    /// new month.
    pub fn with_month(&self, month: u8) -> TemporalResult<Self> {
        Ok(Self::new(self.date.with_month(month)?, self.time))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist.
    pub fn with_day_of_month(&self, day: u8) -> TemporalResult<Self> {
        Ok(Self::new(self.date.with_day_of_month(day)?, self.time))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the ordinal is not in the
    /// year.
    pub fn with_day_of_year(&self, ordinal: u16) -> TemporalResult<Self> {
        Ok(Self::new(self.date.with_day_of_year(ordinal)?, self.time))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the hour is out of range.
    pub fn with_hour(&self, hour: u8) -> TemporalResult<Self> {
        Ok(Self::new(self.date, self.time.with_hour(hour)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the minute is out of range.
    pub fn with_minute(&self, minute: u8) -> TemporalResult<Self> {
        Ok(Self::new(self.date, self.time.with_minute(minute)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the second is out of range.
    pub fn with_second(&self, second: u8) -> TemporalResult<Self> {
        Ok(Self::new(self.date, self.time.with_second(second)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the value is out of range.
    pub fn with_microsecond(&self, microsecond: u32) -> TemporalResult<Self> {
        Ok(Self::new(self.date, self.time.with_microsecond(microsecond)?))
    }

    /// Adds `amount` of any unit.
    ///
    /// Calendar units move the date and leave the clock alone. Clock units
    /// carry whole days into the date.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] or [`TemporalError::Overflow`] if
    /// the result is out of range.
    pub fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        if unit.is_date_based() {
            return Ok(Self::new(self.date.plus(amount, unit)?, self.time));
        }
        let (days, micros) =
            arith::shift_clock(self.time.micro_of_day(), amount, unit, "CivilDateTime")?;
        Ok(Self::new(
            self.date.plus_days(days)?,
            CivilTime::from_micro_of_day(micros),
        ))
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        self.plus(arith::negate(amount)?, unit)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn plus_days(&self, days: i64) -> TemporalResult<Self> {
        self.plus(days, Unit::Days)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn plus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.plus(weeks, Unit::Weeks)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn plus_months(&self, months: i64) -> TemporalResult<Self> {
        self.plus(months, Unit::Months)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn plus_years(&self, years: i64) -> TemporalResult<Self> {
        self.plus(years, Unit::Years)
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
    pub fn minus_days(&self, days: i64) -> TemporalResult<Self> {
        self.minus(days, Unit::Days)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.minus(weeks, Unit::Weeks)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus_months(&self, months: i64) -> TemporalResult<Self> {
        self.minus(months, Unit::Months)
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus_years(&self, years: i64) -> TemporalResult<Self> {
        self.minus(years, Unit::Years)
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

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the result is out of range.
    pub fn plus_period(&self, period: &Period) -> TemporalResult<Self> {
        Ok(Self::new(self.date.plus_period(period)?, self.time))
    }

    /// ## Errors
    /// See [`Self::plus_period`].
    pub fn minus_period(&self, period: &Period) -> TemporalResult<Self> {
        Ok(Self::new(self.date.minus_period(period)?, self.time))
    }

    /// Adds an exact elapsed time, carrying whole days into the date.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the result is out of range.
    pub fn plus_duration(&self, duration: &Duration) -> TemporalResult<Self> {
        let total = i128::from(self.time.micro_of_day()) + duration.total_microseconds();
        let (days, micros) = arith::carry_micros(total)?;
        Ok(Self::new(
            self.date.plus_days(days)?,
            CivilTime::from_micro_of_day(micros),
        ))
    }

    /// ## Errors
    /// See [`Self::plus_duration`].
    pub fn minus_duration(&self, duration: &Duration) -> TemporalResult<Self> {
        self.plus_duration(&duration.negated())
    }

    #[must_use]
    pub const fn at_offset(&self, offset: UtcOffset) -> OffsetDateTime {
        OffsetDateTime::new(*self, offset)
    }
}

impl Temporal for CivilDateTime {
    fn instant(&self) -> Instant {
        Instant::from_parts(self.date.epoch_day(), self.time.micro_of_day())
    }
}

impl_instant_ordering!(CivilDateTime);

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T", self.date)?;
        write_hms(f, &self.time)?;
        write!(f, "Z")
    }
}

impl FromStr for CivilDateTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<NaiveDateTime> for CivilDateTime {
    type Error = TemporalError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Ok(Self::new(
            CivilDate::try_from(value.date())?,
            CivilTime::from(value.time()),
        ))
    }
}

impl TryFrom<CivilDateTime> for NaiveDateTime {
    type Error = TemporalError;

    /// `24:00:00` becomes midnight of the next day.
    fn try_from(value: CivilDateTime) -> Result<Self, Self::Error> {
        let normalized = CivilDateTime::from_instant(value.instant())?;
        let time = chrono::NaiveTime::try_from(normalized.time)?;
        Ok(chrono::NaiveDate::from(normalized.date).and_time(time))
    }
}
