//! Date-time with a fixed UTC offset.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, TimeZone};
use kalends_core::clock::{Clock, SystemClock};

use super::calendar_fields::{DayOfWeek, Month};
use super::date::CivilDate;
use super::datetime::CivilDateTime;
use super::duration::Duration;
use super::instant::{Instant, Temporal, impl_instant_ordering};
use super::offset::UtcOffset;
use super::period::Period;
use super::time::{CivilTime, write_hms};
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};
use crate::iso::parse;

/// A point on the timeline with the offset it was written in, e.g.
/// `1996-12-19T16:39:57-08:00`.
///
/// The offset only affects display. Equality and ordering use the instant.
#[derive(Debug, Clone, Copy)]
pub struct OffsetDateTime {
    datetime: CivilDateTime,
    offset: UtcOffset,
}

impl OffsetDateTime {
    #[must_use]
    pub const fn new(datetime: CivilDateTime, offset: UtcOffset) -> Self {
        Self { datetime, offset }
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] or [`TemporalError::InvalidTime`]
    /// if the fields are out of range.
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the six calendar fields plus the offset"
    )]
    pub fn of(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        offset: UtcOffset,
    ) -> TemporalResult<Self> {
        Ok(Self::new(
            CivilDateTime::of(year, month, day, hour, minute, second)?,
            offset,
        ))
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS[.f][Z|±HH:MM]`, also with a space instead
    /// of `T`. A missing offset means UTC.
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
        let offset = UtcOffset::from_seconds(fields.offset.unwrap_or_default())?;
        let value = Self::new(CivilDateTime::new(date, time), offset);
        tracing::debug!(%value, "Parsed offset date-time");
        Ok(value)
    }

    /// ## Errors
    /// Only fails if the clock is outside the calendar range.
    pub fn now() -> TemporalResult<Self> {
        Self::now_at(UtcOffset::UTC, &SystemClock)
    }

    /// The current instant as seen at `offset`.
    ///
    /// ## Errors
    /// Only fails if the clock is outside the calendar range.
    pub fn now_at(offset: UtcOffset, clock: &impl Clock) -> TemporalResult<Self> {
        Self::try_from(clock.now().with_timezone(&offset.to_fixed_offset()))
    }

    #[must_use]
    pub const fn to_civil(&self) -> CivilDateTime {
        self.datetime
    }

    #[must_use]
    pub const fn date(&self) -> CivilDate {
        self.datetime.date()
    }

    #[must_use]
    pub const fn time(&self) -> CivilTime {
        self.datetime.time()
    }

    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Keeps the wall fields and replaces the offset, moving the instant.
    #[must_use]
    pub const fn with_offset(&self, offset: UtcOffset) -> Self {
        Self::new(self.datetime, offset)
    }

    /// The same instant seen at another offset.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the shifted day leaves the
    /// calendar range.
    pub fn with_offset_same_instant(&self, offset: UtcOffset) -> TemporalResult<Self> {
        let local = self
            .instant()
            .shifted_seconds(i64::from(offset.as_seconds()));
        Ok(Self::new(CivilDateTime::from_instant(local)?, offset))
    }

    /// ## Errors
    /// See [`Self::with_offset_same_instant`].
    pub fn to_utc(&self) -> TemporalResult<Self> {
        self.with_offset_same_instant(UtcOffset::UTC)
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.datetime.year()
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.datetime.month()
    }

    #[must_use]
    pub const fn month_value(&self) -> u8 {
        self.datetime.month_value()
    }

    #[must_use]
    pub const fn day_of_month(&self) -> u8 {
        self.datetime.day_of_month()
    }

    #[must_use]
    pub const fn day_of_week(&self) -> DayOfWeek {
        self.datetime.day_of_week()
    }

    #[must_use]
    pub const fn day_of_year(&self) -> u16 {
        self.datetime.day_of_year()
    }

    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.datetime.is_leap_year()
    }

    #[must_use]
    pub fn length_of_month(&self) -> u8 {
        self.datetime.length_of_month()
    }

    #[must_use]
    pub fn length_of_year(&self) -> u16 {
        self.datetime.length_of_year()
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.datetime.hour()
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.datetime.minute()
    }

    #[must_use]
    pub const fn second(&self) -> u8 {
        self.datetime.second()
    }

    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.datetime.microsecond()
    }

    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.datetime.nanosecond()
    }

    /// ## Errors
    /// See [`CivilDateTime::with_year`].
    pub fn with_year(&self, year: i32) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.with_year(year)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::with_month`].
    pub fn with_month(&self, month: u8) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.with_month(month)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::with_day_of_month`].
    pub fn with_day_of_month(&self, day: u8) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.with_day_of_month(day)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::with_day_of_year`].
    pub fn with_day_of_year(&self, ordinal: u16) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.with_day_of_year(ordinal)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::with_hour`].
    pub fn with_hour(&self, hour: u8) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.with_hour(hour)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::with_minute`].
    pub fn with_minute(&self, minute: u8) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.with_minute(minute)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::with_second`].
    pub fn with_second(&self, second: u8) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.with_second(second)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::with_microsecond`].
    pub fn with_microsecond(&self, microsecond: u32) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.with_microsecond(microsecond)?))
    }

    /// Adds `amount` of a unit to the wall fields; the offset is unchanged.
    ///
    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.plus(amount, unit)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn minus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.minus(amount, unit)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn plus_days(&self, days: i64) -> TemporalResult<Self> {
        self.plus(days, Unit::Days)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn plus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.plus(weeks, Unit::Weeks)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn plus_months(&self, months: i64) -> TemporalResult<Self> {
        self.plus(months, Unit::Months)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn plus_years(&self, years: i64) -> TemporalResult<Self> {
        self.plus(years, Unit::Years)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn plus_hours(&self, hours: i64) -> TemporalResult<Self> {
        self.plus(hours, Unit::Hours)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn plus_minutes(&self, minutes: i64) -> TemporalResult<Self> {
        self.plus(minutes, Unit::Minutes)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn plus_seconds(&self, seconds: i64) -> TemporalResult<Self> {
        self.plus(seconds, Unit::Seconds)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn minus_days(&self, days: i64) -> TemporalResult<Self> {
        self.minus(days, Unit::Days)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn minus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.minus(weeks, Unit::Weeks)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn minus_months(&self, months: i64) -> TemporalResult<Self> {
        self.minus(months, Unit::Months)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn minus_years(&self, years: i64) -> TemporalResult<Self> {
        self.minus(years, Unit::Years)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn minus_hours(&self, hours: i64) -> TemporalResult<Self> {
        self.minus(hours, Unit::Hours)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn minus_minutes(&self, minutes: i64) -> TemporalResult<Self> {
        self.minus(minutes, Unit::Minutes)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus`].
    pub fn minus_seconds(&self, seconds: i64) -> TemporalResult<Self> {
        self.minus(seconds, Unit::Seconds)
    }

    /// ## Errors
    /// See [`CivilDateTime::plus_period`].
    pub fn plus_period(&self, period: &Period) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.plus_period(period)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::plus_period`].
    pub fn minus_period(&self, period: &Period) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.minus_period(period)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::plus_duration`].
    pub fn plus_duration(&self, duration: &Duration) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.plus_duration(duration)?))
    }

    /// ## Errors
    /// See [`CivilDateTime::plus_duration`].
    pub fn minus_duration(&self, duration: &Duration) -> TemporalResult<Self> {
        Ok(self.map(self.datetime.minus_duration(duration)?))
    }

    const fn map(&self, datetime: CivilDateTime) -> Self {
        Self::new(datetime, self.offset)
    }
}

impl Temporal for OffsetDateTime {
    fn instant(&self) -> Instant {
        self.datetime
            .instant()
            .shifted_seconds(-i64::from(self.offset.as_seconds()))
    }
}

impl_instant_ordering!(OffsetDateTime);

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T", self.datetime.date())?;
        write_hms(f, &self.datetime.time())?;
        write!(f, "{}", self.offset)
    }
}

impl FromStr for OffsetDateTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<DateTime<FixedOffset>> for OffsetDateTime {
    type Error = TemporalError;

    fn try_from(value: DateTime<FixedOffset>) -> Result<Self, Self::Error> {
        Ok(Self::new(
            CivilDateTime::try_from(value.naive_local())?,
            UtcOffset::try_from(*value.offset())?,
        ))
    }
}

impl TryFrom<OffsetDateTime> for DateTime<FixedOffset> {
    type Error = TemporalError;

    fn try_from(value: OffsetDateTime) -> Result<Self, Self::Error> {
        let naive = chrono::NaiveDateTime::try_from(value.datetime)?;
        value
            .offset
            .to_fixed_offset()
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| TemporalError::overflow(&format!("{value} as a chrono date-time")))
    }
}
