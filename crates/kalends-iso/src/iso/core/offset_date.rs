//! Calendar date with a fixed UTC offset.

use std::fmt;
use std::str::FromStr;

use kalends_core::clock::{Clock, SystemClock};

use super::calendar_fields::{DayOfWeek, Month};
use super::date::CivilDate;
use super::instant::{Instant, Temporal, impl_instant_ordering};
use super::offset::UtcOffset;
use super::period::Period;
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};
use crate::iso::parse;

/// A date whose start of day is anchored at an offset, e.g. `2015-04-25+02:00`.
///
/// Two values are equal when their days begin at the same instant.
#[derive(Debug, Clone, Copy)]
pub struct OffsetDate {
    date: CivilDate,
    offset: UtcOffset,
}

impl OffsetDate {
    #[must_use]
    pub const fn new(date: CivilDate, offset: UtcOffset) -> Self {
        Self { date, offset }
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist.
    pub fn of(year: i32, month: u8, day: u8, offset: UtcOffset) -> TemporalResult<Self> {
        Ok(Self::new(CivilDate::of(year, month, day)?, offset))
    }

    /// Parses `YYYY-MM-DD[Z|±HH:MM]`. A missing offset means UTC.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not a date, or
    /// [`TemporalError::InvalidDate`] if it names a day that does not exist.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        let (fields, offset) = parse::parse_date(text)?;
        let value = Self::new(
            CivilDate::of(fields.year, fields.month, fields.day)?,
            UtcOffset::from_seconds(offset.unwrap_or_default())?,
        );
        tracing::debug!(%value, "Parsed offset date");
        Ok(value)
    }

    /// Today in UTC.
    ///
    /// ## Errors
    /// Only fails if the clock is outside the calendar range.
    pub fn now() -> TemporalResult<Self> {
        Self::now_at(UtcOffset::UTC, &SystemClock)
    }

    /// Today as seen at `offset`.
    ///
    /// ## Errors
    /// Only fails if the clock is outside the calendar range.
    pub fn now_at(offset: UtcOffset, clock: &impl Clock) -> TemporalResult<Self> {
        let local = clock.now().with_timezone(&offset.to_fixed_offset());
        Ok(Self::new(CivilDate::try_from(local.date_naive())?, offset))
    }

    #[must_use]
    pub const fn to_civil(&self) -> CivilDate {
        self.date
    }

    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Keeps the calendar fields and replaces the offset.
    #[must_use]
    pub const fn with_offset(&self, offset: UtcOffset) -> Self {
        Self::new(self.date, offset)
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

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist in the
    /// new year.
    pub fn with_year(&self, year: i32) -> TemporalResult<Self> {
        Ok(self.map(self.date.with_year(year)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist in the
    /// new month.
    pub fn with_month(&self, month: u8) -> TemporalResult<Self> {
        Ok(self.map(self.date.with_month(month)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist.
    pub fn with_day_of_month(&self, day: u8) -> TemporalResult<Self> {
        Ok(self.map(self.date.with_day_of_month(day)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the ordinal is not in the
    /// year.
    pub fn with_day_of_year(&self, ordinal: u16) -> TemporalResult<Self> {
        Ok(self.map(self.date.with_day_of_year(ordinal)?))
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        Ok(self.map(self.date.plus(amount, unit)?))
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn minus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        Ok(self.map(self.date.minus(amount, unit)?))
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn plus_days(&self, days: i64) -> TemporalResult<Self> {
        self.plus(days, Unit::Days)
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn plus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.plus(weeks, Unit::Weeks)
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn plus_months(&self, months: i64) -> TemporalResult<Self> {
        self.plus(months, Unit::Months)
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn plus_years(&self, years: i64) -> TemporalResult<Self> {
        self.plus(years, Unit::Years)
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn minus_days(&self, days: i64) -> TemporalResult<Self> {
        self.minus(days, Unit::Days)
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn minus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.minus(weeks, Unit::Weeks)
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn minus_months(&self, months: i64) -> TemporalResult<Self> {
        self.minus(months, Unit::Months)
    }

    /// ## Errors
    /// See [`CivilDate::plus`].
    pub fn minus_years(&self, years: i64) -> TemporalResult<Self> {
        self.minus(years, Unit::Years)
    }

    /// ## Errors
    /// See [`CivilDate::plus_period`].
    pub fn plus_period(&self, period: &Period) -> TemporalResult<Self> {
        Ok(self.map(self.date.plus_period(period)?))
    }

    /// ## Errors
    /// See [`CivilDate::plus_period`].
    pub fn minus_period(&self, period: &Period) -> TemporalResult<Self> {
        Ok(self.map(self.date.minus_period(period)?))
    }

    const fn map(&self, date: CivilDate) -> Self {
        Self::new(date, self.offset)
    }
}

impl Temporal for OffsetDate {
    fn instant(&self) -> Instant {
        self.date
            .instant()
            .shifted_seconds(-i64::from(self.offset.as_seconds()))
    }
}

impl_instant_ordering!(OffsetDate);

impl fmt::Display for OffsetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if !self.offset.is_utc() {
            write!(f, "{}", self.offset)?;
        }
        Ok(())
    }
}

impl FromStr for OffsetDate {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use kalends_core::clock::FixedClock;

    fn date(text: &str) -> OffsetDate {
        OffsetDate::parse(text).unwrap()
    }

    #[test]
    fn zero_offset_is_omitted() {
        assert_eq!(date("2015-04-25").to_string(), "2015-04-25");
        assert_eq!(date("2015-04-25Z").to_string(), "2015-04-25");
        assert_eq!(date("2015-04-25+00:00").to_string(), "2015-04-25");
        assert_eq!(date("2015-04-25-05:00").to_string(), "2015-04-25-05:00");
    }

    #[test]
    fn equality_is_by_instant() {
        // midnight at +01:00 is 23:00 UTC the day before
        assert!(date("2015-04-25+01:00") < date("2015-04-25"));
        assert_ne!(date("2015-04-25+01:00"), date("2015-04-25"));
        assert_eq!(date("2015-04-25"), date("2015-04-25Z"));
    }

    #[test]
    fn arithmetic_keeps_the_offset() {
        let value = date("2024-01-31+09:00");
        assert_eq!(value.plus_months(1).unwrap().to_string(), "2024-02-29+09:00");
        assert_eq!(value.minus_days(31).unwrap().to_string(), "2023-12-31+09:00");
        assert!(matches!(
            value.plus(1, Unit::Hours),
            Err(TemporalError::InvalidUnit(_))
        ));
    }

    #[test]
    fn now_at_offset() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2015, 4, 25, 22, 0, 0).unwrap());
        let east = UtcOffset::from_hours_minutes(3, 0).unwrap();
        assert_eq!(
            OffsetDate::now_at(east, &clock).unwrap().to_string(),
            "2015-04-26+03:00"
        );
        assert_eq!(
            OffsetDate::now_at(UtcOffset::UTC, &clock).unwrap().to_civil(),
            CivilDate::of(2015, 4, 25).unwrap()
        );
    }

    #[test]
    fn rejects_bad_offsets_and_days() {
        assert!(matches!(
            OffsetDate::parse("2015-04-25+50:00"),
            Err(TemporalError::InvalidFormat(_))
        ));
        assert!(matches!(
            OffsetDate::parse("2015-04-31"),
            Err(TemporalError::InvalidDate(_))
        ));
    }
}
