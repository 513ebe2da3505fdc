//! Calendar date without a time of day or offset.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use kalends_core::calendar::{CalendarAuthority, Ymd};
use kalends_core::clock::{Clock, SystemClock};

use super::CALENDAR;
use super::arith;
use super::calendar_fields::{DayOfWeek, Month};
use super::datetime::CivilDateTime;
use super::instant::{Instant, Temporal, impl_instant_ordering};
use super::offset::UtcOffset;
use super::offset_date::OffsetDate;
use super::period::Period;
use super::time::CivilTime;
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};
use crate::iso::parse;

/// A day in the proleptic Gregorian calendar, e.g. `2015-04-25`.
///
/// The fields always name a day that exists. Derived fields are resolved
/// once by the calendar authority at construction.
#[derive(Debug, Clone, Copy)]
pub struct CivilDate {
    ymd: Ymd,
    epoch_day: i64,
    day_of_year: u16,
    weekday: u8,
}

impl CivilDate {
    /// Creates a date from numeric fields.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the fields do not name a real
    /// day, e.g. `2023-02-29`.
    pub fn of(year: i32, month: u8, day: u8) -> TemporalResult<Self> {
        Self::from_ymd(Ymd::new(year, month, day))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if `day` does not exist in the
    /// month.
    pub fn of_month(year: i32, month: Month, day: u8) -> TemporalResult<Self> {
        Self::of(year, month.value(), day)
    }

    /// Creates a date from its 1-based ordinal day in `year`.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if `ordinal` is 0 or past the
    /// end of the year.
    pub fn of_year_day(year: i32, ordinal: u16) -> TemporalResult<Self> {
        Self::from_ymd(CALENDAR.from_day_of_year(year, ordinal)?)
    }

    /// Creates a date from days since 1970-01-01.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] outside the calendar range.
    pub fn of_epoch_day(day: i64) -> TemporalResult<Self> {
        Self::from_ymd(CALENDAR.from_epoch_day(day)?)
    }

    pub(crate) fn from_ymd(ymd: Ymd) -> TemporalResult<Self> {
        if !CALENDAR.is_valid(ymd) {
            return Err(TemporalError::InvalidDate(format!(
                "{} does not exist",
                DisplayYmd(ymd)
            )));
        }

        Ok(Self {
            ymd,
            epoch_day: CALENDAR.epoch_day(ymd)?,
            day_of_year: CALENDAR.day_of_year(ymd)?,
            weekday: CALENDAR.weekday_of(ymd)?,
        })
    }

    /// Parses `YYYY-MM-DD`. A trailing offset is accepted and discarded.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not a date, or
    /// [`TemporalError::InvalidDate`] if it names a day that does not exist.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        let (fields, _offset) = parse::parse_date(text)?;
        let date = Self::of(fields.year, fields.month, fields.day)?;
        tracing::debug!(%date, "Parsed date");
        Ok(date)
    }

    /// Today in UTC according to the system clock.
    ///
    /// ## Errors
    /// Only fails if the clock is outside the calendar range.
    pub fn now() -> TemporalResult<Self> {
        Self::now_with(&SystemClock)
    }

    /// ## Errors
    /// Only fails if the clock is outside the calendar range.
    pub fn now_with(clock: &impl Clock) -> TemporalResult<Self> {
        Self::try_from(clock.now().date_naive())
    }

    pub(crate) const fn ymd(&self) -> Ymd {
        self.ymd
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.ymd.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        Month::from_valid(self.ymd.month)
    }

    #[must_use]
    pub const fn month_value(&self) -> u8 {
        self.ymd.month
    }

    #[must_use]
    pub const fn day_of_month(&self) -> u8 {
        self.ymd.day
    }

    #[must_use]
    pub const fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_valid(self.weekday)
    }

    /// Ordinal day of the year, 1 on January 1st.
    #[must_use]
    pub const fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Days since 1970-01-01.
    #[must_use]
    pub const fn epoch_day(&self) -> i64 {
        self.epoch_day
    }

    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        CALENDAR.is_leap_year(self.ymd.year)
    }

    #[must_use]
    pub fn length_of_month(&self) -> u8 {
        CALENDAR.days_in_month(self.ymd.year, self.ymd.month)
    }

    #[must_use]
    pub fn length_of_year(&self) -> u16 {
        CALENDAR.days_in_year(self.ymd.year)
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist in the
    /// new year (February 29th).
    pub fn with_year(&self, year: i32) -> TemporalResult<Self> {
        Self::of(year, self.ymd.month, self.ymd.day)
    }

    /// Replaces the month. The day is never clamped.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist in the
    /// new month, e.g. January 31st with month 2.
    pub fn with_month(&self, month: u8) -> TemporalResult<Self> {
        Self::of(self.ymd.year, month, self.ymd.day)
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist in the
    /// month.
    pub fn with_day_of_month(&self, day: u8) -> TemporalResult<Self> {
        Self::of(self.ymd.year, self.ymd.month, day)
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the ordinal is not in the
    /// year.
    pub fn with_day_of_year(&self, ordinal: u16) -> TemporalResult<Self> {
        Self::of_year_day(self.ymd.year, ordinal)
    }

    /// Adds `amount` of a calendar unit. Month-scale units clamp the day to
    /// the end of the resulting month.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidUnit`] for clock units, or
    /// [`TemporalError::InvalidDate`] / [`TemporalError::Overflow`] if the
    /// result is out of range.
    pub fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        Self::from_ymd(arith::shift_date(self.ymd, amount, unit, "CivilDate")?)
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

    /// Adds years and months first (clamping the day), then days.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidDate`] if the result is out of range.
    pub fn plus_period(&self, period: &Period) -> TemporalResult<Self> {
        let (years, months, days) = period.signed_fields();
        Self::from_ymd(CALENDAR.add_interval(self.ymd, years, months, days)?)
    }

    /// ## Errors
    /// See [`Self::plus_period`].
    pub fn minus_period(&self, period: &Period) -> TemporalResult<Self> {
        self.plus_period(&period.negated())
    }

    #[must_use]
    pub const fn at_time(&self, time: CivilTime) -> CivilDateTime {
        CivilDateTime::new(*self, time)
    }

    #[must_use]
    pub const fn at_start_of_day(&self) -> CivilDateTime {
        CivilDateTime::new(*self, CivilTime::MIDNIGHT)
    }

    #[must_use]
    pub const fn at_offset(&self, offset: UtcOffset) -> OffsetDate {
        OffsetDate::new(*self, offset)
    }
}

impl Temporal for CivilDate {
    fn instant(&self) -> Instant {
        Instant::from_parts(self.epoch_day, 0)
    }
}

impl_instant_ordering!(CivilDate);

/// Writes `YYYY-MM-DD`, with negative years as `-YYYY`.
pub(crate) struct DisplayYmd(pub(crate) Ymd);

impl fmt::Display for DisplayYmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ymd { year, month, day } = self.0;
        if year < 0 {
            write!(f, "-")?;
        }
        write!(f, "{:04}-{month:02}-{day:02}", year.unsigned_abs())
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayYmd(self.ymd).fmt(f)
    }
}

impl FromStr for CivilDate {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<NaiveDate> for CivilDate {
    type Error = TemporalError;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "chrono months are bounded by 12 and days by 31"
    )]
    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        Self::of(value.year(), value.month() as u8, value.day() as u8)
    }
}

impl From<CivilDate> for NaiveDate {
    #[expect(
        clippy::expect_used,
        reason = "every CivilDate was resolved through chrono at construction"
    )]
    fn from(value: CivilDate) -> Self {
        Self::from_ymd_opt(
            value.ymd.year,
            u32::from(value.ymd.month),
            u32::from(value.ymd.day),
        )
        .expect("CivilDate fields are a valid chrono date")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> CivilDate {
        CivilDate::parse(text).unwrap()
    }

    #[test]
    fn leap_day_validation() {
        assert!(CivilDate::of(2024, 2, 29).is_ok());
        assert!(matches!(
            CivilDate::of(2023, 2, 29),
            Err(TemporalError::InvalidDate(_))
        ));
        assert!(matches!(
            CivilDate::parse("2023-02-29"),
            Err(TemporalError::InvalidDate(_))
        ));
    }

    #[test]
    fn calendar_accessors() {
        let d = date("2015-04-25");
        assert_eq!(d.year(), 2015);
        assert_eq!(d.month(), Month::April);
        assert_eq!(d.month_value(), 4);
        assert_eq!(d.day_of_month(), 25);
        assert_eq!(d.day_of_week(), DayOfWeek::Saturday);
        assert_eq!(d.day_of_year(), 115);
        assert!(!d.is_leap_year());
        assert_eq!(d.length_of_month(), 30);
        assert_eq!(d.length_of_year(), 365);
    }

    #[test]
    fn offset_is_discarded() {
        assert_eq!(date("2015-04-25+02:00").to_string(), "2015-04-25");
        assert_eq!(date("2015-04-25Z"), date("2015-04-25"));
    }

    #[test]
    fn negative_and_long_years() {
        assert_eq!(date("-0044-03-15").to_string(), "-0044-03-15");
        assert_eq!(date("12015-04-25").to_string(), "12015-04-25");
        assert_eq!(CivilDate::of(5, 1, 1).unwrap().to_string(), "0005-01-01");
    }

    #[test]
    fn setters_reject_instead_of_clamping() {
        let jan31 = date("2024-01-31");
        assert!(matches!(
            jan31.with_month(2),
            Err(TemporalError::InvalidDate(_))
        ));
        assert_eq!(jan31.with_month(3).unwrap().to_string(), "2024-03-31");
        assert_eq!(
            date("2024-02-29").with_year(2028).unwrap().to_string(),
            "2028-02-29"
        );
        assert!(date("2024-02-29").with_year(2025).is_err());
        assert_eq!(jan31.with_day_of_year(60).unwrap().to_string(), "2024-02-29");
        assert!(jan31.with_day_of_year(367).is_err());
    }

    #[test]
    fn unit_arithmetic_clamps_month_ends() {
        let jan31 = date("2023-01-31");
        assert_eq!(jan31.plus_months(1).unwrap().to_string(), "2023-02-28");
        assert_eq!(jan31.minus_days(31).unwrap().to_string(), "2022-12-31");
        assert_eq!(jan31.plus_weeks(5).unwrap().to_string(), "2023-03-07");
        assert_eq!(jan31.plus(2, Unit::Decades).unwrap().to_string(), "2043-01-31");
        assert_eq!(jan31.minus_years(1).unwrap().to_string(), "2022-01-31");
    }

    #[test]
    fn clock_units_are_invalid() {
        assert!(matches!(
            date("2023-01-31").plus(1, Unit::HalfDays),
            Err(TemporalError::InvalidUnit(_))
        ));
    }

    #[test]
    fn period_applies_months_before_days() {
        let period = Period::of(0, 1, 1);
        assert_eq!(
            date("2024-01-31").plus_period(&period).unwrap().to_string(),
            "2024-03-01"
        );
        assert_eq!(
            date("2024-03-01").minus_period(&period).unwrap().to_string(),
            "2024-01-31"
        );
    }

    #[test]
    fn ordering_follows_the_calendar() {
        assert!(date("2015-04-25") < date("2015-04-26"));
        assert!(date("-0001-12-31") < date("0000-01-01"));
        assert_eq!(date("1970-01-01").epoch_day(), 0);
        assert_eq!(CivilDate::of_epoch_day(-1).unwrap().to_string(), "1969-12-31");
    }

    #[test]
    fn chrono_conversion() {
        let naive = NaiveDate::from_ymd_opt(2015, 4, 25).unwrap();
        let d = CivilDate::try_from(naive).unwrap();
        assert_eq!(d, date("2015-04-25"));
        assert_eq!(NaiveDate::from(d), naive);
    }
}
