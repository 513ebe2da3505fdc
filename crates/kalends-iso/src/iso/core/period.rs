//! Calendar amounts (`P1Y2M3D`).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::arith;
use super::interval::Interval;
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};

/// A calendar-relative amount of years, months and days.
///
/// Each field keeps its own sign and a separate flag negates the whole value.
/// Fields never carry: thirteen months stay thirteen months. A period has no
/// fixed length, so it is not ordered.
///
/// Equality compares the fields with the sign flag applied, so `-P1Y`
/// equals a period of minus one year and every zero period is equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Period {
    negative: bool,
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    pub const ZERO: Self = Self::of(0, 0, 0);

    #[must_use]
    pub const fn of(years: i32, months: i32, days: i32) -> Self {
        Self {
            negative: false,
            years,
            months,
            days,
        }
    }

    #[must_use]
    pub const fn of_years(years: i32) -> Self {
        Self::of(years, 0, 0)
    }

    #[must_use]
    pub const fn of_months(months: i32) -> Self {
        Self::of(0, months, 0)
    }

    #[must_use]
    pub const fn of_days(days: i32) -> Self {
        Self::of(0, 0, days)
    }

    /// Seven days per week, stored as days.
    ///
    /// ## Errors
    /// Returns [`TemporalError::Overflow`] if the day count does not fit.
    pub fn of_weeks(weeks: i32) -> TemporalResult<Self> {
        weeks
            .checked_mul(7)
            .map(Self::of_days)
            .ok_or_else(|| TemporalError::overflow(&format!("{weeks} weeks")))
    }

    /// Parses the duration grammar and keeps only the calendar fields, so
    /// `PT19H` is a zero period. The canonical zero form `P` is accepted as
    /// well.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not an amount.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        if text == "P" {
            return Ok(Self::ZERO);
        }
        Ok(Self::from(&Interval::parse(text)?))
    }

    /// Years as stored, before the sign flag.
    #[must_use]
    pub const fn years(&self) -> i32 {
        self.years
    }

    #[must_use]
    pub const fn months(&self) -> i32 {
        self.months
    }

    #[must_use]
    pub const fn days(&self) -> i32 {
        self.days
    }

    /// Years, months and days with the sign flag applied.
    #[must_use]
    pub const fn signed_fields(&self) -> (i64, i64, i64) {
        let sign = if self.negative { -1 } else { 1 };
        (
            sign * self.years as i64,
            sign * self.months as i64,
            sign * self.days as i64,
        )
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Whether any field points backwards once the sign flag is applied.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        let (years, months, days) = self.signed_fields();
        years < 0 || months < 0 || days < 0
    }

    /// Flips the sign flag; the fields are untouched.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    #[must_use]
    pub const fn with_years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub const fn with_months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    #[must_use]
    pub const fn with_days(mut self, days: i32) -> Self {
        self.days = days;
        self
    }

    /// Adds to the stored years field.
    ///
    /// ## Errors
    /// Returns [`TemporalError::Overflow`] if the field leaves the `i32` range.
    pub fn plus_years(&self, years: i64) -> TemporalResult<Self> {
        Ok(self.with_years(add_field(self.years, years, "years")?))
    }

    /// Adds to the stored months field. Twelve months are not a year here.
    ///
    /// ## Errors
    /// Returns [`TemporalError::Overflow`] if the field leaves the `i32` range.
    pub fn plus_months(&self, months: i64) -> TemporalResult<Self> {
        Ok(self.with_months(add_field(self.months, months, "months")?))
    }

    /// ## Errors
    /// Returns [`TemporalError::Overflow`] if the field leaves the `i32` range.
    pub fn plus_days(&self, days: i64) -> TemporalResult<Self> {
        Ok(self.with_days(add_field(self.days, days, "days")?))
    }

    /// ## Errors
    /// Returns [`TemporalError::Overflow`] if the field leaves the `i32` range.
    pub fn plus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.plus(weeks, Unit::Weeks)
    }

    /// ## Errors
    /// See [`Self::plus_years`].
    pub fn minus_years(&self, years: i64) -> TemporalResult<Self> {
        self.plus_years(arith::negate(years)?)
    }

    /// ## Errors
    /// See [`Self::plus_months`].
    pub fn minus_months(&self, months: i64) -> TemporalResult<Self> {
        self.plus_months(arith::negate(months)?)
    }

    /// ## Errors
    /// See [`Self::plus_days`].
    pub fn minus_days(&self, days: i64) -> TemporalResult<Self> {
        self.plus_days(arith::negate(days)?)
    }

    /// ## Errors
    /// See [`Self::plus_weeks`].
    pub fn minus_weeks(&self, weeks: i64) -> TemporalResult<Self> {
        self.plus_weeks(arith::negate(weeks)?)
    }

    /// Adds to the field matching a calendar unit. Decades, centuries and
    /// millennia land in years, weeks in days.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidUnit`] for clock units, or
    /// [`TemporalError::Overflow`] if a field leaves the `i32` range.
    pub fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        let scale = |per_unit: i64| {
            amount
                .checked_mul(per_unit)
                .ok_or_else(|| TemporalError::overflow(&format!("{amount} {unit}")))
        };
        match unit {
            Unit::Millennia => self.plus_years(scale(1000)?),
            Unit::Centuries => self.plus_years(scale(100)?),
            Unit::Decades => self.plus_years(scale(10)?),
            Unit::Years => self.plus_years(amount),
            Unit::Months => self.plus_months(amount),
            Unit::Weeks => self.plus_days(scale(7)?),
            Unit::Days => self.plus_days(amount),
            other => Err(TemporalError::InvalidUnit(format!(
                "Period does not support {other}"
            ))),
        }
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        self.plus(arith::negate(amount)?, unit)
    }
}

fn add_field(current: i32, delta: i64, what: &str) -> TemporalResult<i32> {
    i64::from(current)
        .checked_add(delta)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| TemporalError::overflow(&format!("{current} {what} plus {delta}")))
}

impl PartialEq for Period {
    fn eq(&self, other: &Self) -> bool {
        self.signed_fields() == other.signed_fields()
    }
}

impl Eq for Period {}

impl Hash for Period {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signed_fields().hash(state);
    }
}

impl fmt::Display for Period {
    /// A period pointing entirely backwards prints as `-P...`; mixed signs
    /// print each field with its own sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (years, months, days) = self.signed_fields();
        let backwards = years <= 0 && months <= 0 && days <= 0 && !self.is_zero();
        let fields = if backwards {
            write!(f, "-")?;
            (-years, -months, -days)
        } else {
            (years, months, days)
        };

        write!(f, "P")?;
        for (value, designator) in [(fields.0, 'Y'), (fields.1, 'M'), (fields.2, 'D')] {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&Interval> for Period {
    /// Keeps the calendar fields and the sign; clock fields are dropped.
    fn from(value: &Interval) -> Self {
        Self {
            negative: value.is_negative(),
            years: value.years(),
            months: value.months(),
            days: value.days(),
        }
    }
}

impl From<Interval> for Period {
    fn from(value: Interval) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_arithmetic_does_not_carry() {
        assert_eq!(
            Period::of(1, 1, 1).plus_months(1).unwrap().to_string(),
            "P1Y2M1D"
        );
        assert_eq!(
            Period::parse("P1Y1M1D").unwrap().minus_years(1).unwrap().to_string(),
            "P1M1D"
        );
        assert_eq!(Period::of_months(11).plus_months(2).unwrap().to_string(), "P13M");
        assert_eq!(Period::of_days(6).plus_weeks(1).unwrap().to_string(), "P13D");
        assert_eq!(
            Period::ZERO.plus(2, Unit::Centuries).unwrap().to_string(),
            "P200Y"
        );
    }

    #[test]
    fn clock_units_are_invalid() {
        assert!(matches!(
            Period::ZERO.plus(1, Unit::Hours),
            Err(TemporalError::InvalidUnit(_))
        ));
    }

    #[test]
    fn zero_and_clock_only_input() {
        assert_eq!(Period::parse("PT19H").unwrap().to_string(), "P");
        assert_eq!(Period::parse("P").unwrap(), Period::ZERO);
        assert_eq!(Period::ZERO.negated(), Period::ZERO);
        assert_eq!(Period::ZERO.negated().to_string(), "P");
    }

    #[test]
    fn sign_handling() {
        let back = Period::parse("-P1Y2D").unwrap();
        assert!(back.is_negative());
        assert_eq!(back.years(), 1);
        assert_eq!(back.signed_fields(), (-1, 0, -2));
        assert_eq!(back.to_string(), "-P1Y2D");
        assert_eq!(back, Period::of(-1, 0, -2));
        assert_eq!(back.negated(), Period::of(1, 0, 2));

        let mixed = Period::of(1, -1, 0);
        assert!(mixed.is_negative());
        assert_eq!(mixed.to_string(), "P1Y-1M");
        assert_eq!(mixed.negated().to_string(), "P-1Y1M");
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            Period::of_years(i32::MAX).plus_years(1),
            Err(TemporalError::Overflow(_))
        ));
        assert!(Period::of_weeks(i32::MAX).is_err());
        assert_eq!(Period::of_weeks(2).unwrap().days(), 14);
    }
}
