//! The full lexical amount, calendar and clock fields together.

use std::fmt;
use std::str::FromStr;

use super::duration::{Duration, write_seconds};
use super::period::Period;
use crate::error::{TemporalError, TemporalResult};
use crate::iso::parse::{self, IntervalFields};

/// Every field of `[-]P[nY][nM][nD][T[nH][nM][n[.f]S]]`, as written.
///
/// [`Duration`] and [`Period`] are projections of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    /// Never set on a zero interval.
    negative: bool,
    years: i32,
    months: i32,
    days: i32,
    hours: u32,
    minutes: u32,
    seconds: u32,
    microseconds: u32,
}

impl Interval {
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not an amount,
    /// or [`TemporalError::Overflow`] if a field does not fit.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        let value = Self::from(parse::parse_interval(text)?);
        tracing::debug!(%value, "Parsed interval");
        Ok(value)
    }

    /// Fuses a period and a duration. The duration's sign must agree with
    /// the period's direction unless one of them is zero.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the signs disagree, or
    /// the period has fields of both signs.
    pub fn from_parts(period: &Period, duration: &Duration) -> TemporalResult<Self> {
        let (years, months, days) = period.signed_fields();
        let period_negative = period.is_negative();
        let mixed = period_negative && (years > 0 || months > 0 || days > 0);
        let disagree = !period.is_zero()
            && !duration.is_zero()
            && period_negative != duration.is_negative();
        if mixed || disagree {
            return Err(TemporalError::InvalidFormat(
                "an interval carries one sign for all fields".to_string(),
            ));
        }

        let magnitude = |value: i64, what: &str| {
            i32::try_from(value.abs()).map_err(|_e| TemporalError::overflow(what))
        };
        Ok(Self {
            negative: period_negative || duration.is_negative(),
            years: magnitude(years, "years")?,
            months: magnitude(months, "months")?,
            days: magnitude(days, "days")?,
            hours: duration.hours(),
            minutes: duration.minutes(),
            seconds: duration.seconds(),
            microseconds: duration.microseconds(),
        }
        .normalized())
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

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

    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub const fn microseconds(&self) -> u32 {
        self.microseconds
    }

    #[must_use]
    pub const fn has_calendar_fields(&self) -> bool {
        self.years != 0 || self.months != 0 || self.days != 0
    }

    #[must_use]
    pub const fn has_clock_fields(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.microseconds != 0
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        !self.has_calendar_fields() && !self.has_clock_fields()
    }

    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self.normalized()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from(self)
    }

    #[must_use]
    pub fn period(&self) -> Period {
        Period::from(self)
    }

    const fn normalized(mut self) -> Self {
        if self.is_zero() {
            self.negative = false;
        }
        self
    }
}

impl From<IntervalFields> for Interval {
    fn from(fields: IntervalFields) -> Self {
        Self {
            negative: fields.negative,
            years: fields.years,
            months: fields.months,
            days: fields.days,
            hours: fields.hours,
            minutes: fields.minutes,
            seconds: fields.seconds,
            microseconds: fields.microseconds,
        }
        .normalized()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        for (value, designator) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }
        if self.has_clock_fields() {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 || self.microseconds > 0 {
                write_seconds(f, self.seconds, self.microseconds)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Interval {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_every_field() {
        let interval = Interval::parse("P2015Y4M25DT19H35M20S").unwrap();
        assert_eq!(interval.to_string(), "P2015Y4M25DT19H35M20S");
        assert_eq!(interval.duration().to_string(), "PT19H35M20S");
        assert_eq!(interval.period().to_string(), "P2015Y4M25D");
    }

    #[test]
    fn canonical_forms() {
        assert_eq!(Interval::parse("P0Y0D").unwrap().to_string(), "PT0S");
        assert_eq!(Interval::parse("-PT0S").unwrap(), Interval::default());
        assert_eq!(Interval::parse("-P1MT2M3.250S").unwrap().to_string(), "-P1MT2M3.25S");
        assert_eq!(Interval::parse("PT60S").unwrap().to_string(), "PT60S");
    }

    #[test]
    fn sign_projects_onto_both_halves() {
        let interval = Interval::parse("-P1DT1H").unwrap();
        assert!(interval.duration().is_negative());
        assert!(interval.period().is_negative());
        assert!(!interval.negated().is_negative());
    }

    #[test]
    fn from_parts_requires_one_sign() {
        let joined = Interval::from_parts(&Period::of_days(1), &Duration::of_hours(2)).unwrap();
        assert_eq!(joined.to_string(), "P1DT2H");

        let back = Interval::from_parts(
            &Period::of_days(1).negated(),
            &Duration::of_hours(2).negated(),
        )
        .unwrap();
        assert_eq!(back.to_string(), "-P1DT2H");

        assert!(Interval::from_parts(&Period::of(1, -1, 0), &Duration::ZERO).is_err());
        assert!(
            Interval::from_parts(&Period::of_days(1), &Duration::of_hours(2).negated()).is_err()
        );
    }
}
