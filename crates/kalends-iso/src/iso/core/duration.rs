//! Elapsed-time amounts (`PT19H35M20S`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::arith;
use super::instant::MICROS_PER_SECOND;
use super::interval::Interval;
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};

/// Duration value: hours, minutes and seconds with one sign for the whole.
///
/// Fields are stored as written. `PT60S` stays sixty seconds and adding
/// minutes never carries into hours. Calendar fields cannot be expressed;
/// see [`super::Period`] for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    /// Never set on a zero duration.
    negative: bool,
    hours: u32,
    minutes: u32,
    seconds: u32,
    /// Sub-second part of `seconds` (0-999999).
    microseconds: u32,
}

impl Duration {
    pub const ZERO: Self = Self::of(0, 0, 0);

    /// Creates a new zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[must_use]
    pub const fn of(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            negative: false,
            hours,
            minutes,
            seconds,
            microseconds: 0,
        }
    }

    #[must_use]
    pub const fn of_hours(hours: u32) -> Self {
        Self::of(hours, 0, 0)
    }

    #[must_use]
    pub const fn of_minutes(minutes: u32) -> Self {
        Self::of(0, minutes, 0)
    }

    #[must_use]
    pub const fn of_seconds(seconds: u32) -> Self {
        Self::of(0, 0, seconds)
    }

    /// Creates a new duration builder.
    #[must_use]
    pub const fn builder() -> DurationBuilder {
        DurationBuilder::new()
    }

    /// Parses the duration grammar and keeps only the clock fields, so
    /// `P2015Y` is a zero duration. The canonical zero form `PT` is accepted
    /// as well.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not an amount.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        if text == "PT" {
            return Ok(Self::ZERO);
        }
        Ok(Self::from(&Interval::parse(text)?))
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
    pub const fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.microseconds == 0
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Flips the sign of the whole value; the fields are untouched.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self.normalized()
    }

    #[must_use]
    pub const fn abs(mut self) -> Self {
        self.negative = false;
        self
    }

    #[must_use]
    pub const fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self.normalized()
    }

    #[must_use]
    pub const fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes = minutes;
        self.normalized()
    }

    #[must_use]
    pub const fn with_seconds(mut self, seconds: u32) -> Self {
        self.seconds = seconds;
        self.normalized()
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] for a million or more.
    pub fn with_microseconds(self, microseconds: u32) -> TemporalResult<Self> {
        check_microseconds(microseconds)?;
        Ok(Self {
            microseconds,
            ..self
        }
        .normalized())
    }

    /// Adds to the literal hours field.
    ///
    /// ## Errors
    /// Returns [`TemporalError::Overflow`] if the field would become negative
    /// or exceed `u32::MAX`.
    pub fn plus_hours(&self, hours: i64) -> TemporalResult<Self> {
        Ok(self.with_hours(add_field(self.hours, hours, "hours")?))
    }

    /// ## Errors
    /// See [`Self::plus_hours`].
    pub fn plus_minutes(&self, minutes: i64) -> TemporalResult<Self> {
        Ok(self.with_minutes(add_field(self.minutes, minutes, "minutes")?))
    }

    /// ## Errors
    /// See [`Self::plus_hours`].
    pub fn plus_seconds(&self, seconds: i64) -> TemporalResult<Self> {
        Ok(self.with_seconds(add_field(self.seconds, seconds, "seconds")?))
    }

    /// ## Errors
    /// See [`Self::plus_hours`].
    pub fn minus_hours(&self, hours: i64) -> TemporalResult<Self> {
        self.plus_hours(arith::negate(hours)?)
    }

    /// ## Errors
    /// See [`Self::plus_hours`].
    pub fn minus_minutes(&self, minutes: i64) -> TemporalResult<Self> {
        self.plus_minutes(arith::negate(minutes)?)
    }

    /// ## Errors
    /// See [`Self::plus_hours`].
    pub fn minus_seconds(&self, seconds: i64) -> TemporalResult<Self> {
        self.plus_seconds(arith::negate(seconds)?)
    }

    /// Adds to the field matching a clock unit; half-days count as 12 hours.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidUnit`] for calendar units, or
    /// [`TemporalError::Overflow`] as [`Self::plus_hours`].
    pub fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        match unit {
            Unit::HalfDays => self.plus_hours(
                amount
                    .checked_mul(12)
                    .ok_or_else(|| TemporalError::overflow("half days"))?,
            ),
            Unit::Hours => self.plus_hours(amount),
            Unit::Minutes => self.plus_minutes(amount),
            Unit::Seconds => self.plus_seconds(amount),
            other => Err(TemporalError::InvalidUnit(format!(
                "Duration does not support {other}"
            ))),
        }
    }

    /// ## Errors
    /// See [`Self::plus`].
    pub fn minus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        self.plus(arith::negate(amount)?, unit)
    }

    /// Whole seconds with the sign applied; microseconds are truncated.
    #[must_use]
    pub const fn total_seconds(&self) -> i64 {
        let total =
            self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64;
        if self.negative { -total } else { total }
    }

    #[must_use]
    pub const fn total_microseconds(&self) -> i128 {
        let magnitude = (self.hours as i128 * 3600 + self.minutes as i128 * 60 + self.seconds as i128)
            * MICROS_PER_SECOND as i128
            + self.microseconds as i128;
        if self.negative { -magnitude } else { magnitude }
    }

    /// Orders by elapsed length. `PT60S` and `PT1M` have equal length but
    /// are different values.
    #[must_use]
    pub fn compare_length(&self, other: &Self) -> Ordering {
        self.total_microseconds().cmp(&other.total_microseconds())
    }

    const fn normalized(mut self) -> Self {
        if self.is_zero() {
            self.negative = false;
        }
        self
    }
}

fn check_microseconds(microseconds: u32) -> TemporalResult<()> {
    if microseconds > 999_999 {
        return Err(TemporalError::InvalidTime(format!(
            "{microseconds} microseconds is a whole second or more"
        )));
    }
    Ok(())
}

fn add_field(current: u32, delta: i64, what: &str) -> TemporalResult<u32> {
    i64::from(current)
        .checked_add(delta)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| TemporalError::overflow(&format!("{current} {what} plus {delta}")))
}

/// Writes `n[.f]S`, trimming trailing zeros from the fraction.
pub(crate) fn write_seconds(
    f: &mut fmt::Formatter<'_>,
    seconds: u32,
    microseconds: u32,
) -> fmt::Result {
    write!(f, "{seconds}")?;
    if microseconds > 0 {
        let fraction = format!("{microseconds:06}");
        write!(f, ".{}", fraction.trim_end_matches('0'))?;
    }
    write!(f, "S")
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "PT")?;
        if self.hours > 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes > 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.seconds > 0 || self.microseconds > 0 {
            write_seconds(f, self.seconds, self.microseconds)?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&Interval> for Duration {
    /// Keeps the clock fields and the sign; calendar fields are dropped.
    fn from(value: &Interval) -> Self {
        Self {
            negative: value.is_negative(),
            hours: value.hours(),
            minutes: value.minutes(),
            seconds: value.seconds(),
            microseconds: value.microseconds(),
        }
        .normalized()
    }
}

impl From<Interval> for Duration {
    fn from(value: Interval) -> Self {
        Self::from(&value)
    }
}

/// Builder for constructing `Duration` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationBuilder {
    negative: bool,
    hours: u32,
    minutes: u32,
    seconds: u32,
    microseconds: u32,
}

impl DurationBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            negative: false,
            hours: 0,
            minutes: 0,
            seconds: 0,
            microseconds: 0,
        }
    }

    /// Sets the duration as negative.
    #[must_use]
    pub const fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    #[must_use]
    pub const fn hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    #[must_use]
    pub const fn minutes(mut self, minutes: u32) -> Self {
        self.minutes = minutes;
        self
    }

    #[must_use]
    pub const fn seconds(mut self, seconds: u32) -> Self {
        self.seconds = seconds;
        self
    }

    #[must_use]
    pub const fn microseconds(mut self, microseconds: u32) -> Self {
        self.microseconds = microseconds;
        self
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the microseconds reach a
    /// whole second.
    pub fn build(self) -> TemporalResult<Duration> {
        check_microseconds(self.microseconds)?;
        Ok(Duration {
            negative: self.negative,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
            microseconds: self.microseconds,
        }
        .normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_time_fields_only() {
        assert_eq!(Duration::of(19, 35, 20).to_string(), "PT19H35M20S");
        assert_eq!(Duration::of_minutes(15).to_string(), "PT15M");
        assert_eq!(Duration::of_seconds(60).to_string(), "PT60S");
    }

    #[test]
    fn display_zero_and_negative() {
        assert_eq!(Duration::zero().to_string(), "PT");
        assert_eq!(Duration::zero().negated().to_string(), "PT");
        assert_eq!(Duration::of_minutes(15).negated().to_string(), "-PT15M");
    }

    #[test]
    fn display_fraction() {
        let d = Duration::builder().seconds(3).microseconds(250_000).build().unwrap();
        assert_eq!(d.to_string(), "PT3.25S");
        let d = Duration::builder().microseconds(1).build().unwrap();
        assert_eq!(d.to_string(), "PT0.000001S");
        assert!(Duration::builder().microseconds(1_000_000).build().is_err());
    }

    #[test]
    fn parse_drops_calendar_fields() {
        assert_eq!(
            Duration::parse("P2015Y4M25DT19H35M20S").unwrap().to_string(),
            "PT19H35M20S"
        );
        assert_eq!(Duration::parse("P2015Y").unwrap().to_string(), "PT");
        assert_eq!(Duration::parse("PT").unwrap(), Duration::ZERO);
        assert_eq!(Duration::parse("-PT1M").unwrap().to_string(), "-PT1M");
        assert!(matches!(
            Duration::parse("foo"),
            Err(TemporalError::InvalidFormat(_))
        ));
    }

    #[test]
    fn field_arithmetic_does_not_carry() {
        let d = Duration::of_minutes(59).plus_minutes(2).unwrap();
        assert_eq!(d.to_string(), "PT61M");
        assert_eq!(d.minus_minutes(61).unwrap(), Duration::ZERO);
        assert!(matches!(
            Duration::of_minutes(1).minus_minutes(2),
            Err(TemporalError::Overflow(_))
        ));
        assert_eq!(
            Duration::ZERO.plus(1, Unit::HalfDays).unwrap().to_string(),
            "PT12H"
        );
        assert!(matches!(
            Duration::ZERO.plus(1, Unit::Days),
            Err(TemporalError::InvalidUnit(_))
        ));
    }

    #[test]
    fn sign_covers_the_whole_value() {
        let d = Duration::of(1, 30, 0).negated();
        assert!(d.is_negative());
        assert_eq!(d.hours(), 1);
        assert_eq!(d.total_seconds(), -5400);
        assert_eq!(d.abs().total_seconds(), 5400);
        assert_eq!(d.negated(), Duration::of(1, 30, 0));
    }

    #[test]
    fn equality_is_literal_and_length_is_separate() {
        let minute = Duration::of_minutes(1);
        let seconds = Duration::of_seconds(60);
        assert_ne!(minute, seconds);
        assert_eq!(minute.compare_length(&seconds), Ordering::Equal);
        assert_eq!(
            minute.negated().compare_length(&Duration::ZERO),
            Ordering::Less
        );
    }
}
