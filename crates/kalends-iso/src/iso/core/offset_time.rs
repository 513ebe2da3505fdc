//! Time of day with a fixed UTC offset.

use std::fmt;
use std::str::FromStr;

use kalends_core::clock::{Clock, SystemClock};

use super::duration::Duration;
use super::instant::{Instant, Temporal, impl_instant_ordering};
use super::offset::UtcOffset;
use super::time::CivilTime;
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};
use crate::iso::parse;

/// A wall-clock time at an offset, e.g. `19:35:20.123400+01:00`.
///
/// Values compare on the UTC time of day, so `19:00:00+01:00` equals
/// `18:00:00Z`.
#[derive(Debug, Clone, Copy)]
pub struct OffsetTime {
    time: CivilTime,
    offset: UtcOffset,
}

impl OffsetTime {
    #[must_use]
    pub const fn new(time: CivilTime, offset: UtcOffset) -> Self {
        Self { time, offset }
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if a field is out of range.
    pub fn of(hour: u8, minute: u8, second: u8, offset: UtcOffset) -> TemporalResult<Self> {
        Ok(Self::new(CivilTime::of(hour, minute, second)?, offset))
    }

    /// Parses `HH:MM:SS[.f][Z|±HH:MM]`. A missing offset means UTC.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not a time.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        let (fields, offset) = parse::parse_time(text)?;
        let time = CivilTime::of_micro(fields.hour, fields.minute, fields.second, fields.microsecond)?;
        let value = Self::new(time, UtcOffset::from_seconds(offset.unwrap_or_default())?);
        tracing::debug!(%value, "Parsed offset time");
        Ok(value)
    }

    #[must_use]
    pub fn now() -> Self {
        Self::now_at(UtcOffset::UTC, &SystemClock)
    }

    /// The current time of day as seen at `offset`.
    #[must_use]
    pub fn now_at(offset: UtcOffset, clock: &impl Clock) -> Self {
        let local = clock.now().with_timezone(&offset.to_fixed_offset());
        Self::new(CivilTime::from(local.time()), offset)
    }

    #[must_use]
    pub const fn to_civil(&self) -> CivilTime {
        self.time
    }

    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Keeps the clock fields and replaces the offset.
    #[must_use]
    pub const fn with_offset(&self, offset: UtcOffset) -> Self {
        Self::new(self.time, offset)
    }

    /// The same UTC time of day seen at another offset.
    #[must_use]
    pub fn with_offset_same_instant(&self, offset: UtcOffset) -> Self {
        let shifted = self
            .instant()
            .shifted_seconds(i64::from(offset.as_seconds()));
        Self::new(CivilTime::from_micro_of_day(shifted.micro_of_day()), offset)
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
    /// Returns [`TemporalError::InvalidTime`] if the result is out of range.
    pub fn with_hour(&self, hour: u8) -> TemporalResult<Self> {
        Ok(self.map(self.time.with_hour(hour)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the result is out of range.
    pub fn with_minute(&self, minute: u8) -> TemporalResult<Self> {
        Ok(self.map(self.time.with_minute(minute)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the result is out of range.
    pub fn with_second(&self, second: u8) -> TemporalResult<Self> {
        Ok(self.map(self.time.with_second(second)?))
    }

    /// ## Errors
    /// Returns [`TemporalError::InvalidTime`] if the result is out of range.
    pub fn with_microsecond(&self, microsecond: u32) -> TemporalResult<Self> {
        Ok(self.map(self.time.with_microsecond(microsecond)?))
    }

    /// ## Errors
    /// See [`CivilTime::plus`].
    pub fn plus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        Ok(self.map(self.time.plus(amount, unit)?))
    }

    /// ## Errors
    /// See [`CivilTime::plus`].
    pub fn minus(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        Ok(self.map(self.time.minus(amount, unit)?))
    }

    /// ## Errors
    /// See [`CivilTime::plus`].
    pub fn plus_hours(&self, hours: i64) -> TemporalResult<Self> {
        self.plus(hours, Unit::Hours)
    }

    /// ## Errors
    /// See [`CivilTime::plus`].
    pub fn plus_minutes(&self, minutes: i64) -> TemporalResult<Self> {
        self.plus(minutes, Unit::Minutes)
    }

    /// ## Errors
    /// See [`CivilTime::plus`].
    pub fn plus_seconds(&self, seconds: i64) -> TemporalResult<Self> {
        self.plus(seconds, Unit::Seconds)
    }

    /// ## Errors
    /// See [`CivilTime::plus`].
    pub fn minus_hours(&self, hours: i64) -> TemporalResult<Self> {
        self.minus(hours, Unit::Hours)
    }

    /// ## Errors
    /// See [`CivilTime::plus`].
    pub fn minus_minutes(&self, minutes: i64) -> TemporalResult<Self> {
        self.minus(minutes, Unit::Minutes)
    }

    /// ## Errors
    /// See [`CivilTime::plus`].
    pub fn minus_seconds(&self, seconds: i64) -> TemporalResult<Self> {
        self.minus(seconds, Unit::Seconds)
    }

    /// ## Errors
    /// See [`CivilTime::plus_duration`].
    pub fn plus_duration(&self, duration: &Duration) -> TemporalResult<Self> {
        Ok(self.map(self.time.plus_duration(duration)?))
    }

    /// ## Errors
    /// See [`CivilTime::plus_duration`].
    pub fn minus_duration(&self, duration: &Duration) -> TemporalResult<Self> {
        Ok(self.map(self.time.minus_duration(duration)?))
    }

    const fn map(&self, time: CivilTime) -> Self {
        Self::new(time, self.offset)
    }
}

impl Temporal for OffsetTime {
    /// The UTC clock reading, kept on the day of the wall time so that
    /// shifting across midnight does not move it to another day.
    fn instant(&self) -> Instant {
        let wall = self.time.instant();
        let utc = wall.shifted_seconds(-i64::from(self.offset.as_seconds()));
        Instant::from_parts(wall.epoch_day(), utc.micro_of_day())
    }
}

impl_instant_ordering!(OffsetTime);

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        if !self.offset.is_utc() {
            write!(f, "{}", self.offset)?;
        }
        Ok(())
    }
}

impl FromStr for OffsetTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(text: &str) -> OffsetTime {
        OffsetTime::parse(text).unwrap()
    }

    #[test]
    fn canonical_text() {
        assert_eq!(time("19:35:20.1234+01:00").to_string(), "19:35:20.123400+01:00");
        assert_eq!(time("19:35:20Z").to_string(), "19:35:20");
        assert_eq!(time("19:35:20.000").to_string(), "19:35:20");
        assert_eq!(time("24:00:00-02:30").to_string(), "24:00:00-02:30");
    }

    #[test]
    fn compares_utc_time_of_day() {
        assert_eq!(time("19:00:00+01:00"), time("18:00:00Z"));
        assert!(time("19:00:00+02:00") < time("18:00:00Z"));
        assert_eq!(time("19:00:00+01:00").to_string(), "19:00:00+01:00");
    }

    #[test]
    fn compares_across_midnight() {
        assert_eq!(time("00:30:00+01:00"), time("23:30:00Z"));
        assert_eq!(time("23:30:00-02:00"), time("01:30:00Z"));
        assert!(time("00:30:00+01:00") > time("23:00:00Z"));
        assert!(time("00:30:00+01:00") < time("23:45:00Z"));
    }

    #[test]
    fn same_instant_at_other_offset() {
        let value = time("01:30:00+02:00");
        let utc = value.with_offset_same_instant(UtcOffset::UTC);
        assert_eq!(utc.to_string(), "23:30:00");
        assert_eq!(utc, value);
        assert_eq!(value.with_offset(UtcOffset::UTC).to_string(), "01:30:00");
    }

    #[test]
    fn arithmetic_keeps_the_offset() {
        let value = time("23:00:00-05:00");
        assert_eq!(value.plus_hours(2).unwrap().to_string(), "01:00:00-05:00");
        assert_eq!(
            value.minus_duration(&Duration::of_minutes(90)).unwrap().to_string(),
            "21:30:00-05:00"
        );
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        for text in ["19:00:00+50:00", "19:00:00+14:01", ""] {
            assert!(matches!(
                OffsetTime::parse(text),
                Err(TemporalError::InvalidFormat(_))
            ));
        }
    }
}
