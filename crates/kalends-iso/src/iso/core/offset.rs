//! Fixed numeric UTC offsets.

use std::fmt;
use std::str::FromStr;

use chrono::FixedOffset;

use crate::error::{TemporalError, TemporalResult};
use crate::iso::parse;

/// Largest offset magnitude accepted, in seconds (14:00).
const MAX_SECONDS: i32 = 14 * 3600;

/// UTC offset (e.g., `+05:30`, `-08:00`, `Z`).
///
/// Stored as total seconds east of UTC. Always a whole number of minutes
/// within ±14:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// UTC offset (zero).
    pub const UTC: Self = Self { seconds: 0 };

    /// Creates an offset from signed hours and unsigned minutes.
    ///
    /// The sign of `hours` applies to the minutes as well. Offsets between
    /// `-00:59` and `-00:01` need [`Self::from_seconds`].
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidOffset`] if the offset is outside
    /// ±14:00 or `minutes` is 60 or more.
    pub fn from_hours_minutes(hours: i8, minutes: u8) -> TemporalResult<Self> {
        if minutes >= 60 {
            return Err(TemporalError::InvalidOffset(format!(
                "minutes {minutes} must be below 60"
            )));
        }
        let magnitude = i32::from(hours.unsigned_abs()) * 3600 + i32::from(minutes) * 60;
        Self::from_seconds(if hours < 0 { -magnitude } else { magnitude })
    }

    /// Creates an offset from total seconds east of UTC.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidOffset`] if the offset is outside
    /// ±14:00 or not a whole number of minutes.
    pub fn from_seconds(seconds: i32) -> TemporalResult<Self> {
        if !(-MAX_SECONDS..=MAX_SECONDS).contains(&seconds) {
            return Err(TemporalError::InvalidOffset(format!(
                "{seconds}s is outside -14:00..=+14:00"
            )));
        }
        if seconds % 60 != 0 {
            return Err(TemporalError::InvalidOffset(format!(
                "{seconds}s is not a whole number of minutes"
            )));
        }
        Ok(Self { seconds })
    }

    /// Parses `Z` or `±HH:MM`.
    ///
    /// ## Errors
    /// Returns [`TemporalError::InvalidFormat`] if the text is not an offset.
    pub fn parse(text: &str) -> TemporalResult<Self> {
        Self::from_seconds(parse::parse_offset(text)?)
    }

    /// Returns the offset as total seconds from UTC.
    #[must_use]
    pub const fn as_seconds(self) -> i32 {
        self.seconds
    }

    /// Returns hours component (negative west of UTC).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded to ±14 hours"
    )]
    pub const fn hours(self) -> i8 {
        (self.seconds / 3600) as i8
    }

    /// Returns minutes component (always positive).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the remainder of an absolute value divided by 60 is 0-59"
    )]
    pub const fn minutes(self) -> u8 {
        ((self.seconds.abs() % 3600) / 60) as u8
    }

    #[must_use]
    pub const fn is_utc(self) -> bool {
        self.seconds == 0
    }

    /// The offset as a chrono [`FixedOffset`].
    #[must_use]
    #[expect(
        clippy::expect_used,
        reason = "±14:00 is always inside chrono's ±24:00 window"
    )]
    pub fn to_fixed_offset(self) -> FixedOffset {
        FixedOffset::east_opt(self.seconds).expect("offset within ±14:00")
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_utc() {
            return write!(f, "Z");
        }
        let sign = if self.seconds > 0 { '+' } else { '-' };
        let hours = self.seconds.abs() / 3600;
        let minutes = (self.seconds.abs() % 3600) / 60;
        write!(f, "{sign}{hours:02}:{minutes:02}")
    }
}

impl FromStr for UtcOffset {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<FixedOffset> for UtcOffset {
    type Error = TemporalError;

    fn try_from(value: FixedOffset) -> Result<Self, Self::Error> {
        Self::from_seconds(value.local_minus_utc())
    }
}

impl From<UtcOffset> for FixedOffset {
    fn from(value: UtcOffset) -> Self {
        value.to_fixed_offset()
    }
}
