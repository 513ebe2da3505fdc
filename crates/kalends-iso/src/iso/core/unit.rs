//! Units accepted by `plus` / `minus`.

use std::fmt;
use std::str::FromStr;

use crate::error::TemporalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Millennia,
    Centuries,
    Decades,
    Years,
    Months,
    Weeks,
    Days,
    HalfDays,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Millennia => "millennia",
            Self::Centuries => "centuries",
            Self::Decades => "decades",
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::HalfDays => "half_days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// Months per unit for the month-scale units.
    #[must_use]
    pub const fn months(self) -> Option<i64> {
        match self {
            Self::Millennia => Some(12_000),
            Self::Centuries => Some(1200),
            Self::Decades => Some(120),
            Self::Years => Some(12),
            Self::Months => Some(1),
            _ => None,
        }
    }

    /// Days per unit for the day-scale units.
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::Weeks => Some(7),
            Self::Days => Some(1),
            _ => None,
        }
    }

    /// Seconds per unit for the clock units.
    #[must_use]
    pub const fn seconds(self) -> Option<i64> {
        match self {
            Self::HalfDays => Some(43_200),
            Self::Hours => Some(3600),
            Self::Minutes => Some(60),
            Self::Seconds => Some(1),
            _ => None,
        }
    }

    /// Whether the unit is resolved by the calendar (days and coarser).
    #[must_use]
    pub const fn is_date_based(self) -> bool {
        self.months().is_some() || self.days().is_some()
    }

    #[must_use]
    pub const fn is_time_based(self) -> bool {
        self.seconds().is_some()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = TemporalError;

    /// Parses a plural unit name (case-insensitive, `-` or `_` in
    /// `half_days`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "millennia" => Self::Millennia,
            "centuries" => Self::Centuries,
            "decades" => Self::Decades,
            "years" => Self::Years,
            "months" => Self::Months,
            "weeks" => Self::Weeks,
            "days" => Self::Days,
            "half_days" => Self::HalfDays,
            "hours" => Self::Hours,
            "minutes" => Self::Minutes,
            "seconds" => Self::Seconds,
            _ => return Err(TemporalError::InvalidUnit(format!("unknown unit {s:?}"))),
        })
    }
}
