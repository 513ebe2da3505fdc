//! Month-of-year and day-of-week enumerations.

use std::fmt;

/// Month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Returns the month number (1-12).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the month for its number, or `None` outside 1-12.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if matches!(value, 1..=12) {
            Some(Self::from_valid(value))
        } else {
            None
        }
    }

    /// Caller guarantees `value` is in 1-12.
    pub(crate) const fn from_valid(value: u8) -> Self {
        match value {
            1 => Self::January,
            2 => Self::February,
            3 => Self::March,
            4 => Self::April,
            5 => Self::May,
            6 => Self::June,
            7 => Self::July,
            8 => Self::August,
            9 => Self::September,
            10 => Self::October,
            11 => Self::November,
            _ => Self::December,
        }
    }

    /// Returns the enumeration name in upper case.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::January => "JANUARY",
            Self::February => "FEBRUARY",
            Self::March => "MARCH",
            Self::April => "APRIL",
            Self::May => "MAY",
            Self::June => "JUNE",
            Self::July => "JULY",
            Self::August => "AUGUST",
            Self::September => "SEPTEMBER",
            Self::October => "OCTOBER",
            Self::November => "NOVEMBER",
            Self::December => "DECEMBER",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of the week, numbered Monday = 1 through Sunday = 7 (ISO-8601).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Returns the ISO day number (1-7).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the day for its ISO number, or `None` outside 1-7.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if matches!(value, 1..=7) {
            Some(Self::from_valid(value))
        } else {
            None
        }
    }

    /// Caller guarantees `value` is in 1-7.
    pub(crate) const fn from_valid(value: u8) -> Self {
        match value {
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_numbers_round_trip() {
        for n in 1..=12 {
            assert_eq!(Month::from_value(n).map(Month::value), Some(n));
        }
        assert_eq!(Month::from_value(0), None);
        assert_eq!(Month::from_value(13), None);
        assert_eq!(Month::April.to_string(), "APRIL");
    }

    #[test]
    fn weekday_numbers() {
        assert_eq!(DayOfWeek::Monday.value(), 1);
        assert_eq!(DayOfWeek::Sunday.value(), 7);
        assert_eq!(DayOfWeek::from_value(6), Some(DayOfWeek::Saturday));
        assert_eq!(DayOfWeek::from_value(8), None);
    }
}
