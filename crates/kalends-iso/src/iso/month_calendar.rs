//! A month view anchored on one date.

use kalends_core::calendar::CalendarAuthority;

use crate::error::TemporalResult;
use crate::iso::core::{CALENDAR, CivilDate, Month};

/// The calendar month containing an anchor date.
///
/// Iterating yields every day of the month from the first to the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCalendar {
    anchor: CivilDate,
    first: CivilDate,
    last: CivilDate,
}

impl MonthCalendar {
    /// The month anchored on its first day.
    ///
    /// ## Errors
    /// Returns [`crate::TemporalError::InvalidDate`] if the month does not
    /// exist or is out of range.
    pub fn new(year: i32, month: u8) -> TemporalResult<Self> {
        Self::containing(CivilDate::of(year, month, 1)?)
    }

    /// ## Errors
    /// Only fails at the ends of the calendar range.
    pub fn containing(anchor: CivilDate) -> TemporalResult<Self> {
        let first = anchor.with_day_of_month(1)?;
        let last = anchor.with_day_of_month(anchor.length_of_month())?;
        Ok(Self {
            anchor,
            first,
            last,
        })
    }

    #[must_use]
    pub const fn anchor(&self) -> CivilDate {
        self.anchor
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.anchor.year()
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.anchor.month()
    }

    /// Number of days in the month.
    #[must_use]
    pub const fn len(&self) -> u8 {
        self.last.day_of_month()
    }

    /// Always `false`; every month has days.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn first_day(&self) -> CivilDate {
        self.first
    }

    #[must_use]
    pub const fn last_day(&self) -> CivilDate {
        self.last
    }

    #[must_use]
    pub const fn days(&self) -> MonthDays {
        MonthDays {
            next: Some(self.first),
            last: self.last,
        }
    }

    /// ISO-8601 week number of the anchor date.
    ///
    /// ## Errors
    /// Only fails at the ends of the calendar range.
    pub fn week_number(&self) -> TemporalResult<u8> {
        Ok(CALENDAR.iso_week(self.anchor.ymd())?)
    }

    /// Easter Sunday of the anchor's year (Gregorian computus).
    ///
    /// ## Errors
    /// Only fails at the ends of the calendar range.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::many_single_char_names,
        reason = "the computus yields month 3-4 and day 1-31; names follow the published algorithm"
    )]
    pub fn easter_date(&self) -> TemporalResult<CivilDate> {
        let year = self.year();
        let a = year.rem_euclid(19);
        let b = year.div_euclid(100);
        let c = year.rem_euclid(100);
        let d = b.div_euclid(4);
        let e = b.rem_euclid(4);
        let f = (b + 8).div_euclid(25);
        let g = (b - f + 1).div_euclid(3);
        let h = (19 * a + b - d - g + 15).rem_euclid(30);
        let i = c.div_euclid(4);
        let k = c.rem_euclid(4);
        let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
        let m = (a + 11 * h + 22 * l).div_euclid(451);
        let n = h + l - 7 * m + 114;

        CivilDate::of(year, n.div_euclid(31) as u8, (n.rem_euclid(31) + 1) as u8)
    }

    /// ## Errors
    /// Only fails at the ends of the calendar range.
    pub fn next_month(&self) -> TemporalResult<Self> {
        Self::containing(self.anchor.plus_months(1)?)
    }

    /// ## Errors
    /// Only fails at the ends of the calendar range.
    pub fn prev_month(&self) -> TemporalResult<Self> {
        Self::containing(self.anchor.minus_months(1)?)
    }

    /// ## Errors
    /// Only fails at the ends of the calendar range.
    pub fn next_year(&self) -> TemporalResult<Self> {
        Self::containing(self.anchor.plus_years(1)?)
    }

    /// ## Errors
    /// Only fails at the ends of the calendar range.
    pub fn prev_year(&self) -> TemporalResult<Self> {
        Self::containing(self.anchor.minus_years(1)?)
    }
}

impl IntoIterator for &MonthCalendar {
    type Item = CivilDate;
    type IntoIter = MonthDays;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Iterator over the days of a [`MonthCalendar`].
#[derive(Debug, Clone)]
pub struct MonthDays {
    next: Option<CivilDate>,
    last: CivilDate,
}

impl Iterator for MonthDays {
    type Item = CivilDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.last {
            current.plus_days(1).ok()
        } else {
            None
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_of_a_leap_february() {
        let feb = MonthCalendar::new(2024, 2).unwrap();
        assert_eq!(feb.len(), 29);
        assert!(!feb.is_empty());
        let days: Vec<CivilDate> = feb.days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&CivilDate::of(2024, 2, 1).unwrap()));
        assert_eq!(days.last(), Some(&CivilDate::of(2024, 2, 29).unwrap()));
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!((&feb).into_iter().count(), 29);
    }

    #[test]
    fn containing_keeps_anchor() {
        let cal = MonthCalendar::containing(CivilDate::of(2015, 4, 25).unwrap()).unwrap();
        assert_eq!(cal.month(), Month::April);
        assert_eq!(cal.first_day().to_string(), "2015-04-01");
        assert_eq!(cal.last_day().to_string(), "2015-04-30");
        assert_eq!(cal.anchor().day_of_month(), 25);
        assert_eq!(cal.week_number().unwrap(), 17);
    }

    #[test]
    fn navigation_clamps_anchor() {
        let jan = MonthCalendar::containing(CivilDate::of(2023, 1, 31).unwrap()).unwrap();
        let feb = jan.next_month().unwrap();
        assert_eq!(feb.anchor().to_string(), "2023-02-28");
        assert_eq!(feb.len(), 28);
        assert_eq!(jan.prev_month().unwrap().month(), Month::December);
        assert_eq!(jan.prev_month().unwrap().year(), 2022);
        assert_eq!(jan.next_year().unwrap().year(), 2024);
        assert_eq!(jan.prev_year().unwrap().year(), 2022);
    }

    #[test]
    fn easter_dates() {
        for (year, expected) in [
            (2024, "2024-03-31"),
            (2025, "2025-04-20"),
            (2019, "2019-04-21"),
            (2000, "2000-04-23"),
            (1818, "1818-03-22"),
            (2038, "2038-04-25"),
        ] {
            let cal = MonthCalendar::new(year, 1).unwrap();
            assert_eq!(cal.easter_date().unwrap().to_string(), expected);
        }
    }

    #[test]
    fn rejects_bad_month() {
        assert!(MonthCalendar::new(2024, 13).is_err());
    }
}
