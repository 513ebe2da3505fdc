//! Gregorian calendar authority.
//!
//! Value types never compute month lengths or day rollover themselves; they
//! ask a [`CalendarAuthority`]. [`Gregorian`] is the proleptic Gregorian
//! implementation backed by `chrono`.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// Days between 0001-01-01 (day 1 of the common era) and 1970-01-01.
const UNIX_EPOCH_FROM_CE: i64 = 719_163;

/// A calendar day as plain fields.
///
/// No validity is implied by the type itself, see
/// [`CalendarAuthority::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ymd {
    pub year: i32,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl Ymd {
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// The calendar rules a value type delegates to.
pub trait CalendarAuthority {
    /// Divisible by 4, not by 100 unless by 400.
    fn is_leap_year(&self, year: i32) -> bool;

    /// Length of `month` in `year`. Returns 0 for a month outside 1-12.
    fn days_in_month(&self, year: i32, month: u8) -> u8;

    fn days_in_year(&self, year: i32) -> u16 {
        if self.is_leap_year(year) { 366 } else { 365 }
    }

    /// Whether the fields name a day that exists.
    fn is_valid(&self, ymd: Ymd) -> bool {
        (1..=12).contains(&ymd.month)
            && ymd.day >= 1
            && ymd.day <= self.days_in_month(ymd.year, ymd.month)
    }

    /// Adds years and months (clamping the day to the resulting month end),
    /// then days.
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] if the input or the result is outside
    /// the supported year range.
    fn add_interval(&self, ymd: Ymd, years: i64, months: i64, days: i64) -> CoreResult<Ymd>;

    /// ISO weekday number, 1 = Monday through 7 = Sunday.
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] if the date is not representable.
    fn weekday_of(&self, ymd: Ymd) -> CoreResult<u8>;

    /// Ordinal day within the year, starting at 1.
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] if the date is not representable.
    fn day_of_year(&self, ymd: Ymd) -> CoreResult<u16>;

    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] if `ordinal` does not exist in `year`.
    fn from_day_of_year(&self, year: i32, ordinal: u16) -> CoreResult<Ymd>;

    /// Days since 1970-01-01 (negative before).
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] if the date is not representable.
    fn epoch_day(&self, ymd: Ymd) -> CoreResult<i64>;

    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] if the day is not representable.
    fn from_epoch_day(&self, day: i64) -> CoreResult<Ymd>;

    /// ISO-8601 week number (1-53).
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] if the date is not representable.
    fn iso_week(&self, ymd: Ymd) -> CoreResult<u8>;
}

/// Proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl Gregorian {
    fn to_naive(ymd: Ymd) -> CoreResult<NaiveDate> {
        NaiveDate::from_ymd_opt(ymd.year, u32::from(ymd.month), u32::from(ymd.day)).ok_or_else(
            || {
                CoreError::OutOfRange(format!(
                    "{}-{:02}-{:02} is not a representable date",
                    ymd.year, ymd.month, ymd.day
                ))
            },
        )
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "chrono months are bounded by 12 and days by 31"
    )]
    fn from_naive(date: NaiveDate) -> Ymd {
        Ymd {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }

    fn out_of_range(what: &str, amount: i64) -> CoreError {
        CoreError::OutOfRange(format!("{what} amount {amount} exceeds the calendar range"))
    }

    fn shift_months(date: NaiveDate, months: i64) -> CoreResult<NaiveDate> {
        let magnitude =
            u32::try_from(months.unsigned_abs()).map_err(|_e| Self::out_of_range("month", months))?;
        let shifted = if months >= 0 {
            date.checked_add_months(Months::new(magnitude))
        } else {
            date.checked_sub_months(Months::new(magnitude))
        };
        shifted.ok_or_else(|| Self::out_of_range("month", months))
    }

    fn shift_days(date: NaiveDate, days: i64) -> CoreResult<NaiveDate> {
        let shifted = if days >= 0 {
            date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.ok_or_else(|| Self::out_of_range("day", days))
    }
}

impl CalendarAuthority for Gregorian {
    fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    fn add_interval(&self, ymd: Ymd, years: i64, months: i64, days: i64) -> CoreResult<Ymd> {
        let total_months = years
            .checked_mul(12)
            .and_then(|m| m.checked_add(months))
            .ok_or_else(|| Self::out_of_range("month", months))?;

        let date = Self::to_naive(ymd)?;
        let date = Self::shift_months(date, total_months)?;
        let date = Self::shift_days(date, days)?;
        Ok(Self::from_naive(date))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "ISO weekday numbers are 1-7"
    )]
    fn weekday_of(&self, ymd: Ymd) -> CoreResult<u8> {
        Ok(Self::to_naive(ymd)?.weekday().number_from_monday() as u8)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "ordinal days are bounded by 366"
    )]
    fn day_of_year(&self, ymd: Ymd) -> CoreResult<u16> {
        Ok(Self::to_naive(ymd)?.ordinal() as u16)
    }

    fn from_day_of_year(&self, year: i32, ordinal: u16) -> CoreResult<Ymd> {
        NaiveDate::from_yo_opt(year, u32::from(ordinal))
            .map(Self::from_naive)
            .ok_or_else(|| CoreError::OutOfRange(format!("day {ordinal} does not exist in {year}")))
    }

    fn epoch_day(&self, ymd: Ymd) -> CoreResult<i64> {
        Ok(i64::from(Self::to_naive(ymd)?.num_days_from_ce()) - UNIX_EPOCH_FROM_CE)
    }

    fn from_epoch_day(&self, day: i64) -> CoreResult<Ymd> {
        day.checked_add(UNIX_EPOCH_FROM_CE)
            .and_then(|ce| i32::try_from(ce).ok())
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Self::from_naive)
            .ok_or_else(|| Self::out_of_range("epoch day", day))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "ISO week numbers are bounded by 53"
    )]
    fn iso_week(&self, ymd: Ymd) -> CoreResult<u8> {
        Ok(Self::to_naive(ymd)?.iso_week().week() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        let cal = Gregorian;
        assert!(cal.is_leap_year(2024));
        assert!(cal.is_leap_year(2000));
        assert!(!cal.is_leap_year(1900));
        assert!(!cal.is_leap_year(2023));
        assert!(cal.is_leap_year(-4));
        assert!(cal.is_leap_year(0));
    }

    #[test]
    fn month_lengths() {
        let cal = Gregorian;
        assert_eq!(cal.days_in_month(2024, 2), 29);
        assert_eq!(cal.days_in_month(2023, 2), 28);
        assert_eq!(cal.days_in_month(2023, 4), 30);
        assert_eq!(cal.days_in_month(2023, 12), 31);
        assert_eq!(cal.days_in_month(2023, 13), 0);
        assert_eq!(cal.days_in_year(2024), 366);
    }

    #[test]
    fn validity() {
        let cal = Gregorian;
        assert!(cal.is_valid(Ymd::new(2024, 2, 29)));
        assert!(!cal.is_valid(Ymd::new(2023, 2, 29)));
        assert!(!cal.is_valid(Ymd::new(2023, 4, 31)));
        assert!(!cal.is_valid(Ymd::new(2023, 0, 1)));
        assert!(!cal.is_valid(Ymd::new(2023, 1, 0)));
    }

    #[test]
    fn add_interval_clamps_month_end() {
        let cal = Gregorian;
        let jan31 = Ymd::new(2024, 1, 31);
        assert_eq!(cal.add_interval(jan31, 0, 1, 0).unwrap(), Ymd::new(2024, 2, 29));
        assert_eq!(
            cal.add_interval(Ymd::new(2023, 1, 31), 0, 1, 0).unwrap(),
            Ymd::new(2023, 2, 28)
        );
        assert_eq!(
            cal.add_interval(Ymd::new(2024, 2, 29), 1, 0, 0).unwrap(),
            Ymd::new(2025, 2, 28)
        );
        assert_eq!(cal.add_interval(jan31, 0, -2, 0).unwrap(), Ymd::new(2023, 11, 30));
    }

    #[test]
    fn add_interval_days_cross_year() {
        let cal = Gregorian;
        assert_eq!(
            cal.add_interval(Ymd::new(2023, 12, 31), 0, 0, 1).unwrap(),
            Ymd::new(2024, 1, 1)
        );
        assert_eq!(
            cal.add_interval(Ymd::new(2024, 3, 1), 0, 0, -1).unwrap(),
            Ymd::new(2024, 2, 29)
        );
    }

    #[test]
    fn add_interval_out_of_range() {
        let cal = Gregorian;
        let result = cal.add_interval(Ymd::new(2024, 1, 1), 1_000_000, 0, 0);
        assert!(matches!(result, Err(CoreError::OutOfRange(_))));
    }

    #[test]
    fn weekday_and_ordinal() {
        let cal = Gregorian;
        // 2015-04-25 was a Saturday
        assert_eq!(cal.weekday_of(Ymd::new(2015, 4, 25)).unwrap(), 6);
        assert_eq!(cal.day_of_year(Ymd::new(2015, 4, 25)).unwrap(), 115);
        assert_eq!(cal.from_day_of_year(2024, 60).unwrap(), Ymd::new(2024, 2, 29));
        assert!(cal.from_day_of_year(2023, 366).is_err());
    }

    #[test]
    fn epoch_days() {
        let cal = Gregorian;
        assert_eq!(cal.epoch_day(Ymd::new(1970, 1, 1)).unwrap(), 0);
        assert_eq!(cal.epoch_day(Ymd::new(1969, 12, 31)).unwrap(), -1);
        assert_eq!(cal.from_epoch_day(19_000).unwrap(), Ymd::new(2022, 1, 8));
    }

    #[test]
    fn iso_week_numbers() {
        let cal = Gregorian;
        assert_eq!(cal.iso_week(Ymd::new(2015, 4, 25)).unwrap(), 17);
        assert_eq!(cal.iso_week(Ymd::new(2021, 1, 1)).unwrap(), 53);
    }
}
