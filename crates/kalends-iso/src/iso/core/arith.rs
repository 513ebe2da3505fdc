//! Unit arithmetic shared by the value types.
//!
//! Calendar-scale units go to the calendar authority in one call so that
//! month ends and leap days are resolved in a single place. Clock units are
//! plain microsecond arithmetic with the whole days carried out separately.

use kalends_core::calendar::{CalendarAuthority, Ymd};

use super::CALENDAR;
use super::instant::{MICROS_PER_DAY, MICROS_PER_SECOND};
use super::unit::Unit;
use crate::error::{TemporalError, TemporalResult};

/// Shifts a date by `amount` calendar units.
///
/// ## Errors
/// Returns [`TemporalError::InvalidUnit`] for clock units, or
/// [`TemporalError::InvalidDate`] if the result leaves the calendar range.
pub(crate) fn shift_date(ymd: Ymd, amount: i64, unit: Unit, type_name: &str) -> TemporalResult<Ymd> {
    if let Some(per_unit) = unit.months() {
        let months = scaled(amount, per_unit, unit)?;
        Ok(CALENDAR.add_interval(ymd, 0, months, 0)?)
    } else if let Some(per_unit) = unit.days() {
        let days = scaled(amount, per_unit, unit)?;
        Ok(CALENDAR.add_interval(ymd, 0, 0, days)?)
    } else {
        Err(unsupported(unit, type_name))
    }
}

/// Shifts a time of day by `amount` clock units.
///
/// Returns the whole days carried out and the new microsecond of the day.
///
/// ## Errors
/// Returns [`TemporalError::InvalidUnit`] for calendar units, or
/// [`TemporalError::Overflow`] if the amount does not fit.
pub(crate) fn shift_clock(
    micro_of_day: i64,
    amount: i64,
    unit: Unit,
    type_name: &str,
) -> TemporalResult<(i64, i64)> {
    let Some(per_unit) = unit.seconds() else {
        return Err(unsupported(unit, type_name));
    };
    let delta = scaled(amount, per_unit, unit)?
        .checked_mul(MICROS_PER_SECOND)
        .ok_or_else(|| TemporalError::overflow(&format!("{amount} {unit}")))?;
    carry_micros(i128::from(micro_of_day) + i128::from(delta))
}

/// Splits a microsecond count into whole days and the microsecond of the day.
///
/// ## Errors
/// Returns [`TemporalError::Overflow`] if the day count does not fit an `i64`.
pub(crate) fn carry_micros(total: i128) -> TemporalResult<(i64, i64)> {
    let per_day = i128::from(MICROS_PER_DAY);
    let days = i64::try_from(total.div_euclid(per_day))
        .map_err(|_e| TemporalError::overflow("day carry"))?;
    let micros = i64::try_from(total.rem_euclid(per_day))
        .map_err(|_e| TemporalError::overflow("microsecond of day"))?;
    Ok((days, micros))
}

/// Negates an amount for `minus`.
///
/// ## Errors
/// Returns [`TemporalError::Overflow`] for `i64::MIN`.
pub(crate) fn negate(amount: i64) -> TemporalResult<i64> {
    amount
        .checked_neg()
        .ok_or_else(|| TemporalError::overflow(&format!("negated amount {amount}")))
}

fn scaled(amount: i64, per_unit: i64, unit: Unit) -> TemporalResult<i64> {
    amount
        .checked_mul(per_unit)
        .ok_or_else(|| TemporalError::overflow(&format!("{amount} {unit}")))
}

fn unsupported(unit: Unit, type_name: &str) -> TemporalError {
    TemporalError::InvalidUnit(format!("{type_name} does not support {unit}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_scale_units_clamp() {
        let jan31 = Ymd::new(2024, 1, 31);
        assert_eq!(
            shift_date(jan31, 1, Unit::Months, "date").unwrap(),
            Ymd::new(2024, 2, 29)
        );
        assert_eq!(
            shift_date(Ymd::new(2024, 2, 29), 1, Unit::Centuries, "date").unwrap(),
            Ymd::new(2124, 2, 29)
        );
        assert_eq!(
            shift_date(Ymd::new(2024, 2, 29), 1, Unit::Decades, "date").unwrap(),
            Ymd::new(2034, 2, 28)
        );
        assert_eq!(
            shift_date(Ymd::new(2000, 6, 15), -1, Unit::Millennia, "date").unwrap(),
            Ymd::new(1000, 6, 15)
        );
    }

    #[test]
    fn day_scale_units() {
        assert_eq!(
            shift_date(Ymd::new(2023, 12, 28), 1, Unit::Weeks, "date").unwrap(),
            Ymd::new(2024, 1, 4)
        );
        assert_eq!(
            shift_date(Ymd::new(2024, 3, 1), -1, Unit::Days, "date").unwrap(),
            Ymd::new(2024, 2, 29)
        );
    }

    #[test]
    fn clock_units_rejected_by_dates() {
        let err = shift_date(Ymd::new(2024, 1, 1), 1, Unit::Hours, "CivilDate").unwrap_err();
        assert_eq!(err.to_string(), "Invalid unit: CivilDate does not support hours");
    }

    #[test]
    fn clock_carry() {
        let eleven_pm = 23 * 3600 * MICROS_PER_SECOND;
        let (days, micros) = shift_clock(eleven_pm, 2, Unit::Hours, "time").unwrap();
        assert_eq!(days, 1);
        assert_eq!(micros, 3600 * MICROS_PER_SECOND);

        let (days, micros) = shift_clock(0, -1, Unit::Seconds, "time").unwrap();
        assert_eq!(days, -1);
        assert_eq!(micros, MICROS_PER_DAY - MICROS_PER_SECOND);

        let (days, micros) = shift_clock(0, 3, Unit::HalfDays, "time").unwrap();
        assert_eq!((days, micros), (1, MICROS_PER_DAY / 2));
    }

    #[test]
    fn calendar_units_rejected_by_times() {
        assert!(matches!(
            shift_clock(0, 1, Unit::Days, "CivilTime"),
            Err(TemporalError::InvalidUnit(_))
        ));
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            shift_clock(0, i64::MAX, Unit::Hours, "time"),
            Err(TemporalError::Overflow(_))
        ));
        assert!(matches!(negate(i64::MIN), Err(TemporalError::Overflow(_))));
        assert_eq!(negate(5).unwrap(), -5);
    }
}
