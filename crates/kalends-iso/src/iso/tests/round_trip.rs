//! Canonical forms are fixed points of parse-then-format.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use super::fixtures::*;
use crate::iso::core::{
    CivilDate, CivilDateTime, CivilTime, Duration, Interval, OffsetDate, OffsetDateTime,
    OffsetTime, Period,
};

/// Parse, format, then parse the canonical text again.
fn round_trip<T>(input: &str) -> Result<(T, T), String>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let first = input
        .parse::<T>()
        .map_err(|e| format!("First parse of {input:?} failed: {e}"))?;
    let canonical = first.to_string();
    let second = canonical
        .parse::<T>()
        .map_err(|e| format!("Second parse of {canonical:?} failed: {e}"))?;
    if second.to_string() != canonical {
        return Err(format!("{canonical:?} reformatted as {second}"));
    }
    Ok((first, second))
}

/// Checks the canonical text of every fixture and that it re-parses.
fn check_canonical<T>(cases: &[(&str, &str)])
where
    T: FromStr + Display,
    T::Err: Display,
{
    for (input, expected) in cases {
        let (first, _) = round_trip::<T>(input).expect("round trip should succeed");
        assert_eq!(first.to_string(), *expected, "canonical form of {input:?}");
    }
}

/// Inputs without a seconds fraction.
fn whole_seconds<'a>(cases: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    cases
        .iter()
        .filter(|(input, _)| !input.contains('.'))
        .copied()
        .collect()
}

/// Checks that re-parsing yields an equal value, not only equal text.
fn check_value_equal<T>(cases: &[(&str, &str)])
where
    T: FromStr + Display + PartialEq + Debug,
    T::Err: Display,
{
    for (input, _) in cases {
        let (first, second) = round_trip::<T>(input).expect("round trip should succeed");
        assert_eq!(first, second, "value of {input:?}");
    }
}

#[test]
fn round_trip_civil_dates() {
    check_canonical::<CivilDate>(DATES);
    check_value_equal::<CivilDate>(DATES);
}

#[test]
fn round_trip_offset_dates() {
    check_canonical::<OffsetDate>(OFFSET_DATES);
    check_value_equal::<OffsetDate>(OFFSET_DATES);
}

#[test]
fn round_trip_civil_times() {
    check_canonical::<CivilTime>(TIMES);
    check_value_equal::<CivilTime>(TIMES);
}

#[test]
fn round_trip_offset_times() {
    check_canonical::<OffsetTime>(OFFSET_TIMES);
    check_value_equal::<OffsetTime>(OFFSET_TIMES);
}

#[test]
fn round_trip_civil_date_times() {
    check_canonical::<CivilDateTime>(DATE_TIMES);
    check_value_equal::<CivilDateTime>(&whole_seconds(DATE_TIMES));
}

#[test]
fn round_trip_offset_date_times() {
    check_canonical::<OffsetDateTime>(OFFSET_DATE_TIMES);
    check_value_equal::<OffsetDateTime>(&whole_seconds(OFFSET_DATE_TIMES));
}

#[test]
fn round_trip_durations() {
    check_canonical::<Duration>(DURATIONS);
    check_value_equal::<Duration>(DURATIONS);
}

#[test]
fn round_trip_periods() {
    check_canonical::<Period>(PERIODS);
    check_value_equal::<Period>(PERIODS);
}

#[test]
fn round_trip_intervals() {
    check_canonical::<Interval>(INTERVALS);
    check_value_equal::<Interval>(INTERVALS);
}

#[test]
fn civil_values_without_fraction_are_equal_after_round_trip() {
    let (first, second) = round_trip::<CivilDateTime>("2015-04-25T19:35:20+05:00").unwrap();
    assert_eq!(first, second);

    let (first, second) = round_trip::<CivilTime>("19:35:20Z").unwrap();
    assert_eq!(first, second);
}

#[test]
fn offset_instants_survive_round_trip() {
    let pacific = OffsetDateTime::parse("1996-12-19T16:39:57-08:00").unwrap();
    let utc = OffsetDateTime::parse("1996-12-20T00:39:57Z").unwrap();
    assert_eq!(pacific, utc);
    assert_eq!(pacific.to_utc().unwrap().to_string(), utc.to_string());

    let east = OffsetTime::parse("19:00:00+01:00").unwrap();
    let zulu = OffsetTime::parse("18:00:00Z").unwrap();
    assert_eq!(east, zulu);
    assert_ne!(east.to_string(), zulu.to_string());
}

#[test]
fn date_time_text_drops_fraction() {
    let (first, second) = round_trip::<OffsetDateTime>("1985-04-12T23:20:50.52Z").unwrap();
    assert_eq!(second.to_string(), "1985-04-12T23:20:50Z");
    assert_ne!(first, second);
    assert_eq!(first.with_microsecond(0).unwrap(), second);

    let (first, second) = round_trip::<CivilDateTime>("1985-04-12T23:20:50.52").unwrap();
    assert_eq!(first.microsecond(), 520_000);
    assert_eq!(second.microsecond(), 0);
    assert_eq!(first.with_microsecond(0).unwrap(), second);
}

#[test]
fn time_fraction_survives_round_trip() {
    let (first, second) = round_trip::<CivilTime>("19:35:20.1234").unwrap();
    assert_eq!(first, second);
    assert_eq!(second.microsecond(), 123_400);

    let (first, second) = round_trip::<OffsetTime>("23:59:59.999999-01:00").unwrap();
    assert_eq!(first, second);
    assert_eq!(second.to_string(), "23:59:59.999999-01:00");
}
