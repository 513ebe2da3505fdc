//! JSON framing through the canonical string projection.

use serde::{Deserialize, Serialize};

use crate::iso::core::{CivilDate, Duration, OffsetDateTime, OffsetTime, Period, UtcOffset};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Booking {
    day: CivilDate,
    start: OffsetDateTime,
    length: Duration,
    repeat: Period,
}

#[test]
fn values_serialize_as_canonical_strings() {
    let booking = Booking {
        day: CivilDate::parse("2015-04-25").unwrap(),
        start: OffsetDateTime::parse("2015-04-25 19:35:20+02:00").unwrap(),
        length: Duration::parse("PT1H30M").unwrap(),
        repeat: Period::parse("P1M").unwrap(),
    };

    let json = serde_json::to_string(&booking).unwrap();
    assert_eq!(
        json,
        r#"{"day":"2015-04-25","start":"2015-04-25T19:35:20+02:00","length":"PT1H30M","repeat":"P1M"}"#
    );

    let back: Booking = serde_json::from_str(&json).unwrap();
    assert_eq!(back, booking);
}

#[test]
fn deserialize_runs_the_parser() {
    let value: OffsetTime = serde_json::from_str(r#""19:00:00+01:00""#).unwrap();
    assert_eq!(value.offset(), UtcOffset::from_hours_minutes(1, 0).unwrap());

    let err = serde_json::from_str::<CivilDate>(r#""2023-02-29""#).unwrap_err();
    assert!(err.to_string().contains("Invalid date"));

    let err = serde_json::from_str::<UtcOffset>(r#""+50:00""#).unwrap_err();
    assert!(err.to_string().contains("Invalid format"));

    assert!(serde_json::from_str::<Duration>("42").is_err());
}
