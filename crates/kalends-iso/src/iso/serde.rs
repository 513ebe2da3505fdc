//! Canonical-string serde hooks for every value type.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use ::serde::de::{Error, Visitor};
use ::serde::{Deserializer, Serializer};

use crate::iso::core::{
    CivilDate, CivilDateTime, CivilTime, Duration, Interval, OffsetDate, OffsetDateTime,
    OffsetTime, Period, UtcOffset,
};

/// Accepts a string and runs the target type's parser on it.
struct TextVisitor<T> {
    expecting: &'static str,
    target: PhantomData<T>,
}

impl<T> Visitor<'_> for TextVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        value.parse().map_err(E::custom)
    }
}

fn serialize_display<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: fmt::Display,
{
    serializer.collect_str(value)
}

macro_rules! impl_text_serde {
    ($($ty:ty => $expecting:literal),+ $(,)?) => {$(
        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serialize_display(self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(TextVisitor {
                    expecting: $expecting,
                    target: PhantomData,
                })
            }
        }
    )+};
}

impl_text_serde! {
    CivilDate => "a YYYY-MM-DD date string",
    CivilTime => "an HH:MM:SS time string",
    CivilDateTime => "a YYYY-MM-DDTHH:MM:SS date-time string",
    OffsetDate => "a YYYY-MM-DD date string with an optional offset",
    OffsetTime => "an HH:MM:SS time string with an optional offset",
    OffsetDateTime => "a YYYY-MM-DDTHH:MM:SS date-time string with an optional offset",
    UtcOffset => "a Z or ±HH:MM offset string",
    Duration => "a PTnHnMnS duration string",
    Period => "a PnYnMnD period string",
    Interval => "a PnYnMnDTnHnMnS interval string",
}
