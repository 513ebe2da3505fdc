//! Grammar matching and field extraction.
//!
//! The parser never hands text to a permissive general-purpose parser: a
//! string is matched against its anchored pattern from [`super::grammar`] and
//! the captured groups are decoded into plain integer fields. Calendar
//! impossibilities such as `02-30` pass through here untouched and are caught
//! when a value is constructed.

mod fields;
mod values;

use std::borrow::Cow;

pub use fields::{DateFields, DateTimeFields, IntervalFields, TimeFields};
pub use values::{parse_date, parse_date_time, parse_interval, parse_offset, parse_time};

/// Byte position of the date/time separator in `YYYY-MM-DD?HH:MM:SS`.
const SEPARATOR_INDEX: usize = 10;

/// Rewrites a MySQL-style `YYYY-MM-DD HH:MM:SS` into `YYYY-MM-DDTHH:MM:SS`.
///
/// Only a single space at the eleventh byte is touched. This is the only
/// normalization applied before grammar matching.
#[must_use]
pub fn normalize_separator(text: &str) -> Cow<'_, str> {
    if text.as_bytes().get(SEPARATOR_INDEX) == Some(&b' ') {
        let mut owned = String::with_capacity(text.len());
        owned.push_str(&text[..SEPARATOR_INDEX]);
        owned.push('T');
        owned.push_str(&text[SEPARATOR_INDEX + 1..]);
        Cow::Owned(owned)
    } else {
        Cow::Borrowed(text)
    }
}
