//! Decoders from grammar captures to integer fields.

use std::str::FromStr;

use regex::Captures;

use super::fields::{DateFields, DateTimeFields, IntervalFields, TimeFields};
use super::normalize_separator;
use crate::error::{TemporalError, TemporalResult};
use crate::iso::grammar;

/// Digits of sub-second precision kept from a fraction.
const FRACTION_DIGITS: usize = 6;

/// Parses `YYYY-MM-DD` with an optional offset suffix.
///
/// ## Errors
/// Returns [`TemporalError::InvalidFormat`] if the text is not in the date
/// grammar, or [`TemporalError::InvalidDate`] if the year does not fit.
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
pub fn parse_date(text: &str) -> TemporalResult<(DateFields, Option<i32>)> {
    let caps = grammar::date().captures(text).ok_or_else(|| {
        tracing::debug!("Input rejected by date grammar");
        TemporalError::InvalidFormat("Must be valid date format".to_string())
    })?;

    let date = decode_date(&caps)?;
    let offset = decode_offset(&caps)?;
    tracing::trace!(?date, ?offset, "Extracted date fields");
    Ok((date, offset))
}

/// Parses `HH:MM:SS[.f]` with an optional offset suffix.
///
/// ## Errors
/// Returns [`TemporalError::InvalidFormat`] if the text is not in the time
/// grammar.
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
pub fn parse_time(text: &str) -> TemporalResult<(TimeFields, Option<i32>)> {
    let caps = grammar::time().captures(text).ok_or_else(|| {
        tracing::debug!("Input rejected by time grammar");
        TemporalError::InvalidFormat("Must be valid time format".to_string())
    })?;

    let time = decode_time(&caps)?;
    let offset = decode_offset(&caps)?;
    tracing::trace!(?time, ?offset, "Extracted time fields");
    Ok((time, offset))
}

/// Parses `YYYY-MM-DDTHH:MM:SS[.f]` with an optional offset suffix.
///
/// A single space at the separator position is accepted in place of `T`.
///
/// ## Errors
/// Returns [`TemporalError::InvalidFormat`] if the text is not in the
/// date-time grammar, or [`TemporalError::InvalidDate`] if the year does not
/// fit.
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
pub fn parse_date_time(text: &str) -> TemporalResult<DateTimeFields> {
    let normalized = normalize_separator(text);
    let caps = grammar::date_time().captures(&normalized).ok_or_else(|| {
        tracing::debug!("Input rejected by date-time grammar");
        TemporalError::InvalidFormat("Must be valid date time format".to_string())
    })?;

    let fields = DateTimeFields {
        date: decode_date(&caps)?,
        time: decode_time(&caps)?,
        offset: decode_offset(&caps)?,
    };
    tracing::trace!(?fields, "Extracted date-time fields");
    Ok(fields)
}

/// Parses a standalone `Z` or `±HH:MM` into seconds east of UTC.
///
/// ## Errors
/// Returns [`TemporalError::InvalidFormat`] if the text is not an offset.
pub fn parse_offset(text: &str) -> TemporalResult<i32> {
    let caps = grammar::offset()
        .captures(text)
        .ok_or_else(|| TemporalError::InvalidFormat("Must be valid offset format".to_string()))?;

    decode_offset(&caps)?
        .ok_or_else(|| TemporalError::InvalidFormat("Must be valid offset format".to_string()))
}

/// Parses `[-]P[nY][nM][nD][T[nH][nM][n[.f]S]]`.
///
/// ## Errors
/// Returns [`TemporalError::InvalidFormat`] if the text is not in the amount
/// grammar, or [`TemporalError::Overflow`] if a field does not fit.
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
pub fn parse_interval(text: &str) -> TemporalResult<IntervalFields> {
    if !grammar::amount().is_match(text) {
        tracing::debug!("Input rejected by interval grammar");
        return Err(TemporalError::InvalidFormat(
            "Must be valid interval format".to_string(),
        ));
    }

    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    // The grammar guarantees the leading designator.
    let body = rest.strip_prefix('P').unwrap_or(rest);

    let fields = scan_interval(body, negative)?;
    tracing::trace!(?fields, "Extracted interval fields");
    Ok(fields)
}

/// Walks `number designator` pairs of an already validated amount body.
fn scan_interval(body: &str, negative: bool) -> TemporalResult<IntervalFields> {
    let mut fields = IntervalFields {
        negative,
        ..IntervalFields::default()
    };
    let mut in_clock = false;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '0'..='9' | '.' => {}
            'T' => {
                in_clock = true;
                start = i + 1;
            }
            designator => {
                apply_designator(&mut fields, designator, in_clock, &body[start..i])?;
                start = i + 1;
            }
        }
    }

    Ok(fields)
}

fn apply_designator(
    fields: &mut IntervalFields,
    designator: char,
    in_clock: bool,
    digits: &str,
) -> TemporalResult<()> {
    match (designator, in_clock) {
        ('Y', false) => fields.years = amount(digits, "years")?,
        ('M', false) => fields.months = amount(digits, "months")?,
        ('D', false) => fields.days = amount(digits, "days")?,
        ('H', true) => fields.hours = amount(digits, "hours")?,
        ('M', true) => fields.minutes = amount(digits, "minutes")?,
        ('S', true) => {
            let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
            fields.seconds = amount(whole, "seconds")?;
            fields.microseconds = decode_fraction(fraction);
        }
        _ => {
            return Err(TemporalError::InvalidFormat(format!(
                "Unexpected designator {designator}"
            )));
        }
    }
    Ok(())
}

fn amount<T: FromStr>(digits: &str, what: &str) -> TemporalResult<T> {
    digits
        .parse::<T>()
        .map_err(|_e| TemporalError::overflow(&format!("{what} amount {digits}")))
}

fn decode_date(caps: &Captures<'_>) -> TemporalResult<DateFields> {
    let year = caps["year"].parse::<i32>().map_err(|_e| {
        TemporalError::InvalidDate(format!("year {} is out of range", &caps["year"]))
    })?;

    Ok(DateFields {
        year,
        month: two_digits(caps, "month")?,
        day: two_digits(caps, "day")?,
    })
}

fn decode_time(caps: &Captures<'_>) -> TemporalResult<TimeFields> {
    if caps.name("end_of_day").is_some() {
        return Ok(TimeFields {
            hour: 24,
            minute: 0,
            second: 0,
            microsecond: 0,
        });
    }

    Ok(TimeFields {
        hour: two_digits(caps, "hour")?,
        minute: two_digits(caps, "minute")?,
        second: two_digits(caps, "second")?,
        microsecond: caps
            .name("fraction")
            .map_or(0, |m| decode_fraction(m.as_str())),
    })
}

/// Returns `None` when no offset suffix was written.
fn decode_offset(caps: &Captures<'_>) -> TemporalResult<Option<i32>> {
    let Some(offset) = caps.name("offset") else {
        return Ok(None);
    };
    if offset.as_str() == "Z" {
        return Ok(Some(0));
    }

    let (hours, minutes) = if caps.name("offset_max").is_some() {
        (14, 0)
    } else {
        (
            i32::from(two_digits(caps, "offset_hour")?),
            i32::from(two_digits(caps, "offset_minute")?),
        )
    };
    let seconds = hours * 3600 + minutes * 60;

    Ok(Some(if &caps["offset_sign"] == "-" {
        -seconds
    } else {
        seconds
    }))
}

fn two_digits(caps: &Captures<'_>, name: &str) -> TemporalResult<u8> {
    caps.name(name)
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .ok_or_else(|| TemporalError::InvalidFormat(format!("missing {name} field")))
}

/// Truncates or right-pads ASCII digits to microseconds.
fn decode_fraction(digits: &str) -> u32 {
    let mut micros = 0;
    let mut bytes = digits.bytes();
    for _ in 0..FRACTION_DIGITS {
        let digit = bytes.next().map_or(0, |b| u32::from(b - b'0'));
        micros = micros * 10 + digit;
    }
    micros
}
