//! Anchored lexical patterns for every accepted textual form.
//!
//! The date, time and date-time forms follow the XML Schema 1.1 lexical
//! mappings (which RFC 3339 profiles), the amount form follows the XML Schema
//! `duration` lexical space. Each pattern matches the whole input or nothing.
//!
//! Named groups exposed to the parser:
//! - `year`, `month`, `day`
//! - `hour`, `minute`, `second`, `fraction`, or `end_of_day` for `24:00:00`
//! - `offset` (whole suffix), `offset_sign`, `offset_hour`, `offset_minute`,
//!   or `offset_max` for `14:00`

use std::sync::OnceLock;

use regex::Regex;

/// No leading zero unless the year is exactly four digits.
const YEAR: &str = r"(?P<year>-?(?:[1-9][0-9]{3,}|0[0-9]{3}))";
const MONTH: &str = r"(?P<month>0[1-9]|1[0-2])";
const DAY: &str = r"(?P<day>0[1-9]|[12][0-9]|3[01])";

const DATE: &str = const_str::concat!(YEAR, "-", MONTH, "-", DAY);

const CLOCK: &str = const_str::concat!(
    r"(?:(?P<hour>[01][0-9]|2[0-3]):(?P<minute>[0-5][0-9]):(?P<second>[0-5][0-9])",
    r"(?:\.(?P<fraction>[0-9]+))?",
    r"|(?P<end_of_day>24:00:00)(?:\.0+)?)"
);

/// `Z`, `±00:00` through `±13:59`, or `±14:00`.
const OFFSET_BODY: &str = const_str::concat!(
    r"Z|(?P<offset_sign>[+-])",
    r"(?:(?P<offset_hour>0[0-9]|1[0-3]):(?P<offset_minute>[0-5][0-9])|(?P<offset_max>14:00))"
);

const OFFSET: &str = const_str::concat!("(?P<offset>", OFFSET_BODY, ")?");

pub const DATE_PATTERN: &str = const_str::concat!("^", DATE, OFFSET, "$");

pub const TIME_PATTERN: &str = const_str::concat!("^", CLOCK, OFFSET, "$");

pub const DATE_TIME_PATTERN: &str = const_str::concat!("^", DATE, "T", CLOCK, OFFSET, "$");

pub const OFFSET_PATTERN: &str = const_str::concat!("^(?P<offset>", OFFSET_BODY, ")$");

const SECONDS: &str = r"[0-9]+(?:\.[0-9]+)?S";

/// Non-empty ordered subset of `nH nM n[.n]S`.
const CLOCK_AMOUNT: &str = const_str::concat!(
    "(?:[0-9]+H(?:[0-9]+M)?(?:",
    SECONDS,
    ")?|[0-9]+M(?:",
    SECONDS,
    ")?|",
    SECONDS,
    ")"
);

/// Non-empty ordered subset of `nY nM nD`.
const CALENDAR_AMOUNT: &str = "(?:[0-9]+Y(?:[0-9]+M)?(?:[0-9]+D)?|[0-9]+M(?:[0-9]+D)?|[0-9]+D)";

/// A calendar part with an optional clock part, or a clock part alone. `T`
/// never appears without a following clock field.
pub const AMOUNT_PATTERN: &str = const_str::concat!(
    "^-?P(?:",
    CALENDAR_AMOUNT,
    "(?:T",
    CLOCK_AMOUNT,
    ")?|T",
    CLOCK_AMOUNT,
    ")$"
);

#[expect(
    clippy::expect_used,
    reason = "patterns are compile-time constants covered by the grammar tests"
)]
fn compile(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("grammar pattern must compile"))
}

#[must_use]
pub fn date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, DATE_PATTERN)
}

#[must_use]
pub fn time() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, TIME_PATTERN)
}

#[must_use]
pub fn date_time() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, DATE_TIME_PATTERN)
}

#[must_use]
pub fn offset() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, OFFSET_PATTERN)
}

#[must_use]
pub fn amount() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, AMOUNT_PATTERN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_accepts() {
        for s in [
            "2015-04-25",
            "0001-01-01",
            "0000-12-31",
            "-0044-03-15",
            "12345-06-30",
            "2015-04-25Z",
            "2015-04-25+01:00",
            "2015-04-25-13:59",
            "2015-04-25+14:00",
            "2023-02-30",
        ] {
            assert!(date().is_match(s), "{s} should match");
        }
    }

    #[test]
    fn date_rejects() {
        for s in [
            "",
            "foo",
            "15-04-25",
            "02015-04-25",
            "2015-4-25",
            "2015-13-01",
            "2015-00-01",
            "2015-04-32",
            "2015-04-00",
            "2015-04-25+50:00",
            "2015-04-25+14:01",
            "2015-04-25+1:00",
            "2015-04-25 ",
            " 2015-04-25",
            "2015-04-25T00:00:00",
        ] {
            assert!(!date().is_match(s), "{s:?} should not match");
        }
    }

    #[test]
    fn time_accepts() {
        for s in [
            "19:35:20",
            "00:00:00",
            "23:59:59",
            "24:00:00",
            "24:00:00.000",
            "19:35:20.1234",
            "19:35:20.123456789012",
            "19:35:20Z",
            "19:35:20.1234+01:00",
            "19:35:20-08:00",
        ] {
            assert!(time().is_match(s), "{s} should match");
        }
    }

    #[test]
    fn time_rejects() {
        for s in [
            "",
            "foo",
            "24:00:01",
            "24:01:00",
            "24:00:00.5",
            "25:00:00",
            "19:60:00",
            "19:35:60",
            "19:35",
            "19:35:20.",
            "19:35:20.foo",
            "19:35:20+50:00",
        ] {
            assert!(!time().is_match(s), "{s:?} should not match");
        }
    }

    #[test]
    fn date_time_accepts() {
        for s in [
            "2015-04-25T19:35:20",
            "1985-04-12T23:20:50.52Z",
            "1996-12-19T16:39:57-08:00",
            "1937-01-01T12:00:27.87+00:20",
            "2015-04-25T24:00:00",
        ] {
            assert!(date_time().is_match(s), "{s} should match");
        }
    }

    #[test]
    fn date_time_rejects() {
        for s in [
            "",
            "foo",
            "2015-04-25 19:35:20",
            "2015-04-25T19:35:20+50:00",
            "2015-04-25+01:00T19:35:20",
            "2015-04-25t19:35:20",
            "2015-04-25T19:35",
        ] {
            assert!(!date_time().is_match(s), "{s:?} should not match");
        }
    }

    #[test]
    fn offset_forms() {
        for s in ["Z", "+00:00", "-00:00", "+05:30", "-13:59", "+14:00", "-14:00"] {
            assert!(offset().is_match(s), "{s} should match");
        }
        for s in ["", "z", "+14:30", "+15:00", "0100", "+01", "+0100"] {
            assert!(!offset().is_match(s), "{s:?} should not match");
        }
    }

    #[test]
    fn amount_accepts() {
        for s in [
            "P2015Y4M25DT19H35M20S",
            "P2015Y",
            "P4M",
            "P25D",
            "PT19H",
            "PT35M",
            "PT20S",
            "PT1.5S",
            "-P1Y",
            "P1YT1S",
            "P1M1D",
            "PT1H1S",
        ] {
            assert!(amount().is_match(s), "{s} should match");
        }
    }

    #[test]
    fn amount_rejects() {
        for s in [
            "", "foo", "P", "PT", "-P", "P1YT", "P1D1M", "PT1S1H", "P1W", "P-1Y", "P1.5Y",
            "PT1.S", "1Y", "P1Y ",
        ] {
            assert!(!amount().is_match(s), "{s:?} should not match");
        }
    }
}
