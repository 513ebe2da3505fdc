/// Date fields captured from `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Clock fields captured from `HH:MM:SS[.f]`.
///
/// `24:00:00` arrives as `hour == 24` with every other field zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Fraction truncated (never rounded) to microseconds.
    pub microsecond: u32,
}

/// Fields of a date-time, with the trailing offset if one was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFields {
    pub date: DateFields,
    pub time: TimeFields,
    /// Offset in seconds east of UTC; `Some(0)` for `Z`.
    pub offset: Option<i32>,
}

/// Every field of the amount grammar.
///
/// Magnitudes are never negative; the sign applies to the whole value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalFields {
    pub negative: bool,
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub microseconds: u32,
}
