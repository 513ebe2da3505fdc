//! ISO-8601 derived calendar values: lexical validation, canonical
//! formatting and calendar-safe arithmetic.
//!
//! Every value is immutable. Parsing goes through an anchored grammar per
//! type (see [`iso::grammar`]); construction re-checks calendar validity;
//! arithmetic returns new values.

pub mod error;
pub mod iso;

pub use error::{ErrorKind, TemporalError, TemporalResult};
pub use iso::core::{
    CivilDate, CivilDateTime, CivilTime, DayOfWeek, Duration, DurationBuilder, Instant, Interval,
    Month, OffsetDate, OffsetDateTime, OffsetTime, Period, Temporal, Unit, UtcOffset,
};
pub use iso::month_calendar::{MonthCalendar, MonthDays};
