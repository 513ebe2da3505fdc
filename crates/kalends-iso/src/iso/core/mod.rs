//! Calendar value types and amounts.
//!
//! The civil types carry no offset. The offset types keep the offset they
//! were given for display, while ordering and equality always go through the
//! UTC-normalized [`Instant`]. [`Duration`] and [`Period`] are deliberately
//! separate: only clock amounts have a fixed length.

mod arith;
mod calendar_fields;
mod date;
mod datetime;
mod duration;
mod instant;
mod interval;
mod offset;
mod offset_date;
mod offset_datetime;
mod offset_time;
mod period;
mod time;
mod unit;

use kalends_core::calendar::Gregorian;

pub use calendar_fields::{DayOfWeek, Month};
pub use date::CivilDate;
pub use datetime::CivilDateTime;
pub use duration::{Duration, DurationBuilder};
pub use instant::{Instant, Temporal};
pub use interval::Interval;
pub use offset::UtcOffset;
pub use offset_date::OffsetDate;
pub use offset_datetime::OffsetDateTime;
pub use offset_time::OffsetTime;
pub use period::Period;
pub use time::CivilTime;
pub use unit::Unit;

/// The calendar every value type delegates to.
pub(crate) const CALENDAR: Gregorian = Gregorian;
