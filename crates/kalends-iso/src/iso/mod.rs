//! ISO-8601 / XML Schema lexical forms for dates, times and amounts.

pub mod core;
pub mod grammar;
pub mod month_calendar;
pub mod parse;
mod serde;

#[cfg(test)]
mod tests;
