//! Shared building blocks for the kalends workspace.
//!
//! This crate holds the pieces every other crate leans on without pulling in
//! the grammar engine: the core error type, configuration loading, the
//! Gregorian calendar authority and the wall-clock source.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
