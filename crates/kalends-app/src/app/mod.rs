//! The `kalends` command surface: argument definitions and the commands
//! behind them. Commands return their output as a string so they can be
//! exercised without a terminal.

pub mod cli;
pub mod command;
