use clap::{Parser, Subcommand, ValueEnum};

/// Parse, canonicalize and shift ISO-8601 calendar values
#[derive(Debug, Parser)]
#[command(name = "kalends", version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of plain text, overriding `output.format`
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a value and print its canonical form
    Parse {
        kind: Kind,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Add `amount` of `unit` to a value
    Add {
        kind: Kind,
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Unit name, for example `days`, `months` or `half_days`
        unit: String,
    },
    /// Compare two values of the same kind
    Compare {
        kind: Kind,
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Print the current value of a kind
    Now {
        #[arg(long, value_enum, default_value_t = Kind::OffsetDatetime)]
        kind: Kind,
        /// Offset to read the wall clock at, `Z` or `±HH:MM`; defaults to `clock.offset`
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
    },
    /// List the days of a month
    Month {
        year: i32,
        month: u8,
    },
}

/// The value type a command works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Date,
    Time,
    Datetime,
    OffsetDate,
    OffsetTime,
    OffsetDatetime,
    Duration,
    Period,
    Interval,
}

impl Kind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
            Self::OffsetDate => "offset-date",
            Self::OffsetTime => "offset-time",
            Self::OffsetDatetime => "offset-datetime",
            Self::Duration => "duration",
            Self::Period => "period",
            Self::Interval => "interval",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_negative_amount() {
        let cli = Cli::try_parse_from(["kalends", "add", "date", "2024-03-31", "-1", "months"])
            .unwrap();
        match cli.command {
            Command::Add {
                kind, amount, unit, ..
            } => {
                assert_eq!(kind, Kind::Date);
                assert_eq!(amount, -1);
                assert_eq!(unit, "months");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn kinds_use_kebab_case() {
        let cli = Cli::try_parse_from(["kalends", "--json", "parse", "offset-datetime", "x"])
            .unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Command::Parse {
                kind: Kind::OffsetDatetime,
                ..
            }
        ));
        assert_eq!(Kind::OffsetDatetime.as_str(), "offset-datetime");
    }

    #[test]
    fn now_defaults() {
        let cli = Cli::try_parse_from(["kalends", "now", "--offset", "-05:00"]).unwrap();
        match cli.command {
            Command::Now { kind, offset } => {
                assert_eq!(kind, Kind::OffsetDatetime);
                assert_eq!(offset.as_deref(), Some("-05:00"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["kalends", "parse", "week", "2024-W01"]).is_err());
    }
}
