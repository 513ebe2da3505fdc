use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context as _, Result, bail};
use kalends_core::clock::Clock;
use kalends_core::config::OutputFormat;
use kalends_iso::{
    CivilDate, CivilDateTime, CivilTime, Duration, Interval, MonthCalendar, OffsetDate,
    OffsetDateTime, OffsetTime, Period, TemporalError, TemporalResult, Unit, UtcOffset,
};
use serde::Serialize;

use super::cli::{Command, Kind};

/// Everything a command needs besides its arguments.
#[derive(Debug, Clone)]
pub struct Context<C> {
    pub format: OutputFormat,
    /// Offset the wall clock is read at by `now`.
    pub offset: UtcOffset,
    pub clock: C,
}

/// A value type the CLI can parse, shift and compare.
trait CalendarValue: FromStr<Err = TemporalError> + Display + Serialize + Sized {
    fn shift(&self, amount: i64, unit: Unit) -> TemporalResult<Self>;

    /// `None` for types without a total order.
    fn order(&self, other: &Self) -> Option<Ordering>;
}

macro_rules! instant_values {
    ($($ty:ty),+) => {$(
        impl CalendarValue for $ty {
            fn shift(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
                self.plus(amount, unit)
            }

            fn order(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    )+};
}

instant_values!(
    CivilDate,
    CivilTime,
    CivilDateTime,
    OffsetDate,
    OffsetTime,
    OffsetDateTime
);

impl CalendarValue for Duration {
    fn shift(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        self.plus(amount, unit)
    }

    fn order(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_length(other))
    }
}

impl CalendarValue for Period {
    fn shift(&self, amount: i64, unit: Unit) -> TemporalResult<Self> {
        self.plus(amount, unit)
    }

    fn order(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}

impl CalendarValue for Interval {
    fn shift(&self, _amount: i64, unit: Unit) -> TemporalResult<Self> {
        Err(TemporalError::InvalidUnit(format!(
            "Interval does not support {unit}"
        )))
    }

    fn order(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}

/// Runs `$run::<T>(args)` with `T` the value type behind `$kind`.
macro_rules! for_kind {
    ($kind:expr, $run:ident($($arg:expr),*)) => {
        match $kind {
            Kind::Date => $run::<CivilDate>($($arg),*),
            Kind::Time => $run::<CivilTime>($($arg),*),
            Kind::Datetime => $run::<CivilDateTime>($($arg),*),
            Kind::OffsetDate => $run::<OffsetDate>($($arg),*),
            Kind::OffsetTime => $run::<OffsetTime>($($arg),*),
            Kind::OffsetDatetime => $run::<OffsetDateTime>($($arg),*),
            Kind::Duration => $run::<Duration>($($arg),*),
            Kind::Period => $run::<Period>($($arg),*),
            Kind::Interval => $run::<Interval>($($arg),*),
        }
    };
}

#[derive(Serialize)]
struct Rendered<'a, T> {
    kind: &'static str,
    value: &'a T,
}

#[derive(Serialize)]
struct Compared<'a> {
    kind: &'static str,
    left: &'a str,
    right: &'a str,
    ordering: &'static str,
}

#[derive(Serialize)]
struct MonthView {
    year: i32,
    month: u8,
    length: u8,
    easter: CivilDate,
    days: Vec<CivilDate>,
}

/// Runs one command and returns what it prints.
///
/// ## Errors
/// Returns an error if an argument does not parse as its kind, or the
/// requested operation is not defined for that kind.
#[tracing::instrument(skip(ctx), fields(format = ?ctx.format))]
pub fn run<C: Clock>(command: &Command, ctx: &Context<C>) -> Result<String> {
    match command {
        Command::Parse { kind, text } => for_kind!(kind, parse_one(*kind, text, ctx.format)),
        Command::Add {
            kind,
            text,
            amount,
            unit,
        } => {
            let unit: Unit = unit.parse()?;
            for_kind!(kind, add_one(*kind, text, *amount, unit, ctx.format))
        }
        Command::Compare { kind, left, right } => {
            for_kind!(kind, compare_two(*kind, left, right, ctx.format))
        }
        Command::Now { kind, offset } => {
            let offset = match offset {
                Some(text) => UtcOffset::parse(text)
                    .with_context(|| format!("invalid --offset {text:?}"))?,
                None => ctx.offset,
            };
            now(*kind, offset, &ctx.clock, ctx.format)
        }
        Command::Month { year, month } => month_view(*year, *month, ctx.format),
    }
}

fn read<T: CalendarValue>(kind: Kind, text: &str) -> Result<T> {
    text.parse::<T>()
        .with_context(|| format!("cannot read {text:?} as {}", kind.as_str()))
}

fn render<T: CalendarValue>(kind: Kind, value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string(&Rendered {
            kind: kind.as_str(),
            value,
        })?,
    })
}

fn parse_one<T: CalendarValue>(kind: Kind, text: &str, format: OutputFormat) -> Result<String> {
    let value: T = read(kind, text)?;
    render(kind, &value, format)
}

fn add_one<T: CalendarValue>(
    kind: Kind,
    text: &str,
    amount: i64,
    unit: Unit,
    format: OutputFormat,
) -> Result<String> {
    let value: T = read(kind, text)?;
    let shifted = value
        .shift(amount, unit)
        .with_context(|| format!("cannot add {amount} {unit} to {value}"))?;
    tracing::debug!(%value, %shifted, "Shifted value");
    render(kind, &shifted, format)
}

fn compare_two<T: CalendarValue>(
    kind: Kind,
    left: &str,
    right: &str,
    format: OutputFormat,
) -> Result<String> {
    let left: T = read(kind, left)?;
    let right: T = read(kind, right)?;
    let Some(ordering) = left.order(&right) else {
        bail!("{} values have no fixed length and cannot be compared", kind.as_str());
    };
    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(match format {
        OutputFormat::Text => symbol.to_string(),
        OutputFormat::Json => serde_json::to_string(&Compared {
            kind: kind.as_str(),
            left: &left.to_string(),
            right: &right.to_string(),
            ordering: symbol,
        })?,
    })
}

fn now(kind: Kind, offset: UtcOffset, clock: &impl Clock, format: OutputFormat) -> Result<String> {
    match kind {
        Kind::Date => render(kind, &OffsetDate::now_at(offset, clock)?.to_civil(), format),
        Kind::Time => render(kind, &OffsetTime::now_at(offset, clock).to_civil(), format),
        Kind::Datetime => render(
            kind,
            &OffsetDateTime::now_at(offset, clock)?.to_civil(),
            format,
        ),
        Kind::OffsetDate => render(kind, &OffsetDate::now_at(offset, clock)?, format),
        Kind::OffsetTime => render(kind, &OffsetTime::now_at(offset, clock), format),
        Kind::OffsetDatetime => render(kind, &OffsetDateTime::now_at(offset, clock)?, format),
        Kind::Duration | Kind::Period | Kind::Interval => {
            bail!("{} is an amount, not a point in time", kind.as_str())
        }
    }
}

fn month_view(year: i32, month: u8, format: OutputFormat) -> Result<String> {
    let calendar = MonthCalendar::new(year, month)
        .with_context(|| format!("no month {month} in year {year}"))?;
    let easter = calendar.easter_date()?;

    if format == OutputFormat::Json {
        return Ok(serde_json::to_string(&MonthView {
            year,
            month,
            length: calendar.len(),
            easter,
            days: calendar.days().collect(),
        })?);
    }

    let mut lines = vec![
        format!("{} {year}", calendar.month()),
        "Mo Tu We Th Fr Sa Su".to_string(),
    ];
    let lead = usize::from(calendar.first_day().day_of_week().value() - 1);
    let mut row = vec!["  ".to_string(); lead];
    for day in &calendar {
        row.push(format!("{:>2}", day.day_of_month()));
        if row.len() == 7 {
            lines.push(row.join(" "));
            row.clear();
        }
    }
    if !row.is_empty() {
        lines.push(row.join(" "));
    }
    lines.push(format!("Easter {easter}"));
    Ok(lines.join("\n"))
}
