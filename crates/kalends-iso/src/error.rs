use kalends_core::error::CoreError;
use thiserror::Error;

/// Errors raised while parsing, constructing or shifting calendar values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// Input text does not match the grammar of the requested type.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Fields are well-formed but do not name a real calendar day.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Clock fields outside their ranges.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// UTC offset outside -14:00..=+14:00 or not a whole minute.
    #[error("Invalid offset: {0}")]
    InvalidOffset(String),

    /// Unit not understood, or not applicable to the receiving type.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// Amount arithmetic left the representable range.
    #[error("Overflow: {0}")]
    Overflow(String),

    #[error(transparent)]
    Core(CoreError),
}

/// Fieldless discriminant of [`TemporalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    InvalidDate,
    InvalidTime,
    InvalidOffset,
    InvalidUnit,
    Overflow,
    Core,
}

impl TemporalError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::InvalidDate(_) => ErrorKind::InvalidDate,
            Self::InvalidTime(_) => ErrorKind::InvalidTime,
            Self::InvalidOffset(_) => ErrorKind::InvalidOffset,
            Self::InvalidUnit(_) => ErrorKind::InvalidUnit,
            Self::Overflow(_) => ErrorKind::Overflow,
            Self::Core(_) => ErrorKind::Core,
        }
    }

    pub(crate) fn overflow(what: &str) -> Self {
        Self::Overflow(format!("{what} is out of the representable range"))
    }
}

impl From<CoreError> for TemporalError {
    fn from(err: CoreError) -> Self {
        match err {
            // The calendar authority reports unrepresentable days as out of range.
            CoreError::OutOfRange(msg) => Self::InvalidDate(msg),
            other => Self::Core(other),
        }
    }
}

pub type TemporalResult<T> = std::result::Result<T, TemporalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_maps_to_invalid_date() {
        let err = TemporalError::from(CoreError::OutOfRange("year 300000".to_string()));
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(err.to_string(), "Invalid date: year 300000");
    }

    #[test]
    fn invariant_violation_stays_core() {
        let err = TemporalError::from(CoreError::InvariantViolation("broken"));
        assert_eq!(err.kind(), ErrorKind::Core);
        assert_eq!(err.to_string(), "Invariant violation: broken");
    }
}
