//! Error types shared by the decoders, lookups and formatting.

use thiserror::Error;

use crate::weekday::Weekday;

/// A cell or row does not have the shape the template requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Expected an integer at row {row}, column {column}, found {value:?}")]
    InvalidInteger {
        row: u32,
        column: u32,
        value: Option<String>,
    },
    #[error("Missing {what} at row {row}, column {column}")]
    MissingValue {
        row: u32,
        column: u32,
        what: &'static str,
    },
    #[error("Unknown weekday: {0:?}")]
    UnknownWeekday(String),
    #[error("Row {row} is missing required cells: {reason}")]
    IncompleteRow { row: u32, reason: String },
}

/// A lookup into parsed schedules found nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("Could not find schedule for group: {0:?}")]
    Group(String),
    #[error("Could not find schedule for parity: {0}")]
    Parity(bool),
    #[error("Could not find schedule for weekday: {0:?}")]
    Weekday(Weekday),
    #[error("Could not find bells for weekday: {0:?}")]
    BellsVariant(Weekday),
    #[error("Could not find bell for period {0}")]
    Bell(u32),
}

/// An empty period has no human-readable form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Period is empty")]
pub struct EmptyPeriodError;

/// Errors that can occur while formatting periods with bell times.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BellsError {
    #[error(transparent)]
    NotFound(#[from] NotFound),
    #[error(transparent)]
    EmptyPeriod(#[from] EmptyPeriodError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = FormatError::InvalidInteger {
            row: 4,
            column: 2,
            value: Some("x".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Expected an integer at row 4, column 2, found Some(\"x\")"
        );
        assert_eq!(
            NotFound::Group("101".to_string()).to_string(),
            "Could not find schedule for group: \"101\""
        );
        assert_eq!(EmptyPeriodError.to_string(), "Period is empty");
    }

    #[test]
    fn test_bells_error_wraps_sources() {
        let err: BellsError = NotFound::Bell(7).into();
        assert_eq!(err.to_string(), "Could not find bell for period 7");
        let err: BellsError = EmptyPeriodError.into();
        assert_eq!(err, BellsError::EmptyPeriod(EmptyPeriodError));
    }
}
