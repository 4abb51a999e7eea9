//! Shape validation shared by all record types.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure raised before a record is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Record identifier is empty or whitespace.
    BlankId(&'static str),
    /// Record identifier has leading or trailing whitespace.
    PaddedId { record: &'static str, id: String },
    /// `end_time` precedes `start_time`.
    InvalidTimeRange {
        record: &'static str,
        start: i64,
        end: i64,
    },
    /// Goal appears more than once in a profile.
    DuplicateGoal(String),
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId(record) => write!(f, "{record} id must not be blank"),
            Self::PaddedId { record, id } => {
                write!(f, "{record} id `{id}` must not start or end with whitespace")
            }
            Self::InvalidTimeRange { record, start, end } => write!(
                f,
                "{record} end_time ({end}) must not be earlier than start_time ({start})"
            ),
            Self::DuplicateGoal(goal) => write!(f, "goal `{goal}` listed more than once"),
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn ensure_id(record: &'static str, id: &str) -> Result<(), ModelValidationError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(ModelValidationError::BlankId(record));
    }
    if trimmed.len() != id.len() {
        return Err(ModelValidationError::PaddedId {
            record,
            id: id.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_range(
    record: &'static str,
    start: i64,
    end: i64,
) -> Result<(), ModelValidationError> {
    if end < start {
        return Err(ModelValidationError::InvalidTimeRange { record, start, end });
    }
    Ok(())
}
