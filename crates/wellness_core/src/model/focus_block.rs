//! Focus block records.

use crate::model::validation::{ensure_id, ensure_range, ModelValidationError};
use crate::model::Timestamp;
use serde::{Deserialize, Serialize};

/// Review state of a focus block.
///
/// No operation changes the status after append; blocks are read back with
/// the status they were written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusBlockStatus {
    Suggested,
    Accepted,
    Rejected,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusBlock {
    pub id: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub description: String,
    pub status: FocusBlockStatus,
}

impl FocusBlock {
    /// Creates a block in `Suggested` state.
    pub fn suggested(
        id: impl Into<String>,
        start_time: Timestamp,
        end_time: Timestamp,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
            description: description.into(),
            status: FocusBlockStatus::Suggested,
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_id("focus block", &self.id)?;
        ensure_range("focus block", self.start_time, self.end_time)
    }
}
