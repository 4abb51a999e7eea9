//! Meeting log records.
//!
//! # Invariants
//! - `id` is unique within one user's meeting log and carries no surrounding
//!   whitespace; lookups compare it verbatim.
//! - `repeat_interval` is meaningful only when `is_repeating` is set.
//! - `diary_entries` keep insertion order.

use crate::model::activity::Activity;
use crate::model::validation::{ensure_id, ensure_range, ModelValidationError};
use crate::model::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meeting identifier used by removal and completion calls.
pub type MeetingId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Generated when the payload omits it.
    #[serde(default = "generate_meeting_id")]
    pub id: MeetingId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub description: String,
    pub priority: i64,
    pub is_repeating: bool,
    /// Repeat period in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<i64>,
    #[serde(default)]
    pub diary_entries: Vec<Activity>,
    #[serde(default)]
    pub completed: bool,
}

impl Meeting {
    /// Creates a one-off meeting with a generated id.
    pub fn new(start_time: Timestamp, end_time: Timestamp, description: impl Into<String>) -> Self {
        Self::with_id(generate_meeting_id(), start_time, end_time, description)
    }

    /// Creates a one-off meeting with a caller-provided id.
    pub fn with_id(
        id: impl Into<MeetingId>,
        start_time: Timestamp,
        end_time: Timestamp,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
            description: description.into(),
            priority: 0,
            is_repeating: false,
            repeat_interval: None,
            diary_entries: Vec::new(),
            completed: false,
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_id("meeting", &self.id)?;
        ensure_range("meeting", self.start_time, self.end_time)?;
        for entry in &self.diary_entries {
            entry.validate()?;
        }
        Ok(())
    }
}

/// Fresh UUID v4 meeting id.
pub fn generate_meeting_id() -> MeetingId {
    Uuid::new_v4().to_string()
}
