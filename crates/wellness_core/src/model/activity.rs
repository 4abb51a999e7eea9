//! Activity log records.
//!
//! Stress check-ins and diary entries share this shape; a check-in is an
//! activity with `stress_level` set.

use crate::model::validation::{ensure_id, ensure_range, ModelValidationError};
use crate::model::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of generated stress check-in ids.
pub const STRESS_CHECK_IN_ID_PREFIX: &str = "stress-";

/// Append-only activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub description: String,
    /// Reported level for stress check-ins. Range is a UI convention (1-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<i64>,
}

impl Activity {
    pub fn new(
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
            stress_level: None,
        }
    }

    /// Builds a point-in-time stress check-in with a generated id.
    pub fn stress_check_in(level: i64, at: Timestamp) -> Self {
        Self {
            id: format!("{STRESS_CHECK_IN_ID_PREFIX}{}", Uuid::new_v4()),
            start_time: at,
            end_time: at,
            description: format!("Stress check-in: level {level}/10"),
            stress_level: Some(level),
        }
    }

    pub fn is_stress_check_in(&self) -> bool {
        self.stress_level.is_some()
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_id("activity", &self.id)?;
        ensure_range("activity", self.start_time, self.end_time)
    }
}
