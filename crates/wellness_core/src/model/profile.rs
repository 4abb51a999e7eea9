//! User profile and preference records.
//!
//! # Responsibility
//! - Define the single per-user profile written by onboarding.
//! - Model every UI choice as a closed enum.
//!
//! # Invariants
//! - At most one profile exists per `UserId`.
//! - Preferences are replaced wholesale, never patched field by field.
//! - `goals` behaves like a set: a goal appears at most once.

use crate::model::identity::UserId;
use crate::model::validation::ModelValidationError;
use crate::model::{TimeOfDay, Timestamp};
use serde::{Deserialize, Serialize};

/// Dietary choice used to pick meal suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
}

/// Wellness goal selected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    BetterFocus,
    BetterSleep,
    LessStress,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Self::BetterFocus => "betterFocus",
            Self::BetterSleep => "betterSleep",
            Self::LessStress => "lessStress",
        }
    }
}

/// Daily rhythm and habit preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Typical number of meetings per day.
    pub typical_meeting_load: i64,
    pub sleep_time: TimeOfDay,
    pub wake_time: TimeOfDay,
    /// `(start, end)` of the working day. May wrap past midnight.
    pub work_hours: (TimeOfDay, TimeOfDay),
    pub diet_preference: DietPreference,
    /// Free text, stored as entered.
    pub caffeine_habits: String,
    pub goals: Vec<Goal>,
}

/// Content toggles shown on the privacy page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPreferences {
    pub avoid_certain_content: bool,
    #[serde(rename = "useAI")]
    pub use_ai: bool,
}

/// Canonical per-user profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    pub preferences: UserPreferences,
    /// Epoch nanoseconds of the last calendar import, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_calendar_sync: Option<Timestamp>,
    /// Ordered insight lines.
    #[serde(default)]
    pub weekly_insights: Vec<String>,
    #[serde(default)]
    pub content_preferences: ContentPreferences,
}

impl UserProfile {
    /// Creates a profile with no calendar sync, no insights and default
    /// content preferences.
    pub fn new(user_id: UserId, preferences: UserPreferences) -> Self {
        Self {
            user_id,
            preferences,
            last_calendar_sync: None,
            weekly_insights: Vec::new(),
            content_preferences: ContentPreferences::default(),
        }
    }

    /// Validates record shape before persistence.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        let goals = &self.preferences.goals;
        for (index, goal) in goals.iter().enumerate() {
            if goals[..index].contains(goal) {
                return Err(ModelValidationError::DuplicateGoal(goal.label().to_string()));
            }
        }
        Ok(())
    }
}
