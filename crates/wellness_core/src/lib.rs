//! Core data access for the wellness companion.
//! This crate is the single source of truth for store invariants.

pub mod config;
pub mod db;
pub mod facade;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use facade::{ServiceError, ServiceResult, WellnessFacade, WellnessStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::Activity;
pub use model::focus_block::{FocusBlock, FocusBlockStatus};
pub use model::identity::{IdentityError, UserId};
pub use model::meeting::{Meeting, MeetingId};
pub use model::profile::{
    ContentPreferences, DietPreference, Goal, UserPreferences, UserProfile,
};
pub use model::validation::ModelValidationError;
pub use model::{time_of_day, TimeOfDay, Timestamp};
pub use repo::{RepoError, RepoResult};
pub use service::clock::{Clock, FixedClock, SystemClock};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
