//! Profile use-case service.
//!
//! # Invariants
//! - Saving replaces the stored profile wholesale (last write wins).

use crate::model::identity::UserId;
use crate::model::profile::UserProfile;
use crate::repo::profile_repo::ProfileRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for the profile store.
pub struct ProfileService<R: ProfileRepository> {
    repo: R,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts or replaces the profile keyed by `profile.user_id`.
    pub fn save_profile(&self, profile: &UserProfile) -> RepoResult<()> {
        self.repo.upsert_profile(profile)
    }

    /// Gets the profile, or `None` before the first save.
    pub fn get_profile(&self, user_id: &UserId) -> RepoResult<Option<UserProfile>> {
        self.repo.get_profile(user_id)
    }
}
