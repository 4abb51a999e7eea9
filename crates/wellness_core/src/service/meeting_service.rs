//! Meeting log use-case service.
//!
//! # Invariants
//! - Remove and complete act by meeting id and return `NotFound` for ids the
//!   user does not own.

use crate::model::identity::UserId;
use crate::model::meeting::{Meeting, MeetingId};
use crate::repo::meeting_repo::MeetingRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for the meeting log.
pub struct MeetingService<R: MeetingRepository> {
    repo: R,
}

impl<R: MeetingRepository> MeetingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a meeting and returns the id later calls refer to.
    pub fn add_meeting(&self, user_id: &UserId, meeting: &Meeting) -> RepoResult<MeetingId> {
        self.repo.append_meeting(user_id, meeting)
    }

    pub fn list_meetings(&self, user_id: &UserId) -> RepoResult<Vec<Meeting>> {
        self.repo.list_meetings(user_id)
    }

    pub fn remove_meeting(&self, user_id: &UserId, meeting_id: &str) -> RepoResult<()> {
        self.repo.remove_meeting(user_id, meeting_id)
    }

    pub fn mark_complete(&self, user_id: &UserId, meeting_id: &str) -> RepoResult<()> {
        self.repo.mark_complete(user_id, meeting_id)
    }
}
