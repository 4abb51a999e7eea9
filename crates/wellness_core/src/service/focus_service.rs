//! Focus block use-case service.

use crate::model::focus_block::FocusBlock;
use crate::model::identity::UserId;
use crate::repo::focus_repo::FocusBlockRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for the focus block log.
pub struct FocusService<R: FocusBlockRepository> {
    repo: R,
}

impl<R: FocusBlockRepository> FocusService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_focus_block(&self, user_id: &UserId, block: &FocusBlock) -> RepoResult<()> {
        self.repo.append_focus_block(user_id, block)
    }

    pub fn list_focus_blocks(&self, user_id: &UserId) -> RepoResult<Vec<FocusBlock>> {
        self.repo.list_focus_blocks(user_id)
    }
}
