//! Activity log use-case service.
//!
//! # Responsibility
//! - Append and list activity entries.
//! - Turn a stress level into a stamped check-in activity.

use crate::model::activity::Activity;
use crate::model::identity::UserId;
use crate::repo::activity_repo::ActivityRepository;
use crate::repo::RepoResult;
use crate::service::clock::Clock;

/// Use-case service wrapper for the activity log.
pub struct ActivityService<R: ActivityRepository, C: Clock> {
    repo: R,
    clock: C,
}

impl<R: ActivityRepository, C: Clock> ActivityService<R, C> {
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    pub fn add_activity(&self, user_id: &UserId, activity: &Activity) -> RepoResult<()> {
        self.repo.append_activity(user_id, activity)
    }

    /// Returns the full log in append order.
    pub fn list_activities(&self, user_id: &UserId) -> RepoResult<Vec<Activity>> {
        self.repo.list_activities(user_id)
    }

    /// Records a stress check-in stamped with the current time.
    ///
    /// # Contract
    /// - The level is stored as given; the 1-10 scale is not enforced here.
    /// - Returns the appended activity, including its generated id.
    pub fn record_stress_check_in(&self, user_id: &UserId, level: i64) -> RepoResult<Activity> {
        let activity = Activity::stress_check_in(level, self.clock.now_nanos());
        self.repo.append_activity(user_id, &activity)?;
        Ok(activity)
    }
}
