//! Access façade: the single operation surface consumed by the UI layer.
//!
//! # Responsibility
//! - Authenticate the caller identity for every call.
//! - Dispatch into the profile, activity, focus block and meeting stores.
//! - Map repository failures into the public `ServiceError` taxonomy.
//! - Emit one metadata-only `facade_call` event per operation.
//!
//! # Invariants
//! - Calls are independent; no operation spans more than one store.
//! - Record content (descriptions, insights) never reaches the logs.

mod error;
mod store;

pub use error::{ServiceError, ServiceResult};
pub use store::WellnessStore;

use crate::model::activity::Activity;
use crate::model::focus_block::FocusBlock;
use crate::model::identity::UserId;
use crate::model::meeting::{Meeting, MeetingId};
use crate::model::profile::UserProfile;
use crate::repo::activity_repo::SqliteActivityRepository;
use crate::repo::focus_repo::SqliteFocusBlockRepository;
use crate::repo::meeting_repo::SqliteMeetingRepository;
use crate::repo::profile_repo::SqliteProfileRepository;
use crate::repo::RepoResult;
use crate::service::activity_service::ActivityService;
use crate::service::clock::{Clock, SystemClock};
use crate::service::focus_service::FocusService;
use crate::service::meeting_service::MeetingService;
use crate::service::profile_service::ProfileService;
use log::{info, warn};
use rusqlite::Connection;
use std::time::Instant;

/// Façade over one `WellnessStore`.
pub struct WellnessFacade<C: Clock = SystemClock> {
    store: WellnessStore,
    clock: C,
}

impl WellnessFacade<SystemClock> {
    /// Creates a façade stamping check-ins with wall-clock time.
    pub fn new(store: WellnessStore) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<C: Clock> WellnessFacade<C> {
    pub fn with_clock(store: WellnessStore, clock: C) -> Self {
        Self { store, clock }
    }

    /// Inserts or wholesale-replaces the profile of `profile.user_id`.
    pub fn create_or_update_user_profile(&self, profile: &UserProfile) -> ServiceResult<()> {
        self.run(
            "create_or_update_user_profile",
            profile.user_id.as_str(),
            |conn, user_id| {
                let mut stored = profile.clone();
                stored.user_id = user_id;
                ProfileService::new(SqliteProfileRepository::try_new(conn)?).save_profile(&stored)
            },
        )
    }

    /// Returns the caller's profile, or `None` before onboarding.
    pub fn get_user_profile(&self, caller: &str) -> ServiceResult<Option<UserProfile>> {
        self.run("get_user_profile", caller, |conn, user_id| {
            ProfileService::new(SqliteProfileRepository::try_new(conn)?).get_profile(&user_id)
        })
    }

    pub fn add_activity(&self, caller: &str, activity: &Activity) -> ServiceResult<()> {
        self.run("add_activity", caller, |conn, user_id| {
            self.activity_service(conn)?.add_activity(&user_id, activity)
        })
    }

    /// Returns the full activity log in append order.
    pub fn get_activities(&self, caller: &str) -> ServiceResult<Vec<Activity>> {
        self.run("get_activities", caller, |conn, user_id| {
            self.activity_service(conn)?.list_activities(&user_id)
        })
    }

    /// Records a stress check-in and returns the stored activity.
    pub fn add_stress_check_in(&self, caller: &str, level: i64) -> ServiceResult<Activity> {
        self.run("add_stress_check_in", caller, |conn, user_id| {
            self.activity_service(conn)?
                .record_stress_check_in(&user_id, level)
        })
    }

    pub fn add_focus_block(&self, caller: &str, block: &FocusBlock) -> ServiceResult<()> {
        self.run("add_focus_block", caller, |conn, user_id| {
            FocusService::new(SqliteFocusBlockRepository::try_new(conn)?)
                .add_focus_block(&user_id, block)
        })
    }

    pub fn get_focus_blocks(&self, caller: &str) -> ServiceResult<Vec<FocusBlock>> {
        self.run("get_focus_blocks", caller, |conn, user_id| {
            FocusService::new(SqliteFocusBlockRepository::try_new(conn)?)
                .list_focus_blocks(&user_id)
        })
    }

    /// Appends a meeting and returns its id.
    pub fn add_meeting(&self, caller: &str, meeting: &Meeting) -> ServiceResult<MeetingId> {
        self.run("add_meeting", caller, |conn, user_id| {
            MeetingService::new(SqliteMeetingRepository::try_new(conn)?)
                .add_meeting(&user_id, meeting)
        })
    }

    pub fn get_meetings(&self, caller: &str) -> ServiceResult<Vec<Meeting>> {
        self.run("get_meetings", caller, |conn, user_id| {
            MeetingService::new(SqliteMeetingRepository::try_new(conn)?).list_meetings(&user_id)
        })
    }

    /// Removes a meeting; `NotFound` when the caller owns no such id.
    pub fn remove_meeting(&self, caller: &str, meeting_id: &str) -> ServiceResult<()> {
        self.run("remove_meeting", caller, |conn, user_id| {
            MeetingService::new(SqliteMeetingRepository::try_new(conn)?)
                .remove_meeting(&user_id, meeting_id)
        })
    }

    /// Marks a meeting complete; `NotFound` when the caller owns no such id.
    pub fn mark_complete(&self, caller: &str, meeting_id: &str) -> ServiceResult<()> {
        self.run("mark_complete", caller, |conn, user_id| {
            MeetingService::new(SqliteMeetingRepository::try_new(conn)?)
                .mark_complete(&user_id, meeting_id)
        })
    }

    fn activity_service<'a>(
        &'a self,
        conn: &'a Connection,
    ) -> RepoResult<ActivityService<SqliteActivityRepository<'a>, &'a C>> {
        Ok(ActivityService::new(
            SqliteActivityRepository::try_new(conn)?,
            &self.clock,
        ))
    }

    fn run<T>(
        &self,
        op: &'static str,
        caller: &str,
        call: impl FnOnce(&Connection, UserId) -> RepoResult<T>,
    ) -> ServiceResult<T> {
        let started_at = Instant::now();
        let result = self.dispatch(caller, call);
        match &result {
            Ok(_) => info!(
                "event=facade_call module=facade op={op} status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=facade_call module=facade op={op} status=error duration_ms={} error_code={}",
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        result
    }

    fn dispatch<T>(
        &self,
        caller: &str,
        call: impl FnOnce(&Connection, UserId) -> RepoResult<T>,
    ) -> ServiceResult<T> {
        let user_id = UserId::parse(caller)?;
        let conn = self.store.lock().ok_or_else(|| {
            ServiceError::StorageUnavailable("store lock poisoned by an earlier panic".to_string())
        })?;
        Ok(call(&*conn, user_id)?)
    }
}
