//! Activity log contract and SQLite implementation.
//!
//! # Invariants
//! - Append-only: no update or delete path exists.
//! - Reads return entries in append order (`seq ASC`).
//! - Duplicate activity ids are stored as separate entries.

use crate::model::activity::Activity;
use crate::model::identity::UserId;
use crate::repo::{ensure_tables, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the per-user activity log.
pub trait ActivityRepository {
    fn append_activity(&self, user_id: &UserId, activity: &Activity) -> RepoResult<()>;
    fn list_activities(&self, user_id: &UserId) -> RepoResult<Vec<Activity>>;
}

/// SQLite-backed activity repository.
pub struct SqliteActivityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActivityRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["activities"])?;
        Ok(Self { conn })
    }
}

impl ActivityRepository for SqliteActivityRepository<'_> {
    fn append_activity(&self, user_id: &UserId, activity: &Activity) -> RepoResult<()> {
        activity.validate()?;

        self.conn.execute(
            "INSERT INTO activities (
                user_id,
                id,
                start_time,
                end_time,
                description,
                stress_level
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                user_id.as_str(),
                activity.id.as_str(),
                activity.start_time,
                activity.end_time,
                activity.description.as_str(),
                activity.stress_level,
            ],
        )?;

        Ok(())
    }

    fn list_activities(&self, user_id: &UserId) -> RepoResult<Vec<Activity>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, start_time, end_time, description, stress_level
             FROM activities
             WHERE user_id = ?1
             ORDER BY seq ASC;",
        )?;
        let mut rows = stmt.query([user_id.as_str()])?;
        let mut activities = Vec::new();
        while let Some(row) = rows.next()? {
            activities.push(parse_activity_row(row)?);
        }
        Ok(activities)
    }
}

/// Maps one activity-shaped row. Shared with meeting diary entries.
pub(crate) fn parse_activity_row(row: &Row<'_>) -> RepoResult<Activity> {
    Ok(Activity {
        id: row.get("id")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        description: row.get("description")?,
        stress_level: row.get("stress_level")?,
    })
}
