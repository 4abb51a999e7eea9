//! Meeting log contract and SQLite implementation.
//!
//! # Invariants
//! - Meeting ids are unique per user; a second append with the same id fails
//!   with `DuplicateMeeting`.
//! - Removal and completion of an absent id fail with `NotFound`.
//! - Diary entries are written with their meeting in one transaction and
//!   deleted with it (`ON DELETE CASCADE`).

use crate::model::activity::Activity;
use crate::model::identity::UserId;
use crate::model::meeting::{Meeting, MeetingId};
use crate::repo::activity_repo::parse_activity_row;
use crate::repo::{bool_to_int, ensure_tables, int_to_bool, RepoError, RepoResult};
use rusqlite::{params, Connection, Transaction};

/// Repository interface for the per-user meeting log.
pub trait MeetingRepository {
    /// Appends one meeting and returns its id.
    fn append_meeting(&self, user_id: &UserId, meeting: &Meeting) -> RepoResult<MeetingId>;
    fn list_meetings(&self, user_id: &UserId) -> RepoResult<Vec<Meeting>>;
    fn remove_meeting(&self, user_id: &UserId, meeting_id: &str) -> RepoResult<()>;
    /// Sets `completed`; already completed meetings stay completed.
    fn mark_complete(&self, user_id: &UserId, meeting_id: &str) -> RepoResult<()>;
}

/// SQLite-backed meeting repository.
pub struct SqliteMeetingRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMeetingRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["meetings", "meeting_diary_entries"])?;
        Ok(Self { conn })
    }
}

impl MeetingRepository for SqliteMeetingRepository<'_> {
    fn append_meeting(&self, user_id: &UserId, meeting: &Meeting) -> RepoResult<MeetingId> {
        meeting.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        if meeting_exists_in_tx(&tx, user_id, &meeting.id)? {
            return Err(RepoError::DuplicateMeeting(meeting.id.clone()));
        }

        tx.execute(
            "INSERT INTO meetings (
                user_id,
                id,
                start_time,
                end_time,
                description,
                priority,
                is_repeating,
                repeat_interval,
                completed
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                user_id.as_str(),
                meeting.id.as_str(),
                meeting.start_time,
                meeting.end_time,
                meeting.description.as_str(),
                meeting.priority,
                bool_to_int(meeting.is_repeating),
                meeting.repeat_interval,
                bool_to_int(meeting.completed),
            ],
        )?;
        let meeting_seq = tx.last_insert_rowid();

        for (position, entry) in meeting.diary_entries.iter().enumerate() {
            tx.execute(
                "INSERT INTO meeting_diary_entries (
                    meeting_seq,
                    position,
                    id,
                    start_time,
                    end_time,
                    description,
                    stress_level
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    meeting_seq,
                    position as i64,
                    entry.id.as_str(),
                    entry.start_time,
                    entry.end_time,
                    entry.description.as_str(),
                    entry.stress_level,
                ],
            )?;
        }

        tx.commit()?;
        Ok(meeting.id.clone())
    }

    fn list_meetings(&self, user_id: &UserId) -> RepoResult<Vec<Meeting>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                seq,
                id,
                start_time,
                end_time,
                description,
                priority,
                is_repeating,
                repeat_interval,
                completed
             FROM meetings
             WHERE user_id = ?1
             ORDER BY seq ASC;",
        )?;
        let mut rows = stmt.query([user_id.as_str()])?;
        let mut meetings = Vec::new();
        while let Some(row) = rows.next()? {
            let meeting_seq: i64 = row.get("seq")?;
            meetings.push(Meeting {
                id: row.get("id")?,
                start_time: row.get("start_time")?,
                end_time: row.get("end_time")?,
                description: row.get("description")?,
                priority: row.get("priority")?,
                is_repeating: int_to_bool("meetings.is_repeating", row.get("is_repeating")?)?,
                repeat_interval: row.get("repeat_interval")?,
                diary_entries: load_diary_entries(self.conn, meeting_seq)?,
                completed: int_to_bool("meetings.completed", row.get("completed")?)?,
            });
        }
        Ok(meetings)
    }

    fn remove_meeting(&self, user_id: &UserId, meeting_id: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM meetings WHERE user_id = ?1 AND id = ?2;",
            params![user_id.as_str(), meeting_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(meeting_id.to_string()));
        }

        Ok(())
    }

    fn mark_complete(&self, user_id: &UserId, meeting_id: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE meetings SET completed = 1 WHERE user_id = ?1 AND id = ?2;",
            params![user_id.as_str(), meeting_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(meeting_id.to_string()));
        }

        Ok(())
    }
}

fn load_diary_entries(conn: &Connection, meeting_seq: i64) -> RepoResult<Vec<Activity>> {
    let mut stmt = conn.prepare(
        "SELECT id, start_time, end_time, description, stress_level
         FROM meeting_diary_entries
         WHERE meeting_seq = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([meeting_seq])?;
    let mut entries = Vec::new();
    while let Some(row) = rows.next()? {
        entries.push(parse_activity_row(row)?);
    }
    Ok(entries)
}

fn meeting_exists_in_tx(
    tx: &Transaction<'_>,
    user_id: &UserId,
    meeting_id: &str,
) -> RepoResult<bool> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM meetings
            WHERE user_id = ?1 AND id = ?2
        );",
        params![user_id.as_str(), meeting_id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
