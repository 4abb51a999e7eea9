//! Focus block log contract and SQLite implementation.
//!
//! # Invariants
//! - Blocks are appended with their status and read back unchanged.
//! - Reads return entries in append order (`seq ASC`).

use crate::model::focus_block::{FocusBlock, FocusBlockStatus};
use crate::model::identity::UserId;
use crate::repo::{ensure_tables, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the per-user focus block log.
pub trait FocusBlockRepository {
    fn append_focus_block(&self, user_id: &UserId, block: &FocusBlock) -> RepoResult<()>;
    fn list_focus_blocks(&self, user_id: &UserId) -> RepoResult<Vec<FocusBlock>>;
}

/// SQLite-backed focus block repository.
pub struct SqliteFocusBlockRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFocusBlockRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["focus_blocks"])?;
        Ok(Self { conn })
    }
}

impl FocusBlockRepository for SqliteFocusBlockRepository<'_> {
    fn append_focus_block(&self, user_id: &UserId, block: &FocusBlock) -> RepoResult<()> {
        block.validate()?;

        self.conn.execute(
            "INSERT INTO focus_blocks (
                user_id,
                id,
                start_time,
                end_time,
                description,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                user_id.as_str(),
                block.id.as_str(),
                block.start_time,
                block.end_time,
                block.description.as_str(),
                status_to_db(block.status),
            ],
        )?;

        Ok(())
    }

    fn list_focus_blocks(&self, user_id: &UserId) -> RepoResult<Vec<FocusBlock>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, start_time, end_time, description, status
             FROM focus_blocks
             WHERE user_id = ?1
             ORDER BY seq ASC;",
        )?;
        let mut rows = stmt.query([user_id.as_str()])?;
        let mut blocks = Vec::new();
        while let Some(row) = rows.next()? {
            blocks.push(parse_focus_block_row(row)?);
        }
        Ok(blocks)
    }
}

fn parse_focus_block_row(row: &Row<'_>) -> RepoResult<FocusBlock> {
    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid focus block status `{status_text}` in focus_blocks.status"
        ))
    })?;

    Ok(FocusBlock {
        id: row.get("id")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        description: row.get("description")?,
        status,
    })
}

fn status_to_db(status: FocusBlockStatus) -> &'static str {
    match status {
        FocusBlockStatus::Suggested => "suggested",
        FocusBlockStatus::Accepted => "accepted",
        FocusBlockStatus::Rejected => "rejected",
        FocusBlockStatus::Modified => "modified",
    }
}

fn parse_status(value: &str) -> Option<FocusBlockStatus> {
    match value {
        "suggested" => Some(FocusBlockStatus::Suggested),
        "accepted" => Some(FocusBlockStatus::Accepted),
        "rejected" => Some(FocusBlockStatus::Rejected),
        "modified" => Some(FocusBlockStatus::Modified),
        _ => None,
    }
}
