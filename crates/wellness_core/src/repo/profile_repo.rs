//! Profile store contract and SQLite implementation.
//!
//! # Invariants
//! - One `user_profiles` row per user; writes replace it wholesale.
//! - Goals and insights are rewritten with the profile in one transaction
//!   and read back in their original order.

use crate::model::identity::UserId;
use crate::model::profile::{
    ContentPreferences, DietPreference, Goal, UserPreferences, UserProfile,
};
use crate::repo::{bool_to_int, ensure_tables, int_to_bool, RepoError, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for the per-user profile store.
pub trait ProfileRepository {
    /// Inserts or wholesale-replaces the profile keyed by `profile.user_id`.
    fn upsert_profile(&self, profile: &UserProfile) -> RepoResult<()>;
    /// Returns `None` when the user never wrote a profile.
    fn get_profile(&self, user_id: &UserId) -> RepoResult<Option<UserProfile>>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["user_profiles", "profile_goals", "profile_insights"])?;
        Ok(Self { conn })
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn upsert_profile(&self, profile: &UserProfile) -> RepoResult<()> {
        profile.validate()?;

        let user_id = profile.user_id.as_str();
        let prefs = &profile.preferences;
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO user_profiles (
                user_id,
                typical_meeting_load,
                sleep_time,
                wake_time,
                work_start,
                work_end,
                diet_preference,
                caffeine_habits,
                last_calendar_sync,
                avoid_certain_content,
                use_ai
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT (user_id) DO UPDATE SET
                typical_meeting_load = excluded.typical_meeting_load,
                sleep_time = excluded.sleep_time,
                wake_time = excluded.wake_time,
                work_start = excluded.work_start,
                work_end = excluded.work_end,
                diet_preference = excluded.diet_preference,
                caffeine_habits = excluded.caffeine_habits,
                last_calendar_sync = excluded.last_calendar_sync,
                avoid_certain_content = excluded.avoid_certain_content,
                use_ai = excluded.use_ai,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                user_id,
                prefs.typical_meeting_load,
                prefs.sleep_time,
                prefs.wake_time,
                prefs.work_hours.0,
                prefs.work_hours.1,
                diet_to_db(prefs.diet_preference),
                prefs.caffeine_habits.as_str(),
                profile.last_calendar_sync,
                bool_to_int(profile.content_preferences.avoid_certain_content),
                bool_to_int(profile.content_preferences.use_ai),
            ],
        )?;

        tx.execute("DELETE FROM profile_goals WHERE user_id = ?1;", [user_id])?;
        for (position, goal) in prefs.goals.iter().enumerate() {
            tx.execute(
                "INSERT INTO profile_goals (user_id, position, goal) VALUES (?1, ?2, ?3);",
                params![user_id, position as i64, goal_to_db(*goal)],
            )?;
        }

        tx.execute("DELETE FROM profile_insights WHERE user_id = ?1;", [user_id])?;
        for (position, insight) in profile.weekly_insights.iter().enumerate() {
            tx.execute(
                "INSERT INTO profile_insights (user_id, position, insight) VALUES (?1, ?2, ?3);",
                params![user_id, position as i64, insight.as_str()],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn get_profile(&self, user_id: &UserId) -> RepoResult<Option<UserProfile>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                typical_meeting_load,
                sleep_time,
                wake_time,
                work_start,
                work_end,
                diet_preference,
                caffeine_habits,
                last_calendar_sync,
                avoid_certain_content,
                use_ai
             FROM user_profiles
             WHERE user_id = ?1;",
        )?;

        let mut rows = stmt.query([user_id.as_str()])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let diet_text: String = row.get("diet_preference")?;
        let diet_preference = parse_diet(&diet_text).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid diet preference `{diet_text}` in user_profiles.diet_preference"
            ))
        })?;

        let preferences = UserPreferences {
            typical_meeting_load: row.get("typical_meeting_load")?,
            sleep_time: row.get("sleep_time")?,
            wake_time: row.get("wake_time")?,
            work_hours: (row.get("work_start")?, row.get("work_end")?),
            diet_preference,
            caffeine_habits: row.get("caffeine_habits")?,
            goals: load_goals(self.conn, user_id)?,
        };
        let content_preferences = ContentPreferences {
            avoid_certain_content: int_to_bool(
                "user_profiles.avoid_certain_content",
                row.get("avoid_certain_content")?,
            )?,
            use_ai: int_to_bool("user_profiles.use_ai", row.get("use_ai")?)?,
        };

        Ok(Some(UserProfile {
            user_id: user_id.clone(),
            preferences,
            last_calendar_sync: row.get("last_calendar_sync")?,
            weekly_insights: load_insights(self.conn, user_id)?,
            content_preferences,
        }))
    }
}

fn load_goals(conn: &Connection, user_id: &UserId) -> RepoResult<Vec<Goal>> {
    let mut stmt = conn.prepare(
        "SELECT goal FROM profile_goals WHERE user_id = ?1 ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([user_id.as_str()])?;
    let mut goals = Vec::new();
    while let Some(row) = rows.next()? {
        let value: String = row.get(0)?;
        let goal = parse_goal(&value).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid goal `{value}` in profile_goals.goal"))
        })?;
        goals.push(goal);
    }
    Ok(goals)
}

fn load_insights(conn: &Connection, user_id: &UserId) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT insight FROM profile_insights WHERE user_id = ?1 ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([user_id.as_str()])?;
    let mut insights = Vec::new();
    while let Some(row) = rows.next()? {
        insights.push(row.get(0)?);
    }
    Ok(insights)
}

fn diet_to_db(diet: DietPreference) -> &'static str {
    match diet {
        DietPreference::Vegetarian => "vegetarian",
        DietPreference::NonVegetarian => "non_vegetarian",
    }
}

fn parse_diet(value: &str) -> Option<DietPreference> {
    match value {
        "vegetarian" => Some(DietPreference::Vegetarian),
        "non_vegetarian" => Some(DietPreference::NonVegetarian),
        _ => None,
    }
}

fn goal_to_db(goal: Goal) -> &'static str {
    match goal {
        Goal::BetterFocus => "better_focus",
        Goal::BetterSleep => "better_sleep",
        Goal::LessStress => "less_stress",
    }
}

fn parse_goal(value: &str) -> Option<Goal> {
    match value {
        "better_focus" => Some(Goal::BetterFocus),
        "better_sleep" => Some(Goal::BetterSleep),
        "less_stress" => Some(Goal::LessStress),
        _ => None,
    }
}
