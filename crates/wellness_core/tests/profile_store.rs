use rusqlite::Connection;
use wellness_core::db::open_db_in_memory;
use wellness_core::repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
use wellness_core::{
    time_of_day, DietPreference, Goal, ModelValidationError, RepoError, UserId, UserPreferences,
    UserProfile,
};

fn alice() -> UserId {
    UserId::parse("alice").unwrap()
}

fn sample_profile(user_id: UserId) -> UserProfile {
    UserProfile::new(
        user_id,
        UserPreferences {
            typical_meeting_load: 4,
            sleep_time: time_of_day(23, 0).unwrap(),
            wake_time: time_of_day(7, 0).unwrap(),
            work_hours: (time_of_day(9, 0).unwrap(), time_of_day(17, 30).unwrap()),
            diet_preference: DietPreference::Vegetarian,
            caffeine_habits: "two coffees before noon".to_string(),
            goals: vec![Goal::BetterSleep],
        },
    )
}

#[test]
fn get_profile_is_absent_before_first_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::try_new(&conn).unwrap();

    assert!(repo.get_profile(&alice()).unwrap().is_none());
}

#[test]
fn upsert_then_get_returns_profile_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::try_new(&conn).unwrap();

    let mut profile = sample_profile(alice());
    profile.last_calendar_sync = Some(1_700_000_000_000_000_000);
    profile.weekly_insights = vec![
        "Late meetings on Tuesday".to_string(),
        "Fewer breaks on busy days".to_string(),
    ];
    profile.content_preferences.use_ai = true;
    profile.preferences.goals = vec![Goal::LessStress, Goal::BetterFocus];
    repo.upsert_profile(&profile).unwrap();

    let loaded = repo.get_profile(&alice()).unwrap().unwrap();
    assert_eq!(loaded, profile);
}

#[test]
fn upsert_replaces_profile_wholesale() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::try_new(&conn).unwrap();

    let mut first = sample_profile(alice());
    first.weekly_insights = vec!["old insight".to_string()];
    first.preferences.goals = vec![Goal::BetterSleep, Goal::LessStress];
    repo.upsert_profile(&first).unwrap();

    let mut second = sample_profile(alice());
    second.preferences.diet_preference = DietPreference::NonVegetarian;
    second.preferences.goals = vec![Goal::BetterFocus];
    repo.upsert_profile(&second).unwrap();

    let loaded = repo.get_profile(&alice()).unwrap().unwrap();
    assert_eq!(loaded, second);
    assert!(loaded.weekly_insights.is_empty());
    assert_eq!(count_rows(&conn, "user_profiles"), 1);
    assert_eq!(count_rows(&conn, "profile_goals"), 1);
}

#[test]
fn profiles_are_isolated_per_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::try_new(&conn).unwrap();
    let bob = UserId::parse("bob").unwrap();

    repo.upsert_profile(&sample_profile(alice())).unwrap();

    assert!(repo.get_profile(&bob).unwrap().is_none());
    assert_eq!(
        repo.get_profile(&alice()).unwrap().unwrap().user_id,
        alice()
    );
}

#[test]
fn duplicate_goals_are_rejected_before_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::try_new(&conn).unwrap();

    let mut profile = sample_profile(alice());
    profile.preferences.goals = vec![Goal::BetterSleep, Goal::BetterSleep];

    let err = repo.upsert_profile(&profile).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ModelValidationError::DuplicateGoal(ref goal)) if goal == "betterSleep"
    ));
    assert_eq!(count_rows(&conn, "user_profiles"), 0);
}

#[test]
fn corrupted_diet_value_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::try_new(&conn).unwrap();
    repo.upsert_profile(&sample_profile(alice())).unwrap();

    conn.execute(
        "UPDATE user_profiles SET diet_preference = 'carnivore' WHERE user_id = 'alice';",
        [],
    )
    .unwrap();

    let err = repo.get_profile(&alice()).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("carnivore")));
}

#[test]
fn try_new_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteProfileRepository::try_new(&conn)
        .err()
        .expect("unmigrated connection should be rejected");
    assert!(matches!(err, RepoError::MissingRequiredTable("user_profiles")));
}

fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
