use wellness_core::db::open_db_in_memory;
use wellness_core::repo::meeting_repo::{MeetingRepository, SqliteMeetingRepository};
use wellness_core::repo::RepoError;
use wellness_core::{Activity, Meeting, UserId};

const START: i64 = 1_700_000_000_000_000_000;
const HOUR: i64 = 3_600_000_000_000;

fn alice() -> UserId {
    UserId::parse("alice").unwrap()
}

#[test]
fn append_returns_id_and_list_preserves_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMeetingRepository::try_new(&conn).unwrap();

    let standup = Meeting::with_id("m1", START, START + HOUR, "standup");
    let generated = Meeting::new(START + HOUR, START + 2 * HOUR, "planning");

    assert_eq!(repo.append_meeting(&alice(), &standup).unwrap(), "m1");
    let generated_id = repo.append_meeting(&alice(), &generated).unwrap();
    assert_eq!(generated_id, generated.id);

    assert_eq!(repo.list_meetings(&alice()).unwrap(), vec![standup, generated]);
}

#[test]
fn optional_fields_and_diary_entries_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMeetingRepository::try_new(&conn).unwrap();

    let mut weekly = Meeting::with_id("weekly", START, START + HOUR, "weekly sync");
    weekly.priority = 2;
    weekly.is_repeating = true;
    weekly.repeat_interval = Some(7);
    weekly.diary_entries = vec![
        Activity::new("d-2", START + HOUR, START + HOUR, "felt rushed"),
        Activity::new("d-1", START, START, "prepared agenda"),
    ];
    repo.append_meeting(&alice(), &weekly).unwrap();

    let loaded = repo.list_meetings(&alice()).unwrap();
    assert_eq!(loaded, vec![weekly]);
    assert_eq!(loaded[0].diary_entries[0].id, "d-2");
}

#[test]
fn duplicate_meeting_id_is_rejected_per_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMeetingRepository::try_new(&conn).unwrap();
    let bob = UserId::parse("bob").unwrap();
    let meeting = Meeting::with_id("m1", START, START + HOUR, "standup");

    repo.append_meeting(&alice(), &meeting).unwrap();
    let err = repo.append_meeting(&alice(), &meeting).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateMeeting(id) if id == "m1"));

    repo.append_meeting(&bob, &meeting).unwrap();
    assert_eq!(repo.list_meetings(&alice()).unwrap().len(), 1);
    assert_eq!(repo.list_meetings(&bob).unwrap().len(), 1);
}

#[test]
fn remove_shrinks_log_by_one_and_does_not_resurrect() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMeetingRepository::try_new(&conn).unwrap();

    let mut with_diary = Meeting::with_id("m1", START, START + HOUR, "standup");
    with_diary.diary_entries = vec![Activity::new("d-1", START, START, "notes")];
    repo.append_meeting(&alice(), &with_diary).unwrap();
    repo.append_meeting(&alice(), &Meeting::with_id("m2", START, START, "retro"))
        .unwrap();

    repo.remove_meeting(&alice(), "m1").unwrap();
    repo.append_meeting(&alice(), &Meeting::with_id("m3", START, START, "1:1"))
        .unwrap();

    let ids: Vec<_> = repo
        .list_meetings(&alice())
        .unwrap()
        .into_iter()
        .map(|meeting| meeting.id)
        .collect();
    assert_eq!(ids, vec!["m2".to_string(), "m3".to_string()]);

    let orphaned: i64 = conn
        .query_row("SELECT COUNT(*) FROM meeting_diary_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(orphaned, 0);
}

#[test]
fn remove_and_complete_missing_id_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMeetingRepository::try_new(&conn).unwrap();

    let err = repo.remove_meeting(&alice(), "ghost").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "ghost"));

    let err = repo.mark_complete(&alice(), "ghost").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "ghost"));
}

#[test]
fn other_users_meetings_are_not_reachable_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMeetingRepository::try_new(&conn).unwrap();
    let bob = UserId::parse("bob").unwrap();
    repo.append_meeting(&alice(), &Meeting::with_id("m1", START, START, "standup"))
        .unwrap();

    assert!(matches!(
        repo.remove_meeting(&bob, "m1").unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert_eq!(repo.list_meetings(&alice()).unwrap().len(), 1);
}

#[test]
fn mark_complete_sets_flag_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMeetingRepository::try_new(&conn).unwrap();
    repo.append_meeting(&alice(), &Meeting::with_id("m1", START, START, "standup"))
        .unwrap();

    repo.mark_complete(&alice(), "m1").unwrap();
    repo.mark_complete(&alice(), "m1").unwrap();

    let meetings = repo.list_meetings(&alice()).unwrap();
    assert!(meetings[0].completed);
}
