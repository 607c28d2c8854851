use std::collections::BTreeSet;

use tempfile::TempDir;

use super::PlannerStore;
use crate::{
    error::WeekplanError,
    models::Weekday,
    params::{AddTask, CleanScope, UpdateTaskRequest},
};

fn open_store() -> (TempDir, PlannerStore) {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let store = PlannerStore::open(dir.path().join("planner.json")).expect("Failed to open store");
    (dir, store)
}

fn add(weekday: Weekday, time: &str, name: &str) -> AddTask {
    AddTask {
        weekday,
        time: time.to_string(),
        name: name.to_string(),
        priority: None,
        description: None,
    }
}

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn add_task_inserts_in_chronological_position() {
    let (_dir, mut store) = open_store();

    store.add_task(&add(Weekday::Monday, "12:00", "Lunch")).unwrap();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();
    store.add_task(&add(Weekday::Monday, "09:30", "Mail")).unwrap();

    assert_eq!(
        store.collect_sorted_times(Weekday::Monday),
        ["08:00", "09:30", "12:00"]
    );
}

#[test]
fn add_task_on_occupied_slot_fails_and_keeps_existing() {
    let (_dir, mut store) = open_store();

    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();
    let err = store
        .add_task(&add(Weekday::Monday, "08:00", "Swim"))
        .unwrap_err();

    assert!(matches!(err, WeekplanError::SlotOccupied { .. }));
    let existing = store.get_task(Weekday::Monday, "08:00").unwrap().unwrap();
    assert_eq!(existing.name(), "Run");
}

#[test]
fn add_task_validates_fields() {
    let (_dir, mut store) = open_store();

    assert!(matches!(
        store.add_task(&add(Weekday::Monday, "8am", "Run")).unwrap_err(),
        WeekplanError::InvalidTime { .. }
    ));

    let mut bad_priority = add(Weekday::Monday, "08:00", "Run");
    bad_priority.priority = Some(0);
    assert!(matches!(
        store.add_task(&bad_priority).unwrap_err(),
        WeekplanError::InvalidPriority { .. }
    ));

    assert!(matches!(
        store.add_task(&add(Weekday::Monday, "08:00", "")).unwrap_err(),
        WeekplanError::InvalidName { .. }
    ));
}

#[test]
fn edit_task_applies_partial_updates() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();

    let updated = store
        .edit_task(
            Weekday::Monday,
            "08:00",
            &UpdateTaskRequest {
                done: Some(true),
                description: Some("5k".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(updated.is_done());
    assert_eq!(updated.description(), "5k");
    assert_eq!(updated.name(), "Run");
    assert_eq!(updated.time().to_string(), "08:00");
}

#[test]
fn edit_task_moves_between_slots_atomically() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();

    let moved = store
        .edit_task(
            Weekday::Monday,
            "08:00",
            &UpdateTaskRequest {
                time: Some("09:00".to_string()),
                weekday: Some(Weekday::Friday),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(moved.weekday(), Weekday::Friday);
    assert!(store.get_task(Weekday::Monday, "08:00").unwrap().is_none());
    assert_eq!(
        store.get_task(Weekday::Friday, "09:00").unwrap().unwrap().name(),
        "Run"
    );
}

#[test]
fn edit_task_failed_move_leaves_original_untouched() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();
    store.add_task(&add(Weekday::Monday, "09:00", "Swim")).unwrap();

    let err = store
        .edit_task(
            Weekday::Monday,
            "08:00",
            &UpdateTaskRequest {
                time: Some("09:00".to_string()),
                done: Some(true),
                ..Default::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, WeekplanError::SlotOccupied { .. }));
    let original = store.get_task(Weekday::Monday, "08:00").unwrap().unwrap();
    assert_eq!(original.name(), "Run");
    assert!(!original.is_done());
}

#[test]
fn edit_task_on_empty_slot_fails() {
    let (_dir, mut store) = open_store();
    let err = store
        .edit_task(Weekday::Monday, "08:00", &UpdateTaskRequest::default())
        .unwrap_err();
    assert!(matches!(err, WeekplanError::SlotNotFound { .. }));
}

#[test]
fn delete_task_is_not_idempotent() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();

    let removed = store.delete_task(Weekday::Monday, "08:00").unwrap();
    assert_eq!(removed.name(), "Run");

    let err = store.delete_task(Weekday::Monday, "08:00").unwrap_err();
    assert!(matches!(err, WeekplanError::SlotNotFound { .. }));
}

#[test]
fn clean_removes_orphans_in_scope() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();
    store.add_task(&add(Weekday::Monday, "09:00", "Swim")).unwrap();
    store.add_task(&add(Weekday::Tuesday, "09:00", "Swim")).unwrap();

    let removed = store
        .clean(&names(&["Run"]), CleanScope::Day(Weekday::Monday))
        .unwrap();

    assert_eq!(removed, 1);
    assert_eq!(store.collect_sorted_times(Weekday::Monday), ["08:00"]);
    // Tuesday is out of scope, its Swim instance survives.
    assert_eq!(store.collect_sorted_times(Weekday::Tuesday), ["09:00"]);
}

#[test]
fn clean_is_idempotent() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();
    store.add_task(&add(Weekday::Wednesday, "09:00", "Swim")).unwrap();

    let valid = names(&["Run"]);
    assert_eq!(store.clean(&valid, CleanScope::Week).unwrap(), 1);
    assert_eq!(store.clean(&valid, CleanScope::Week).unwrap(), 0);
}

#[test]
fn count_points_tracks_done_transitions() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();
    store.add_task(&add(Weekday::Friday, "18:00", "Swim")).unwrap();
    assert_eq!(store.count_points(), 0);

    let mark = |done| UpdateTaskRequest {
        done: Some(done),
        ..Default::default()
    };

    store.edit_task(Weekday::Monday, "08:00", &mark(true)).unwrap();
    assert_eq!(store.count_points(), 1);

    store.edit_task(Weekday::Friday, "18:00", &mark(true)).unwrap();
    assert_eq!(store.count_points(), 2);

    store.edit_task(Weekday::Monday, "08:00", &mark(false)).unwrap();
    assert_eq!(store.count_points(), 1);
}

#[test]
fn week_times_merge_across_days() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Friday, "18:00", "Swim")).unwrap();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();
    store.add_task(&add(Weekday::Wednesday, "08:00", "Run")).unwrap();

    assert_eq!(store.collect_week_times(), ["08:00", "18:00"]);
}

#[test]
fn per_day_counts() {
    let (_dir, mut store) = open_store();
    store.add_task(&add(Weekday::Monday, "08:00", "Run")).unwrap();
    store.add_task(&add(Weekday::Monday, "09:00", "Swim")).unwrap();
    store
        .edit_task(
            Weekday::Monday,
            "08:00",
            &UpdateTaskRequest {
                done: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(store.count_scheduled_for(Weekday::Monday), 2);
    assert_eq!(store.count_points_for(Weekday::Monday), 1);
    assert_eq!(store.count_scheduled_for(Weekday::Sunday), 0);
}
