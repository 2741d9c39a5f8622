use std::collections::HashSet;
use todoboard_core::{Action, Age, Draft, Record, RecordStore};

fn seed() -> RecordStore {
    RecordStore::seeded()
}

#[test]
fn seed_contains_three_fixed_records() {
    let store = seed();

    assert_eq!(
        store.records(),
        &[
            Record::new(1, "Ali", Age::Years(12)).with_complete(true),
            Record::new(4, "Maga", Age::Years(15)),
            Record::new(5, "Gapizuer", Age::Years(17)),
        ]
    );
}

#[test]
fn add_appends_incomplete_record_with_fresh_id() {
    let store = seed();

    let next = store.apply(&Action::Add {
        draft: Draft::new("Tom", "9"),
    });

    assert_eq!(next.len(), 4);
    let added = next.records().last().unwrap();
    assert_eq!(added.name, "Tom");
    assert_eq!(added.age, Age::Years(9));
    assert!(!added.complete);
    assert!(![1, 4, 5].contains(&added.id));
    assert_eq!(&next.records()[..3], store.records());
}

#[test]
fn add_keeps_non_numeric_age_as_nan() {
    let next = seed().add(&Draft::new("Tom", "nine"));
    assert_eq!(next.records().last().unwrap().age, Age::NotANumber);
}

#[test]
fn repeated_adds_never_collide() {
    let mut store = seed();
    for index in 0..50 {
        store = store.apply(&Action::Add {
            draft: Draft::new(format!("item {index}"), index.to_string()),
        });
    }
    // Interleave removals so the counter must skip freed ids.
    store = store.remove(6).remove(20);
    for index in 0..10 {
        store = store.add(&Draft::new(format!("late {index}"), "1"));
    }

    let ids = store
        .records()
        .iter()
        .map(|record| record.id)
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), store.len());
    assert_eq!(store.len(), 3 + 50 - 2 + 10);
}

#[test]
fn toggle_flips_only_matching_record() {
    let store = seed();

    let next = store.apply(&Action::ToggleComplete { id: 4 });

    assert!(next.get(4).unwrap().complete);
    assert_eq!(next.get(1), store.get(1));
    assert_eq!(next.get(5), store.get(5));
}

#[test]
fn toggle_twice_restores_original() {
    let store = seed();

    let twice = store
        .apply(&Action::ToggleComplete { id: 1 })
        .apply(&Action::ToggleComplete { id: 1 });

    assert_eq!(twice, store);
}

#[test]
fn edit_replaces_name_and_age_only() {
    let store = seed().toggle_complete(5);

    let next = store.apply(&Action::Edit {
        id: 5,
        draft: Draft::new("Gapi", "18"),
    });

    let expected = Record::new(5, "Gapi", Age::Years(18)).with_complete(true);
    assert_eq!(next.records()[2], expected);
    assert_eq!(&next.records()[..2], &store.records()[..2]);
    assert_eq!(next.next_id(), store.next_id());
}

#[test]
fn edit_scenario_on_seed() {
    let next = seed().edit(5, &Draft::new("Gapi", "18"));
    assert_eq!(next.get(5), Some(&Record::new(5, "Gapi", Age::Years(18))));
}

#[test]
fn remove_existing_drops_one_record() {
    let next = seed().apply(&Action::Remove { id: 1 });

    assert_eq!(next.len(), 2);
    assert!(next.get(1).is_none());
    assert_eq!(
        next.records().iter().map(|record| record.id).collect::<Vec<_>>(),
        vec![4, 5]
    );
}

#[test]
fn unknown_ids_leave_store_equal() {
    let store = seed();

    for action in [
        Action::Edit {
            id: 42,
            draft: Draft::new("x", "1"),
        },
        Action::Remove { id: 42 },
        Action::ToggleComplete { id: 42 },
        Action::Unknown,
    ] {
        assert_eq!(store.apply(&action), store, "action {action:?}");
    }
}

#[test]
fn apply_does_not_mutate_input_snapshot() {
    let store = seed();
    let snapshot = store.clone();

    let _ = store.apply(&Action::Remove { id: 4 });
    let _ = store.apply(&Action::Add {
        draft: Draft::new("Tom", "9"),
    });

    assert_eq!(store, snapshot);
}

#[test]
fn empty_store_starts_ids_at_one() {
    let next = RecordStore::empty().add(&Draft::new("first", "1"));
    assert_eq!(next.records()[0].id, 1);
}
