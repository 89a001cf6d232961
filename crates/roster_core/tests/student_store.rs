use chrono::NaiveDate;
use roster_core::{Student, StudentInput, StudentState, StudentStore};
use std::sync::Arc;
use uuid::Uuid;

fn student(roll: u32, name: &str) -> Student {
    Student::new(StudentInput {
        roll,
        name: name.to_string(),
        dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        email: None,
        phone: None,
        address: None,
    })
}

fn seeded_store() -> (StudentStore, Vec<Student>) {
    let students = vec![
        student(1, "Alice Smith"),
        student(2, "Bob Johnson"),
        student(3, "Carol White"),
    ];
    (StudentStore::new(StudentState::new(students.clone())), students)
}

#[test]
fn add_appends_exactly_one_record() {
    let (mut store, _) = seeded_store();
    let added = student(4, "Dan Brown");

    assert!(store.add(added.clone()));
    assert_eq!(store.select_all().len(), 4);
    assert_eq!(store.select_all().last(), Some(&added));
    assert_eq!(store.revision(), 1);
}

#[test]
fn add_does_not_check_uniqueness() {
    let mut store = StudentStore::default();
    store.add(student(1, "Alice Smith"));
    store.add(student(1, "Alice Clone"));

    assert_eq!(store.select_all().len(), 2);
}

#[test]
fn update_replaces_in_place_and_leaves_others_untouched() {
    let (mut store, original) = seeded_store();
    let target = original[1].id;
    let mut replacement = student(20, "Robert Johnson");
    replacement.id = target;

    assert!(store.update(target, replacement.clone()));

    let after = store.select_all();
    assert_eq!(after.len(), 3);
    assert_eq!(after[1], replacement);
    assert_eq!(after[0], original[0]);
    assert_eq!(after[2], original[2]);
}

#[test]
fn update_of_missing_id_is_a_noop() {
    let (mut store, original) = seeded_store();
    let before = store.state();

    assert!(!store.update(Uuid::new_v4(), student(9, "Nobody Here")));
    assert_eq!(store.select_all(), original.as_slice());
    assert!(Arc::ptr_eq(&before, &store.state()));
    assert_eq!(store.revision(), 0);
}

#[test]
fn delete_is_idempotent() {
    let (mut store, original) = seeded_store();
    let target = original[0].id;

    assert!(store.delete(target));
    let after_first = store.state();
    assert_eq!(after_first.students.len(), 2);
    assert!(store.find(target).is_none());

    assert!(!store.delete(target));
    assert!(Arc::ptr_eq(&after_first, &store.state()));
    assert_eq!(store.revision(), 1);
}

#[test]
fn mutations_publish_new_state_values() {
    let (mut store, _) = seeded_store();
    let observed = store.state();

    store.add(student(4, "Dan Brown"));

    assert!(!Arc::ptr_eq(&observed, &store.state()));
    assert_eq!(observed.students.len(), 3);
}
