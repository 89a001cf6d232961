use chrono::NaiveDate;
use roster_core::validation::conflicts::{EMAIL_CONFLICT_MESSAGE, ROLL_CONFLICT_MESSAGE};
use roster_core::validation::rules::{NAME_MIN_MESSAGE, ROLL_MIN_MESSAGE};
use roster_core::{
    form_reducer, submit_form, FormEvent, FormState, FormStatus, Student, StudentField,
    StudentInput, StudentState, StudentStore, SubmitOutcome,
};
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn alice() -> Student {
    Student::with_id(
        Uuid::parse_str("aaaaaaaa-0000-4000-8000-000000000001").unwrap(),
        StudentInput {
            roll: 1,
            name: "Alice Smith".to_string(),
            dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            email: Some("alice@example.com".to_string()),
            phone: None,
            address: None,
        },
    )
}

fn fill(mut form: FormState, values: &[(StudentField, &str)]) -> FormState {
    for (field, value) in values {
        form = form_reducer(
            form,
            FormEvent::Change {
                field: *field,
                value: value.to_string(),
            },
            today(),
        );
    }
    form
}

#[test]
fn duplicate_roll_is_rejected_and_store_is_unchanged() {
    let mut store = StudentStore::new(StudentState::new(vec![alice()]));
    let mut form = fill(
        FormState::create(),
        &[
            (StudentField::Roll, "1"),
            (StudentField::Name, "Another Person"),
            (StudentField::Dob, "2001-02-03"),
        ],
    );

    let outcome = submit_form(&mut form, &mut store, today());

    match outcome {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.get(StudentField::Roll), Some(ROLL_CONFLICT_MESSAGE));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(store.select_all().len(), 1);
    assert_eq!(form.status, FormStatus::Invalid);
    assert_eq!(
        form.visible_error(StudentField::Roll),
        Some(ROLL_CONFLICT_MESSAGE)
    );
}

#[test]
fn valid_new_record_is_added_with_fresh_id() {
    let mut store = StudentStore::new(StudentState::new(vec![alice()]));
    let mut form = fill(
        FormState::create(),
        &[
            (StudentField::Roll, "2"),
            (StudentField::Name, "Bob Johnson"),
            (StudentField::Dob, "1999-05-05"),
        ],
    );

    let outcome = submit_form(&mut form, &mut store, today());

    let id = match outcome {
        SubmitOutcome::Created(id) => id,
        other => panic!("expected creation, got {other:?}"),
    };
    assert_ne!(id, alice().id);
    assert_eq!(store.select_all().len(), 2);
    let bob = store.find(id).unwrap();
    assert_eq!(bob.roll, 2);
    assert_eq!(bob.name, "Bob Johnson");
    assert_eq!(form.status, FormStatus::Submitted(id));
    assert!(form.errors.is_empty());
}

#[test]
fn field_errors_and_conflicts_are_reported_together() {
    let mut store = StudentStore::new(StudentState::new(vec![alice()]));
    let mut form = fill(
        FormState::create(),
        &[
            (StudentField::Roll, "0"),
            (StudentField::Name, "Bob"),
            (StudentField::Dob, "1999-05-05"),
            (StudentField::Email, "alice@example.com"),
        ],
    );

    let SubmitOutcome::Rejected(errors) = submit_form(&mut form, &mut store, today()) else {
        panic!("expected rejection");
    };

    assert_eq!(errors.get(StudentField::Roll), Some(ROLL_MIN_MESSAGE));
    assert_eq!(errors.get(StudentField::Name), Some(NAME_MIN_MESSAGE));
    assert_eq!(errors.get(StudentField::Email), Some(EMAIL_CONFLICT_MESSAGE));
    assert_eq!(store.select_all().len(), 1);
}

#[test]
fn update_keeps_own_roll_and_email_and_position() {
    let bob = Student::new(StudentInput {
        roll: 2,
        name: "Bob Johnson".to_string(),
        dob: NaiveDate::from_ymd_opt(1999, 5, 5).unwrap(),
        email: None,
        phone: None,
        address: None,
    });
    let mut store = StudentStore::new(StudentState::new(vec![alice(), bob.clone()]));

    let form = form_reducer(FormState::create(), FormEvent::Load(alice()), today());
    let mut form = fill(form, &[(StudentField::Name, "Alice Cooper")]);

    let outcome = submit_form(&mut form, &mut store, today());

    assert_eq!(
        outcome,
        SubmitOutcome::Updated {
            id: alice().id,
            applied: true
        }
    );
    let students = store.select_all();
    assert_eq!(students[0].id, alice().id);
    assert_eq!(students[0].name, "Alice Cooper");
    assert_eq!(students[0].email.as_deref(), Some("alice@example.com"));
    assert_eq!(students[1], bob);
}

#[test]
fn update_cannot_take_another_records_roll() {
    let bob = Student::new(StudentInput {
        roll: 2,
        name: "Bob Johnson".to_string(),
        dob: NaiveDate::from_ymd_opt(1999, 5, 5).unwrap(),
        email: None,
        phone: None,
        address: None,
    });
    let mut store = StudentStore::new(StudentState::new(vec![alice(), bob.clone()]));
    let mut form = fill(FormState::edit(&bob), &[(StudentField::Roll, "1")]);

    let outcome = submit_form(&mut form, &mut store, today());

    assert!(!outcome.is_accepted());
    assert_eq!(store.find(bob.id), Some(&bob));
}

#[test]
fn update_of_deleted_record_is_a_noop() {
    let mut store = StudentStore::new(StudentState::new(vec![alice()]));
    let mut form = FormState::edit(&alice());
    store.delete(alice().id);

    let outcome = submit_form(&mut form, &mut store, today());

    assert_eq!(
        outcome,
        SubmitOutcome::Updated {
            id: alice().id,
            applied: false
        }
    );
    assert!(store.select_all().is_empty());
}
