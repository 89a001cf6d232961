//! Submit path: full validation, then exactly one store mutation.

use crate::form::state::{FormMode, FormState, FormStatus};
use crate::model::student::{Student, StudentId};
use crate::store::student_store::StudentStore;
use crate::validation::{validate_submission, FieldErrors};
use chrono::NaiveDate;
use log::{info, warn};
use uuid::Uuid;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended with this id.
    Created(StudentId),
    /// The record bound to this id was replaced.
    ///
    /// `applied` is `false` when the id no longer exists; the store treats
    /// that as a no-op.
    Updated { id: StudentId, applied: bool },
    /// Validation or a uniqueness conflict blocked the mutation.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Validates `form` against `store` and dispatches add or update.
///
/// # Side effects
/// - Marks every field touched.
/// - On rejection, stores the errors in `form` and sets `Invalid`.
/// - On acceptance, clears errors and sets `Submitted`.
pub fn submit_form(
    form: &mut FormState,
    store: &mut StudentStore,
    today: NaiveDate,
) -> SubmitOutcome {
    form.touch_all();

    let editing = form.editing();
    let input = match validate_submission(&form.values, store.select_all(), editing, today) {
        Ok(input) => input,
        Err(errors) => {
            let failed_fields = errors
                .iter()
                .map(|(field, _)| field.as_str())
                .collect::<Vec<_>>()
                .join(",");
            warn!(
                "event=form_submit module=form status=rejected mode={} fields={}",
                mode_name(form.mode),
                failed_fields
            );
            form.errors = errors.clone();
            form.status = FormStatus::Invalid;
            return SubmitOutcome::Rejected(errors);
        }
    };

    let (id, outcome) = match form.mode {
        FormMode::Create => {
            let id = fresh_id(store);
            store.add(Student::with_id(id, input));
            (id, SubmitOutcome::Created(id))
        }
        FormMode::Update(id) => {
            let applied = store.update(id, Student::with_id(id, input));
            if !applied {
                warn!("event=form_submit module=form status=noop mode=update reason=missing_id");
            }
            (id, SubmitOutcome::Updated { id, applied })
        }
    };
    info!(
        "event=form_submit module=form status=ok mode={} count={}",
        mode_name(form.mode),
        store.select_all().len()
    );
    form.errors = FieldErrors::default();
    form.status = FormStatus::Submitted(id);
    outcome
}

/// Draws a v4 id not already bound to a record in `store`.
fn fresh_id(store: &StudentStore) -> StudentId {
    fresh_id_with(store, Uuid::new_v4)
}

fn fresh_id_with(store: &StudentStore, mut draw: impl FnMut() -> StudentId) -> StudentId {
    loop {
        let id = draw();
        if store.find(id).is_none() {
            return id;
        }
    }
}

fn mode_name(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Create => "create",
        FormMode::Update(_) => "update",
    }
}
