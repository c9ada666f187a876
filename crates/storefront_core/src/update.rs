use crate::effect::{FormEffect, ListEffect};
use crate::msg::{FormMsg, ListMsg};
use crate::state::{FormMode, FormState, ListState};

/// Pure list update: applies a message to state and returns any effects.
pub fn update_list(mut state: ListState, msg: ListMsg) -> (ListState, Vec<ListEffect>) {
    let effects = match msg {
        ListMsg::RefreshRequested => {
            // One outstanding fetch at a time.
            if state.is_loading() {
                Vec::new()
            } else {
                state.begin_load();
                vec![ListEffect::LoadCollection]
            }
        }
        ListMsg::CollectionLoaded(records) => {
            state.apply_loaded(records);
            Vec::new()
        }
        ListMsg::LoadFailed(message) => {
            state.apply_load_failure(message);
            Vec::new()
        }
        ListMsg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        ListMsg::CreateRequested => vec![ListEffect::Navigate {
            path: state.schema().new_path.to_string(),
        }],
        ListMsg::EditRequested(id) => vec![ListEffect::Navigate {
            path: state.schema().edit_path(&id),
        }],
        ListMsg::DeletionRequested(record) => {
            state.request_deletion(record);
            Vec::new()
        }
        ListMsg::DeletionCancelled => {
            // Idempotent: cancelling with nothing pending changes nothing.
            state.clear_pending_deletion();
            Vec::new()
        }
        ListMsg::DeletionConfirmed => match state.begin_deletion() {
            Some(id) => vec![ListEffect::DeleteRecord { id }],
            None => Vec::new(),
        },
        ListMsg::DeletionSucceeded(id) => {
            state.apply_deletion(&id);
            Vec::new()
        }
        ListMsg::DeletionFailed(message) => {
            state.apply_deletion_failure(message);
            Vec::new()
        }
    };

    (state, effects)
}

/// Pure form update.
pub fn update_form(mut state: FormState, msg: FormMsg) -> (FormState, Vec<FormEffect>) {
    let effects = match msg {
        FormMsg::Initialized => match state.mode() {
            FormMode::Edit(id) => {
                let id = id.clone();
                state.begin_load();
                vec![FormEffect::LoadRecord { id }]
            }
            FormMode::Create => Vec::new(),
        },
        FormMsg::FieldEdited { name, value } => {
            state.edit_field(&name, value);
            Vec::new()
        }
        FormMsg::RecordLoaded(record) => {
            state.apply_record(&record);
            Vec::new()
        }
        FormMsg::RecordLoadFailed(message) => {
            state.apply_load_failure(message);
            Vec::new()
        }
        FormMsg::SubmitRequested => {
            // No-op while a submit is in flight, while the edit-mode record
            // is still loading, or after that load failed.
            if state.is_submitting() || state.is_loading() || state.load_failed() {
                return (state, Vec::new());
            }
            match state.schema().validate(state.draft()) {
                Err(error) => {
                    state.apply_submit_failure(error.to_string());
                    Vec::new()
                }
                Ok(data) => {
                    state.begin_submit();
                    match state.mode() {
                        FormMode::Create => vec![FormEffect::CreateRecord { data }],
                        FormMode::Edit(id) => vec![FormEffect::UpdateRecord {
                            id: id.clone(),
                            data,
                        }],
                    }
                }
            }
        }
        FormMsg::SubmitSucceeded(record) => {
            state.apply_submit_success(&record);
            if state.mark_return_scheduled() {
                vec![FormEffect::ScheduleReturn]
            } else {
                Vec::new()
            }
        }
        FormMsg::SubmitFailed(message) => {
            state.apply_submit_failure(message);
            Vec::new()
        }
    };

    (state, effects)
}
