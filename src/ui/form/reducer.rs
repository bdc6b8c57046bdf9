use crate::model::{validate, validate_replacement};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormMode, FormSnapshot, FormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (FormState::Loading, FormIntent::Loaded { book }) => {
                FormState::Editing(FormSnapshot::editing(book))
            }
            (FormState::Loading, FormIntent::LoadFailed { message }) => {
                FormState::Failed { error: message }
            }
            (FormState::Editing(snapshot), intent) => {
                FormState::Editing(reduce_snapshot(snapshot, intent))
            }
            (other, _) => other,
        }
    }
}

fn reduce_snapshot(mut snapshot: FormSnapshot, intent: FormIntent) -> FormSnapshot {
    // The form is disabled while a request is in flight
    if snapshot.submitting && !matches!(intent, FormIntent::SubmitFailed { .. }) {
        return snapshot;
    }
    // A notice must be dismissed before editing resumes
    if snapshot.notice.is_some() && !matches!(intent, FormIntent::DismissNotice) {
        return snapshot;
    }

    match intent {
        FormIntent::Loaded { .. } | FormIntent::LoadFailed { .. } => snapshot,

        FormIntent::Input { ch } => {
            snapshot.draft.push_char(snapshot.focused, ch);
            snapshot
        }
        FormIntent::Backspace => {
            snapshot.draft.pop_char(snapshot.focused);
            snapshot
        }
        FormIntent::FocusNext => {
            snapshot.focused = snapshot.focused.next();
            snapshot
        }
        FormIntent::FocusPrev => {
            snapshot.focused = snapshot.focused.prev();
            snapshot
        }

        FormIntent::Submit => {
            let result = match &snapshot.mode {
                FormMode::Create => validate(&snapshot.draft).map(|_| ()),
                FormMode::Edit { original } => {
                    validate_replacement(&snapshot.draft, original).map(|_| ())
                }
            };
            match result {
                Ok(()) => {
                    snapshot.errors.clear();
                    snapshot.submitting = true;
                }
                Err(errors) => {
                    if let Some(first) = errors.keys().next() {
                        snapshot.focused = *first;
                    }
                    snapshot.errors = errors;
                }
            }
            snapshot
        }
        FormIntent::SubmitFailed { message } => {
            snapshot.submitting = false;
            snapshot.notice = Some(message);
            snapshot
        }

        FormIntent::DismissNotice => {
            snapshot.notice = None;
            snapshot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    fn type_text(mut state: FormState, text: &str) -> FormState {
        for ch in text.chars() {
            state = FormReducer::reduce(state, FormIntent::Input { ch });
        }
        state
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let state = type_text(FormState::create(), "Dune");
        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        let state = type_text(state, "Frank");
        let state = FormReducer::reduce(state, FormIntent::Backspace);

        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.draft.get(Field::Title), "Dune");
        assert_eq!(snapshot.draft.get(Field::Author), "Fran");
        assert_eq!(snapshot.focused, Field::Author);
    }

    #[test]
    fn invalid_submit_focuses_first_error() {
        let state = FormReducer::reduce(FormState::create(), FormIntent::FocusPrev);
        let state = FormReducer::reduce(state, FormIntent::Submit);
        let snapshot = state.snapshot().unwrap();
        assert!(!snapshot.submitting);
        assert_eq!(snapshot.focused, Field::Title);
        assert_eq!(snapshot.errors.len(), 4);
    }

    #[test]
    fn loaded_outside_loading_is_ignored() {
        let state = FormReducer::reduce(
            FormState::Failed {
                error: "Book not found".into(),
            },
            FormIntent::Input { ch: 'x' },
        );
        assert!(matches!(state, FormState::Failed { .. }));
    }
}
