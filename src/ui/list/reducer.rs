use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::{remove_by_id, ListSnapshot, ListViewState};
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListViewState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Loaded { books } => ListViewState::Ready(ListSnapshot::new(books)),
            ListIntent::LoadFailed { message } => ListViewState::Failed { error: message },
            other => match state {
                ListViewState::Ready(snapshot) => {
                    ListViewState::Ready(reduce_snapshot(snapshot, other))
                }
                // Nothing to act on until the collection arrives
                other_state => other_state,
            },
        }
    }
}

fn reduce_snapshot(mut snapshot: ListSnapshot, intent: ListIntent) -> ListSnapshot {
    // While a prompt or notice is up, only its own intents apply
    if snapshot.confirm_delete.is_some()
        && !matches!(
            intent,
            ListIntent::ConfirmDelete
                | ListIntent::CancelDelete
                | ListIntent::Deleted { .. }
                | ListIntent::DeleteFailed { .. }
        )
    {
        return snapshot;
    }
    if snapshot.notice.is_some()
        && !matches!(
            intent,
            ListIntent::DismissNotice | ListIntent::Deleted { .. } | ListIntent::DeleteFailed { .. }
        )
    {
        return snapshot;
    }

    match intent {
        ListIntent::Loaded { .. } | ListIntent::LoadFailed { .. } => snapshot,

        ListIntent::FilterInput { ch } => {
            snapshot.filter.push(ch);
            reset_to_first_page(snapshot)
        }
        ListIntent::FilterBackspace => {
            snapshot.filter.pop();
            reset_to_first_page(snapshot)
        }
        ListIntent::ClearFilter => {
            snapshot.filter.clear();
            reset_to_first_page(snapshot)
        }

        ListIntent::NextPage => {
            if snapshot.page < snapshot.total_pages().max(1) {
                snapshot.page += 1;
                snapshot.selected = 0;
            }
            snapshot
        }
        ListIntent::PrevPage => {
            if snapshot.page > 1 {
                snapshot.page -= 1;
                snapshot.selected = 0;
            }
            snapshot
        }
        ListIntent::SelectUp => {
            snapshot.selected = snapshot.selected.saturating_sub(1);
            snapshot
        }
        ListIntent::SelectDown => {
            let visible = snapshot.visible().len();
            if snapshot.selected + 1 < visible {
                snapshot.selected += 1;
            }
            snapshot
        }

        ListIntent::RequestDelete => {
            if snapshot.deleting.is_none() {
                snapshot.confirm_delete = snapshot.selected_book().map(|book| book.id.clone());
            }
            snapshot
        }
        ListIntent::ConfirmDelete => {
            snapshot.deleting = snapshot.confirm_delete.take();
            snapshot
        }
        ListIntent::CancelDelete => {
            snapshot.confirm_delete = None;
            snapshot
        }
        ListIntent::Deleted { id } => {
            remove_by_id(&mut snapshot.collection, &id);
            if snapshot.deleting.as_ref() == Some(&id) {
                snapshot.deleting = None;
            }
            snapshot.clamp()
        }
        ListIntent::DeleteFailed { id, message } => {
            if snapshot.deleting.as_ref() == Some(&id) {
                snapshot.deleting = None;
            }
            snapshot.notice = Some(message);
            snapshot
        }

        ListIntent::DismissNotice => {
            snapshot.notice = None;
            snapshot
        }
    }
}

fn reset_to_first_page(mut snapshot: ListSnapshot) -> ListSnapshot {
    snapshot.page = 1;
    snapshot.selected = 0;
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookId};
    use serde_json::json;

    fn book(id: u64, title: &str) -> Book {
        serde_json::from_value(json!({
            "id": id, "title": title, "author": "A", "email": "a@b.c", "age": 30
        }))
        .unwrap()
    }

    fn ready(books: Vec<Book>) -> ListViewState {
        ListReducer::reduce(ListViewState::Loading, ListIntent::Loaded { books })
    }

    #[test]
    fn intents_before_load_are_ignored() {
        let state = ListReducer::reduce(ListViewState::Loading, ListIntent::NextPage);
        assert_eq!(state, ListViewState::Loading);
    }

    #[test]
    fn load_failure_is_explicit() {
        let state = ListReducer::reduce(
            ListViewState::Loading,
            ListIntent::LoadFailed {
                message: "Failed to fetch books".into(),
            },
        );
        assert_eq!(
            state,
            ListViewState::Failed {
                error: "Failed to fetch books".into()
            }
        );
    }

    #[test]
    fn delete_requires_confirmation() {
        let state = ready(vec![book(1, "Dune"), book(2, "Emma")]);
        let state = ListReducer::reduce(state, ListIntent::RequestDelete);
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.confirm_delete, Some(BookId::Number(1)));
        assert_eq!(snapshot.deleting, None);

        let state = ListReducer::reduce(state, ListIntent::CancelDelete);
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.confirm_delete, None);
        assert_eq!(snapshot.collection.len(), 2);
    }

    #[test]
    fn prompt_blocks_other_input() {
        let state = ready(vec![book(1, "Dune")]);
        let state = ListReducer::reduce(state, ListIntent::RequestDelete);
        let state = ListReducer::reduce(state, ListIntent::FilterInput { ch: 'x' });
        assert_eq!(state.snapshot().unwrap().filter, "");
    }
}
