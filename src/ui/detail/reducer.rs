use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    /// `Ready` and `Failed` are terminal until the screen is re-activated.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (DetailState::Loading, DetailIntent::Loaded { book }) => DetailState::Ready {
                book: Box::new(book),
            },
            (DetailState::Loading, DetailIntent::LoadFailed { message }) => {
                DetailState::Failed { error: message }
            }
            (other, _) => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use serde_json::json;

    fn dune() -> Book {
        serde_json::from_value(json!({
            "id": 1, "title": "Dune", "author": "Frank Herbert",
            "email": "frank@dune.com", "age": 65
        }))
        .unwrap()
    }

    #[test]
    fn loading_to_ready() {
        let state = DetailReducer::reduce(DetailState::Loading, DetailIntent::Loaded { book: dune() });
        assert_eq!(state.book().map(|b| b.title.as_str()), Some("Dune"));
    }

    #[test]
    fn loading_to_failed() {
        let state = DetailReducer::reduce(
            DetailState::Loading,
            DetailIntent::LoadFailed {
                message: "Book not found".into(),
            },
        );
        assert_eq!(state.error_message(), Some("Book not found"));
    }

    #[test]
    fn ready_is_terminal() {
        let ready = DetailReducer::reduce(DetailState::Loading, DetailIntent::Loaded { book: dune() });
        let state = DetailReducer::reduce(
            ready.clone(),
            DetailIntent::LoadFailed {
                message: "late".into(),
            },
        );
        assert_eq!(state, ready);
    }
}
