//! State for the read-only detail screen.

use crate::model::Book;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Loading,

    Ready { book: Box<Book> },

    /// Fetch failed; retry re-activates the screen.
    Failed { error: String },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn book(&self) -> Option<&Book> {
        match self {
            Self::Ready { book } => Some(book),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}
