//! Intents for the book list screen.

use crate::model::{Book, BookId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    /// Collection fetch succeeded; replaces any previous snapshot.
    Loaded { books: Vec<Book> },
    LoadFailed { message: String },

    /// Filter text edits. Each one resets to page 1.
    FilterInput { ch: char },
    FilterBackspace,
    ClearFilter,

    NextPage,
    PrevPage,
    SelectUp,
    SelectDown,

    /// Ask for confirmation before deleting the selected record.
    RequestDelete,
    /// User answered yes; the delete request may be sent.
    ConfirmDelete,
    CancelDelete,
    /// Store confirmed the delete; drop the record locally.
    Deleted { id: BookId },
    DeleteFailed { id: BookId, message: String },

    DismissNotice,
}

impl Intent for ListIntent {}
