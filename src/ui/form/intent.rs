//! Intents for the create and edit forms.

use crate::model::Book;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Record to edit arrived.
    Loaded { book: Book },
    LoadFailed { message: String },

    /// Typing into the focused field.
    Input { ch: char },
    Backspace,
    FocusNext,
    FocusPrev,

    /// Validate and, if clean, start submitting.
    Submit,
    /// Store rejected the submission; the draft is kept.
    SubmitFailed { message: String },

    DismissNotice,
}

impl Intent for FormIntent {}
