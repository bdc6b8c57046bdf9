//! State for the create and edit forms.

use crate::model::{validate, validate_replacement, Book, BookDraft, Field, FieldErrors, NewBook};
use crate::ui::mvi::UiState;

/// Which record the form commits to.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    /// Editing `original`; its id and unmodelled keys are kept on save.
    Edit { original: Box<Book> },
}

/// Request the shell should send once the form is submitting.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(NewBook),
    Update(Book),
}

/// Form lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    /// Waiting for the record to edit.
    #[default]
    Loading,

    Editing(FormSnapshot),

    /// Record to edit could not be fetched.
    Failed { error: String },
}

impl UiState for FormState {}

impl FormState {
    /// Empty create form, ready for input.
    pub fn create() -> Self {
        FormState::Editing(FormSnapshot {
            mode: FormMode::Create,
            draft: BookDraft::new(),
            errors: FieldErrors::new(),
            focused: Field::Title,
            submitting: false,
            notice: None,
        })
    }

    pub fn snapshot(&self) -> Option<&FormSnapshot> {
        match self {
            Self::Editing(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.snapshot().is_some_and(|snapshot| snapshot.submitting)
    }

    /// Request to send, present only while submitting.
    pub fn submission(&self) -> Option<Submission> {
        self.snapshot().and_then(FormSnapshot::submission)
    }
}

/// Draft being edited plus its validation and submission status.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub mode: FormMode,
    pub draft: BookDraft,
    pub errors: FieldErrors,
    pub focused: Field,
    /// Request in flight; input is ignored until it resolves.
    pub submitting: bool,
    /// Blocking notice after a failed submit.
    pub notice: Option<String>,
}

impl FormSnapshot {
    pub(crate) fn editing(book: Book) -> Self {
        Self {
            draft: BookDraft::from_book(&book),
            mode: FormMode::Edit {
                original: Box::new(book),
            },
            errors: FieldErrors::new(),
            focused: Field::Title,
            submitting: false,
            notice: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn submission(&self) -> Option<Submission> {
        if !self.submitting {
            return None;
        }
        match &self.mode {
            FormMode::Create => validate(&self.draft).ok().map(Submission::Create),
            FormMode::Edit { original } => validate_replacement(&self.draft, original)
                .ok()
                .map(Submission::Update),
        }
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}
