//! Intents for the detail screen.

use crate::model::Book;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailIntent {
    Loaded { book: Book },
    LoadFailed { message: String },
}

impl Intent for DetailIntent {}
