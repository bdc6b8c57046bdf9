//! Book record, form draft, and validation rules.

mod book;
mod draft;
pub mod number;
pub mod validation;

pub use book::{Book, BookId, NewBook};
pub use draft::{BookDraft, Field};
pub use validation::{validate, validate_replacement, FieldErrors};
