//! Field-level validation of a draft.
//!
//! Every rule runs even when an earlier one fails, so the form can show all
//! problems at once. A draft that passes is coerced into a typed payload in
//! the same pass.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::book::{Book, NewBook};
use crate::model::draft::{BookDraft, Field};
use crate::model::number::{parse_integer, parse_number, parse_positive_integer};

static AUTHOR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

pub const TITLE_REQUIRED: &str = "Title is required";
pub const AUTHOR_INVALID: &str = "Author must contain only letters";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const AGE_INVALID: &str = "Age must be a valid number";
pub const PRICE_INVALID: &str = "Price must be a valid number";
pub const YEAR_INVALID: &str = "Year must be a valid number";

/// Validation failures keyed by field.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Check every rule and, if all pass, build the create payload.
pub fn validate(draft: &BookDraft) -> Result<NewBook, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = check(&mut errors, Field::Title, title(draft.get(Field::Title)));
    let author = check(&mut errors, Field::Author, author(draft.get(Field::Author)));
    let email = check(&mut errors, Field::Email, email(draft.get(Field::Email)));
    let age = check(&mut errors, Field::Age, age(draft.get(Field::Age)));
    let price = check(&mut errors, Field::Price, price(draft.get(Field::Price)));
    let published_year = check(
        &mut errors,
        Field::PublishedYear,
        published_year(draft.get(Field::PublishedYear)),
    );

    match (title, author, email, age, price, published_year) {
        (Some(title), Some(author), Some(email), Some(age), Some(price), Some(published_year)) => {
            Ok(NewBook {
                title,
                author,
                email,
                age,
                price,
                category: optional_text(draft.get(Field::Category)),
                published_year,
                description: optional_text(draft.get(Field::Description)),
            })
        }
        _ => Err(errors),
    }
}

/// Validate `draft` as a full replacement of `original`.
pub fn validate_replacement(draft: &BookDraft, original: &Book) -> Result<Book, FieldErrors> {
    validate(draft).map(|payload| payload.into_record(original))
}

fn check<T>(errors: &mut FieldErrors, field: Field, result: Result<T, &'static str>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

fn title(text: &str) -> Result<String, &'static str> {
    if text.trim().is_empty() {
        return Err(TITLE_REQUIRED);
    }
    Ok(text.to_string())
}

fn author(text: &str) -> Result<String, &'static str> {
    if !AUTHOR_PATTERN.is_match(text) {
        return Err(AUTHOR_INVALID);
    }
    Ok(text.to_string())
}

fn email(text: &str) -> Result<String, &'static str> {
    if !EMAIL_PATTERN.is_match(text) {
        return Err(EMAIL_INVALID);
    }
    Ok(text.to_string())
}

fn age(text: &str) -> Result<u32, &'static str> {
    parse_positive_integer(text).ok_or(AGE_INVALID)
}

fn price(text: &str) -> Result<Option<f64>, &'static str> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_number(text).map(Some).ok_or(PRICE_INVALID)
}

fn published_year(text: &str) -> Result<Option<i32>, &'static str> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_integer(text)
        .and_then(|year| i32::try_from(year).ok())
        .map(Some)
        .ok_or(YEAR_INVALID)
}

fn optional_text(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
