use std::collections::BTreeMap;
use std::fmt;

use crate::model::book::Book;

/// Editable fields of a book, in form order. `id` is never editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Author,
    Email,
    Age,
    Price,
    Category,
    PublishedYear,
    Description,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Title,
        Field::Author,
        Field::Email,
        Field::Age,
        Field::Price,
        Field::Category,
        Field::PublishedYear,
        Field::Description,
    ];

    /// Key used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Email => "email",
            Field::Age => "age",
            Field::Price => "price",
            Field::Category => "category",
            Field::PublishedYear => "publishedYear",
            Field::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Book Title",
            Field::Author => "Author Name",
            Field::Email => "Author Email",
            Field::Age => "Author Age",
            Field::Price => "Price",
            Field::Category => "Category",
            Field::PublishedYear => "Published Year",
            Field::Description => "Description",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::Title | Field::Author | Field::Email | Field::Age
        )
    }

    /// Next field in form order, wrapping around.
    pub fn next(self) -> Field {
        let index = self.index();
        Field::ALL[(index + 1) % Field::ALL.len()]
    }

    /// Previous field in form order, wrapping around.
    pub fn prev(self) -> Field {
        let index = self.index();
        Field::ALL[(index + Field::ALL.len() - 1) % Field::ALL.len()]
    }

    fn index(self) -> usize {
        Field::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw text typed into the form, one entry per field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookDraft {
    values: BTreeMap<Field, String>,
}

impl BookDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from a persisted record, for editing.
    pub fn from_book(book: &Book) -> Self {
        let mut draft = Self::new();
        draft.set(Field::Title, book.title.clone());
        draft.set(Field::Author, book.author.clone());
        draft.set(Field::Email, book.email.clone());
        draft.set(
            Field::Age,
            book.age.map(|age| age.to_string()).unwrap_or_default(),
        );
        draft.set(
            Field::Price,
            book.price.map(|price| price.to_string()).unwrap_or_default(),
        );
        draft.set(Field::Category, book.category.clone().unwrap_or_default());
        draft.set(
            Field::PublishedYear,
            book.published_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
        );
        draft.set(
            Field::Description,
            book.description.clone().unwrap_or_default(),
        );
        draft
    }

    /// Builder-style setter, handy for fixtures.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn push_char(&mut self, field: Field, ch: char) {
        self.values.entry(field).or_default().push(ch);
    }

    pub fn pop_char(&mut self, field: Field) {
        if let Some(value) = self.values.get_mut(&field) {
            value.pop();
        }
    }
}
