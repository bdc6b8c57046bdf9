use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::BookId;

/// Screens reachable by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/addbook`
    Create,
    /// `/book/{id}`
    Detail(BookId),
    /// `/edit/{id}`
    Edit(BookId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route '{0}' (expected /, /addbook, /book/{{id}} or /edit/{{id}})")]
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::List),
            ["addbook"] => Ok(Route::Create),
            ["book", id] => Ok(Route::Detail(parse_id(id))),
            ["edit", id] => Ok(Route::Edit(parse_id(id))),
            _ => Err(RouteError::Unknown(trimmed.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Create => "/addbook".to_string(),
            Route::Detail(id) => format!("/book/{}", id),
            Route::Edit(id) => format!("/edit/{}", id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::List => "Book Library",
            Route::Create => "Add New Book",
            Route::Detail(_) => "Book Details",
            Route::Edit(_) => "Edit Book",
        }
    }
}

fn parse_id(segment: &str) -> BookId {
    match segment.parse::<BookId>() {
        Ok(id) => id,
        Err(never) => match never {},
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
