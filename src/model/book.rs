use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::model::number::{as_integer, parse_number};

/// Store-assigned record identifier.
///
/// The store may hand out numeric or textual ids; the original JSON shape is
/// kept so that ids written back in a full replacement are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    Number(u64),
    Text(String),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(value) => write!(f, "{}", value),
            BookId::Text(value) => f.write_str(value),
        }
    }
}

impl FromStr for BookId {
    type Err = std::convert::Infallible;

    /// Canonical decimal text becomes a numeric id; anything else stays text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(value) if value.to_string() == s => Ok(BookId::Number(value)),
            _ => Ok(BookId::Text(s.to_string())),
        }
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        BookId::Number(value)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        BookId::Text(value.to_string())
    }
}

/// A persisted book record as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub email: String,
    /// `None` for records saved without a usable age; editing them forces
    /// a valid one before the next save.
    #[serde(
        default,
        deserialize_with = "lenient::optional_positive_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        rename = "publishedYear",
        default,
        deserialize_with = "lenient::optional_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_year: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Keys this client does not model, written back unchanged on update.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating a record. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub email: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "publishedYear", skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewBook {
    /// Full replacement of `original`: every modelled field comes from this
    /// payload, while the id and unmodelled keys are carried over.
    pub fn into_record(self, original: &Book) -> Book {
        Book {
            id: original.id.clone(),
            title: self.title,
            author: self.author,
            email: self.email,
            age: Some(self.age),
            price: self.price,
            category: self.category,
            published_year: self.published_year,
            description: self.description,
            extra: original.extra.clone(),
        }
    }
}

/// Decoders that accept numbers sent as text by older clients.
mod lenient {
    use super::*;
    use serde::de::Error;

    fn number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => parse_number(text),
            _ => None,
        }
    }

    fn is_blank(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Anything that is not a positive integer reads as absent, so one bad
    /// record cannot fail a whole listing.
    pub fn optional_positive_integer<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(number(&value)
            .and_then(as_integer)
            .filter(|age| *age > 0)
            .and_then(|age| u32::try_from(age).ok()))
    }

    pub fn optional_number<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if is_blank(&value) {
            return Ok(None);
        }
        number(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a number, got {}", value)))
    }

    pub fn optional_integer<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i32>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if is_blank(&value) {
            return Ok(None);
        }
        number(&value)
            .and_then(as_integer)
            .and_then(|year| i32::try_from(year).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", value)))
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|text| !text.trim().is_empty()))
    }
}
