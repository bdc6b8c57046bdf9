//! Error types for the resource client.
//!
//! Every failure is either a transport failure (non-success status,
//! unreachable server, unreadable body) or a missing record on fetch-by-id.

use std::fmt;

use thiserror::Error;

/// The round trip an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn method(self) -> &'static str {
        match self {
            Operation::List | Operation::Get => "GET",
            Operation::Create => "POST",
            Operation::Update => "PUT",
            Operation::Delete => "DELETE",
        }
    }

    /// Short notice suitable for showing to the user.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch books",
            Operation::Get => "Book not found",
            Operation::Create => "Failed to add book",
            Operation::Update => "Failed to update book",
            Operation::Delete => "Failed to delete book",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`BookClient`](crate::api::BookClient).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL could not be turned into a collection URL
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Non-success status, connection failure, or undecodable body
    #[error("{} {url} failed: {reason}", .operation.method())]
    Transport {
        operation: Operation,
        url: String,
        status: Option<u16>,
        reason: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Fetch-by-id answered with a non-success status
    #[error("GET {url} failed: record not found (status {status})")]
    NotFound { url: String, status: u16 },
}

impl ApiError {
    pub(crate) fn status(operation: Operation, url: &str, status: u16) -> Self {
        ApiError::Transport {
            operation,
            url: url.to_string(),
            status: Some(status),
            reason: format!("status {}", status),
            source: None,
        }
    }

    pub(crate) fn request(operation: Operation, url: &str, source: reqwest::Error) -> Self {
        let reason = if source.is_decode() {
            format!("unreadable response body: {}", source)
        } else {
            source.to_string()
        };
        ApiError::Transport {
            operation,
            url: url.to_string(),
            status: source.status().map(|status| status.as_u16()),
            reason,
            source: Some(source),
        }
    }

    /// True for anything other than a missing record.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Notice shown to the user; details stay in the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "Invalid server address",
            ApiError::Transport { operation, .. } => operation.failure_message(),
            ApiError::NotFound { .. } => Operation::Get.failure_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_transport_errors() {
        let err = ApiError::status(Operation::Delete, "http://h/books/1", 500);
        assert!(err.is_transport());
        assert!(!err.is_not_found());
        assert_eq!(err.user_message(), "Failed to delete book");
        assert_eq!(err.to_string(), "DELETE http://h/books/1 failed: status 500");
    }

    #[test]
    fn not_found_message() {
        let err = ApiError::NotFound {
            url: "http://h/books/9".into(),
            status: 404,
        };
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Book not found");
    }

    #[test]
    fn operation_methods() {
        assert_eq!(Operation::List.method(), "GET");
        assert_eq!(Operation::Create.method(), "POST");
        assert_eq!(Operation::Update.method(), "PUT");
        assert_eq!(Operation::Delete.to_string(), "delete");
    }
}
