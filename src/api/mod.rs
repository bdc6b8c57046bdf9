//! Resource client for the remote book store.

mod client;
mod error;

pub use client::{BookClient, COLLECTION};
pub use error::{ApiError, Operation};
