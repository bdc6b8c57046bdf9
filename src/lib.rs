//! Terminal client for a REST book inventory.
//!
//! - [`api`]: typed round trips against the `books` collection
//! - [`model`]: the record, form drafts and validation rules
//! - [`ui`]: list, detail and form screens driven by MVI reducers
//! - [`config`] and [`logging`]: the ambient setup done by the binary

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod ui;
