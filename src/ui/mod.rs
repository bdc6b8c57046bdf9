pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod popup;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use route::{Route, RouteError};
pub use runtime::run;
