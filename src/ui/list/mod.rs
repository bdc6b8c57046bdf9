//! Book list screen: collection snapshot, title filter, pagination, delete.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Snapshot and page-window derivation
//! - `intent.rs` - User/API actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{
    filter_books, page_window, remove_by_id, total_pages, ListSnapshot, ListViewState, PAGE_SIZE,
};
pub use view::render_list;
