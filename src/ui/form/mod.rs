//! Record form shared by the create and edit screens.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Draft, field errors, submission status
//! - `intent.rs` - Typing, focus, submit, API outcomes
//! - `reducer.rs` - State transitions and validation gate
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormMode, FormSnapshot, FormState, Submission};
pub use view::render_form;
