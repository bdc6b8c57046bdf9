//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key press / API ─────┘
//! ```
//!
//! - **State**: everything a screen needs to render, rebuilt on activation
//! - **Intent**: a key press or an API outcome
//! - **Reducer**: pure function folding an intent into the next state
//!
//! Side effects (HTTP round trips, navigation) never happen in reducers;
//! the navigation shell inspects the resulting state and issues them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
