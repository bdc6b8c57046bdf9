//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing, paging, submitting)
/// - API outcomes (records loaded, submit failed)
pub trait Intent: Send + 'static {}
