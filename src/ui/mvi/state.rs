//! Base trait for screen state in MVI architecture.

/// Marker trait for screen state objects.
///
/// `Default` is the state a screen starts in when it is activated.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
