/// Marker trait for state objects folded by a [`Reducer`](super::Reducer).
///
/// `Default` is required so the dispatcher can `mem::take` the current value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
