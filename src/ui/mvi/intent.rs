/// Marker trait for intents: user actions (search typed, sort key pressed,
/// page changed) and system events (catalog loaded).
pub trait Intent: Send + 'static {}
