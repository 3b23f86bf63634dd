//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, typed input)
/// - System events (API responses, timers)
///
/// Intents are processed by reducers to produce new states. Each intent
/// is consumed exactly once; there is no replay log.
pub trait Intent: Send + 'static {}
