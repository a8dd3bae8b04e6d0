//! Base trait for messages (user/system intents) in MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for message objects.
///
/// Messages represent:
/// - User intents (clicks, text input)
/// - System events (data-layer responses, errors)
/// - Navigation requests
///
/// Messages are processed by reducers to produce new states and effects.
pub trait Message: Debug + Clone + Eq + Hash + Send + 'static {}
