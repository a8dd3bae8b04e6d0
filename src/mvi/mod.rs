//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits for the unidirectional
//! message/effect loop.
//!
//! # Architecture
//!
//! ```text
//! Message ──→ Reducer ──→ (State, Effects) ──→ observers
//!    ↑                         │
//!    └──── Effect Dispatcher ◄─┘
//! ```
//!
//! - **State**: Immutable representation of a screen's state
//! - **Message**: User intents or system events
//! - **Effect**: A declarative request for work performed outside the loop
//! - **Reducer**: Pure function that transforms state and emits effects

mod effect;
mod message;
mod reducer;
mod state;

pub use effect::Effect;
pub use message::Message;
pub use reducer::Reducer;
pub use state::UiState;
