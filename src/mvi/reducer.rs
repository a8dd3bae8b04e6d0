//! Reducer trait for MVI architecture.

use std::collections::HashSet;

use super::effect::Effect;
use super::message::Message;
use super::state::UiState;

/// Reducer transforms state based on messages.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Msg) -> (State, Effects)
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The message type this reducer handles.
    type Msg: Message;

    /// The effect type this reducer emits.
    type Eff: Effect;

    /// Process a message and return the new state plus requested effects.
    ///
    /// This must be a total, pure function over every declared message
    /// variant: no I/O, no clocks, no panics.
    fn reduce(state: Self::State, msg: Self::Msg) -> (Self::State, HashSet<Self::Eff>);
}
