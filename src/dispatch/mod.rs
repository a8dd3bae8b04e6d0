//! The effect dispatcher boundary.
//!
//! The store hands every produced effect to an [`EffHandler`] on its
//! own task, together with an [`Emitter`] for feeding result messages
//! back onto the bus. All non-deterministic work (network, storage,
//! host navigation, notifications) lives behind this boundary; only
//! messages cross back.

pub mod memory;

use std::future::Future;

use tokio::sync::mpsc;
use tracing::debug;

use crate::root::{Eff, Msg};

/// Producer half of the message bus, handed to effect handlers.
#[derive(Clone)]
pub struct Emitter {
    tx: mpsc::UnboundedSender<Msg>,
}

impl Emitter {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self { tx }
    }

    /// Feed a message back into the loop. Never blocks.
    pub fn emit(&self, msg: Msg) {
        if self.tx.send(msg).is_err() {
            // The store was torn down while this effect was in flight.
            debug!("message bus closed, feedback message dropped");
        }
    }
}

/// Executes effects and feeds resulting messages back into the loop.
///
/// Each call runs on its own task; there is no ordering between
/// different effects' completions, and the fold loop never waits for
/// one. A returned error is logged by the store; failures the user
/// should see must instead be translated into messages (an error-state
/// message for the originating screen, or a notification).
pub trait EffHandler: Send + Sync + 'static {
    fn handle(&self, eff: Eff, emit: Emitter) -> impl Future<Output = anyhow::Result<()>> + Send;
}
