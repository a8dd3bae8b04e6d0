//! The state store: a single-consumer fold over the message bus.
//!
//! Any number of producers submit messages; one dedicated task folds
//! them sequentially through the routing reducer, publishes each new
//! `RootState` revision, then dispatches the revision's effects on
//! independent tasks. Publication of revision *n* always happens before
//! dispatch of revision *n*'s effects. No two folds ever race over the
//! state.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, trace, warn};

use crate::dispatch::{EffHandler, Emitter};
use crate::root::{initial_effects, route_and_reduce, Eff, Msg, RootState};

pub struct Store {
    msg_tx: mpsc::UnboundedSender<Msg>,
    state_rx: watch::Receiver<RootState>,
    fold: JoinHandle<()>,
}

impl Store {
    /// Start the fold loop, seeded with the restored snapshot (or the
    /// default initial state) and the cold-start effect set.
    ///
    /// The initial effects run even when a snapshot was restored: the
    /// catalog and cart counter are refreshed on every start.
    pub fn start<H: EffHandler>(restored: Option<RootState>, handler: Arc<H>) -> Self {
        let initial = restored.unwrap_or_else(RootState::initial);
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Msg>();
        let (state_tx, state_rx) = watch::channel(initial.clone());
        let emitter = Emitter::new(msg_tx.clone());

        let fold = tokio::spawn(async move {
            // Effect tasks live in a JoinSet so aborting the fold loop
            // cancels all in-flight effect work with it.
            let mut effects = JoinSet::new();
            let mut state = initial;
            spawn_effects(&mut effects, &handler, initial_effects(), &emitter);

            while let Some(msg) = msg_rx.recv().await {
                reap_finished(&mut effects);
                trace!(?msg, "folding message");
                let (next, effs) = route_and_reduce(state, msg);
                state = next;
                state_tx.send_replace(state.clone());
                spawn_effects(&mut effects, &handler, effs, &emitter);
            }
            debug!("message bus closed, fold loop stopping");
        });

        Self {
            msg_tx,
            state_rx,
            fold,
        }
    }

    /// Submit a message onto the bus. Never blocks.
    pub fn submit(&self, msg: Msg) {
        if self.msg_tx.send(msg).is_err() {
            // Only possible once the fold loop is gone; nothing left to
            // fold the message into.
            error!("message bus unavailable, dropping message");
        }
    }

    /// Subscribe to state revisions. The receiver yields the current
    /// value immediately and every revision thereafter; slow observers
    /// see at least the latest value, intermediate revisions may be
    /// coalesced.
    pub fn states(&self) -> watch::Receiver<RootState> {
        self.state_rx.clone()
    }

    /// Snapshot of the latest published state.
    pub fn current(&self) -> RootState {
        self.state_rx.borrow().clone()
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        // Cancels the fold loop and, through the JoinSet it owns, every
        // in-flight effect task. Interrupted effects are abandoned; any
        // message they would have emitted simply never happens.
        self.fold.abort();
    }
}

fn spawn_effects<H: EffHandler>(
    effects: &mut JoinSet<()>,
    handler: &Arc<H>,
    effs: HashSet<Eff>,
    emitter: &Emitter,
) {
    for eff in effs {
        let handler = Arc::clone(handler);
        let emit = emitter.clone();
        effects.spawn(async move {
            debug!(?eff, "dispatching effect");
            if let Err(err) = handler.handle(eff, emit).await {
                warn!(error = %err, "effect handler failed");
            }
        });
    }
}

fn reap_finished(effects: &mut JoinSet<()>) {
    while let Some(finished) = effects.try_join_next() {
        if let Err(err) = finished {
            if err.is_panic() {
                warn!(error = %err, "effect task panicked");
            }
        }
    }
}
