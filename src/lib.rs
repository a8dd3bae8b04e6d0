//! plateful: the coordination engine of a delivery client.
//!
//! A hierarchical state machine in the Model-View-Intent style:
//! messages are folded one at a time into a single `RootState`,
//! reducers are pure and describe side work as effect values, and an
//! external dispatcher executes those effects, feeding results back as
//! new messages.
//!
//! ```text
//!  producers (UI, dispatcher)
//!        │ submit(Msg)
//!        ▼
//!  ┌───────────┐   fold    ┌──────────────┐
//!  │ message   │ ────────► │ route_and_   │ ──► RootState revision ──► observers
//!  │ bus (mpsc)│           │ reduce       │ ──► Effects
//!  └───────────┘           └──────────────┘        │ one task each
//!        ▲                                         ▼
//!        └───────────── emit(Msg) ◄─── EffHandler (I/O lives here)
//! ```
//!
//! The crate owns no I/O: rendering, data access and persistence sit
//! behind [`dispatch::EffHandler`] and [`snapshot::SnapshotBridge`].

pub mod config;
pub mod dispatch;
pub mod mvi;
pub mod root;
pub mod screens;
pub mod shutdown;
pub mod snapshot;
pub mod store;
