//! Base trait for effects (requested side work) in MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for effect objects.
///
/// Effects are pure descriptions of side work: "fetch dishes matching
/// query X", "persist increment for item Y". They carry no behavior,
/// only the data needed to perform the behavior in the dispatcher.
///
/// Effects form sets (a reducer never asks for the same work twice in
/// one transition), hence the `Eq + Hash` bound.
pub trait Effect: Debug + Clone + Eq + Hash + Send + 'static {}
