//! One module per screen, each with its own `State`, `Msg`, `Eff` and
//! reducer. Screens never share state; their only coupling to the root
//! is the tagging of their effect sets into the root union.

pub mod cart;
pub mod dish;
pub mod dishes;
