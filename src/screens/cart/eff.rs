use std::collections::BTreeMap;

use crate::mvi::Effect;
use crate::root::{NavigateCommand, Notification};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Eff {
    LoadCart,
    IncrementItem { id: String },
    DecrementItem { id: String },
    RemoveItem { id: String, title: String },
    SendOrder { order: BTreeMap<String, u32> },
    /// Lifted to the root `Eff::Navigate` when tagged into the root union.
    Navigate(NavigateCommand),
    /// Lifted to the root `Eff::Notification`.
    Notify(Notification),
}

impl Effect for Eff {}
