use std::collections::BTreeMap;

use crate::mvi::Message;

use super::state::CartItem;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Msg {
    ShowCart { items: Vec<CartItem> },
    /// Ask for confirmation before removing an item.
    ShowConfirm { id: String, title: String },
    HideConfirm,
    /// Confirmed removal; the title shown in the notification comes from
    /// the open dialog.
    RemoveFromCart { id: String },
    IncrementCount { id: String },
    DecrementCount { id: String },
    /// Order as dish id -> portion count.
    SendOrder { order: BTreeMap<String, u32> },
    ClickOnDish { id: String, title: String },
    ShowError { message: String },
}

impl Message for Msg {}
