use crate::screens::{cart, dish, dishes};

use super::msg::Msg;

/// Union of every effect the loop can request. Effects are pure
/// descriptions; the dispatcher owns their execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Eff {
    Dishes(dishes::Eff),
    Dish(dish::Eff),
    Cart(cart::Eff),

    Navigate(NavigateCommand),

    /// Re-read the persisted cart counter and answer with
    /// `Msg::UpdateCartCount`.
    SyncCounter,

    /// Host-process command.
    Cmd(Command),

    Notification(Notification),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigateCommand {
    ToDishItem { id: String, title: String },
    ToCart,
    ToBack,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Back navigation past an empty backstack: the host should close
    /// the application.
    Finish,
}

/// Transient user-facing notice, shown by the host outside any screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Notification {
    Text {
        message: String,
    },
    /// Notice with a follow-up action (e.g. undo), submitted back into
    /// the loop when the user takes it.
    Action {
        message: String,
        label: String,
        action: Box<Msg>,
    },
    Error {
        message: String,
        label: Option<String>,
        action: Option<Box<Msg>>,
    },
}
