use crate::screens::{cart, dish, dishes};

use super::eff::NavigateCommand;

/// Union of every intent the loop accepts, scoped to one screen or to
/// the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Msg {
    Dishes(dishes::Msg),
    Dish(dish::Msg),
    Cart(cart::Msg),

    /// Navigation at root state level.
    Navigate(NavigateCommand),

    /// Root mutation: replace the derived cart counter.
    UpdateCartCount { count: u32 },
}
