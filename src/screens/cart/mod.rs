//! Cart screen: item counts, removal with confirmation, order submission.

mod eff;
mod msg;
mod reducer;
mod state;

use std::collections::HashSet;

pub use eff::Eff;
pub use msg::Msg;
pub use reducer::CartReducer;
pub use state::{CartItem, CartUiState, ConfirmDialogState, State};

/// Route identifier of this screen inside `RootState.screens`.
pub const ROUTE: &str = "cart";

/// Effects needed to populate the screen when navigating to the cart.
pub fn initial_effects() -> HashSet<Eff> {
    HashSet::from([Eff::LoadCart])
}
