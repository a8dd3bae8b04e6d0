//! Catalog screen: the full dish list with search and suggestions.

mod eff;
mod msg;
mod reducer;
mod state;

use std::collections::HashSet;

pub use eff::Eff;
pub use msg::Msg;
pub use reducer::DishesReducer;
pub use state::{DishItem, DishesUiState, State};

/// Route identifier of this screen inside `RootState.screens`.
pub const ROUTE: &str = "dishes";

/// Effects needed to populate the screen on cold start.
pub fn initial_effects() -> HashSet<Eff> {
    HashSet::from([Eff::FindAllDishes])
}
