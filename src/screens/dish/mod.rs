//! Detail screen for a single dish: content, portion counter, reviews.

mod eff;
mod msg;
mod reducer;
mod state;

use std::collections::HashSet;

pub use eff::Eff;
pub use msg::Msg;
pub use reducer::DishReducer;
pub use state::{DishContent, DishUiState, Review, ReviewUiState, State};

/// Route identifier of this screen inside `RootState.screens`.
pub const ROUTE: &str = "dish";

/// Effects needed to populate the screen when navigating to a dish.
pub fn initial_effects(id: &str) -> HashSet<Eff> {
    HashSet::from([
        Eff::LoadDish { id: id.to_string() },
        Eff::LoadReviews { id: id.to_string() },
    ])
}
