use crate::mvi::Effect;
use crate::root::NavigateCommand;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Eff {
    /// Load the whole catalog.
    FindAllDishes,
    /// Load dishes matching the query.
    SearchDishes { query: String },
    /// Aggregate suggestions for a partial query.
    FindSuggestions { query: String },
    AddToCart { id: String, title: String },
    RemoveFromCart { id: String, title: String },
    /// Lifted to the root `Eff::Navigate` when tagged into the root union.
    Navigate(NavigateCommand),
}

impl Effect for Eff {}
