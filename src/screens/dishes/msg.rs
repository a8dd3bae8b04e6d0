use std::collections::BTreeMap;

use crate::mvi::Message;

use super::state::DishItem;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Msg {
    /// Search field text changed.
    SearchInput { input: String },
    /// Search submitted; the data layer answers with `ShowDishes`.
    SearchSubmit { query: String },
    /// Search icon toggled. Three-way: clear an active search, expand
    /// the field, or collapse it.
    SearchToggle,
    /// A suggestion row was picked.
    SuggestionSelect { suggestion: String },
    /// Input changed while in search mode; requests fresh suggestions.
    UpdateSuggestionResult { query: String },
    ShowSuggestions { suggestions: BTreeMap<String, u32> },
    ShowDishes { dishes: Vec<DishItem> },
    ShowLoading,
    ShowError { message: String },
    AddToCart { id: String, title: String },
    RemoveFromCart { id: String, title: String },
    /// A dish row was clicked; navigates to the detail screen.
    ClickDish { id: String, title: String },
}

impl Message for Msg {}
