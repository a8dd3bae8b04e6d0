use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// A catalog entry as rendered in the dish list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DishItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    /// Current text of the search field.
    pub input: String,
    /// Whether the search field is expanded.
    pub is_search: bool,
    /// Suggested completions, short name -> number of matching dishes.
    pub suggestions: BTreeMap<String, u32>,
    pub ui_state: DishesUiState,
}

impl UiState for State {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DishesUiState {
    Loading,
    #[default]
    Empty,
    Content(Vec<DishItem>),
    Error(String),
}
