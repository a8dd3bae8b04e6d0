use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// Full content of a dish as served by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DishContent {
    pub id: String,
    pub image: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub old_price: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    /// Known before the content loads: carried by the navigation command
    /// so the screen can render its title immediately.
    pub title: String,
    /// Portions to add to the cart, never below 1.
    pub count: u32,
    pub is_liked: bool,
    pub ui_state: DishUiState,
    pub reviews: ReviewUiState,
}

impl State {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            ..Self::default()
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            count: 1,
            is_liked: false,
            ui_state: DishUiState::Loading,
            reviews: ReviewUiState::Loading,
        }
    }
}

impl UiState for State {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DishUiState {
    Loading,
    Content(DishContent),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewUiState {
    Loading,
    Empty,
    Content(Vec<Review>),
    /// Keeps the current reviews on screen while a newly sent one is in
    /// flight, instead of collapsing back to a bare loader.
    ContentWhileLoading(Vec<Review>),
}
