use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub image: String,
    pub title: String,
    pub price: u32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    /// Promo code field, kept across reloads of the cart content.
    pub promo: String,
    pub confirm_dialog: ConfirmDialogState,
    pub ui_state: CartUiState,
}

impl UiState for State {}

/// Remove-item confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfirmDialogState {
    #[default]
    Hide,
    Show { id: String, title: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CartUiState {
    #[default]
    Empty,
    Loading,
    Content(Vec<CartItem>),
    Error(String),
}
