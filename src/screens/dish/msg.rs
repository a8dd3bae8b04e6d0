use crate::mvi::Message;

use super::state::{DishContent, Review};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Msg {
    ShowDish { content: DishContent },
    ShowReviews { reviews: Vec<Review> },
    IncrementCount,
    DecrementCount,
    ToggleLike,
    /// Add `count` portions of the current dish to the cart.
    AddToCart,
    SendReview { rating: u8, text: String },
    ShowError { message: String },
}

impl Message for Msg {}
