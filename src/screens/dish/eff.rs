use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Eff {
    LoadDish { id: String },
    LoadReviews { id: String },
    AddToCart { id: String, count: u32 },
    SendReview { id: String, rating: u8, text: String },
}

impl Effect for Eff {}
