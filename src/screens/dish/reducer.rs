//! Reducer for the dish detail screen.

use std::collections::HashSet;

use crate::mvi::Reducer;

use super::eff::Eff;
use super::msg::Msg;
use super::state::{DishUiState, ReviewUiState, State};

pub struct DishReducer;

impl Reducer for DishReducer {
    type State = State;
    type Msg = Msg;
    type Eff = Eff;

    fn reduce(state: Self::State, msg: Self::Msg) -> (Self::State, HashSet<Self::Eff>) {
        match msg {
            Msg::ShowDish { content } => (
                State {
                    // The loaded content is authoritative for the title
                    title: content.title.clone(),
                    ui_state: DishUiState::Content(content),
                    ..state
                },
                HashSet::new(),
            ),

            Msg::ShowReviews { reviews } => {
                let reviews = if reviews.is_empty() {
                    ReviewUiState::Empty
                } else {
                    ReviewUiState::Content(reviews)
                };
                (State { reviews, ..state }, HashSet::new())
            }

            Msg::IncrementCount => (
                State {
                    count: state.count + 1,
                    ..state
                },
                HashSet::new(),
            ),

            Msg::DecrementCount => (
                State {
                    count: state.count.saturating_sub(1).max(1),
                    ..state
                },
                HashSet::new(),
            ),

            Msg::ToggleLike => (
                State {
                    is_liked: !state.is_liked,
                    ..state
                },
                HashSet::new(),
            ),

            Msg::AddToCart => {
                let eff = Eff::AddToCart {
                    id: state.id.clone(),
                    count: state.count,
                };
                (state, HashSet::from([eff]))
            }

            Msg::SendReview { rating, text } => {
                let eff = Eff::SendReview {
                    id: state.id.clone(),
                    rating,
                    text,
                };
                let reviews = match state.reviews {
                    ReviewUiState::Content(list) | ReviewUiState::ContentWhileLoading(list) => {
                        ReviewUiState::ContentWhileLoading(list)
                    }
                    ReviewUiState::Empty | ReviewUiState::Loading => ReviewUiState::Loading,
                };
                (State { reviews, ..state }, HashSet::from([eff]))
            }

            Msg::ShowError { message } => (
                State {
                    ui_state: DishUiState::Error(message),
                    ..state
                },
                HashSet::new(),
            ),
        }
    }
}
