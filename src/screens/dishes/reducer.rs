//! Reducer for the catalog screen.

use std::collections::{BTreeMap, HashSet};

use crate::mvi::Reducer;
use crate::root::NavigateCommand;

use super::eff::Eff;
use super::msg::Msg;
use super::state::{DishesUiState, State};

pub struct DishesReducer;

impl Reducer for DishesReducer {
    type State = State;
    type Msg = Msg;
    type Eff = Eff;

    fn reduce(state: Self::State, msg: Self::Msg) -> (Self::State, HashSet<Self::Eff>) {
        match msg {
            Msg::SearchInput { input } => (State { input, ..state }, HashSet::new()),

            Msg::SearchSubmit { query } => (
                State {
                    ui_state: DishesUiState::Loading,
                    ..state
                },
                HashSet::from([Eff::SearchDishes { query }]),
            ),

            Msg::SearchToggle => {
                if state.is_search && !state.input.is_empty() {
                    // Active search with text: clear it and reload the catalog
                    (
                        State {
                            input: String::new(),
                            suggestions: BTreeMap::new(),
                            ..state
                        },
                        HashSet::from([Eff::FindAllDishes]),
                    )
                } else if !state.is_search && state.input.is_empty() {
                    (
                        State {
                            is_search: true,
                            ..state
                        },
                        HashSet::new(),
                    )
                } else {
                    (
                        State {
                            is_search: false,
                            suggestions: BTreeMap::new(),
                            ..state
                        },
                        HashSet::new(),
                    )
                }
            }

            Msg::SuggestionSelect { suggestion } => (
                State {
                    input: suggestion.clone(),
                    suggestions: BTreeMap::new(),
                    ..state
                },
                HashSet::from([Eff::SearchDishes { query: suggestion }]),
            ),

            Msg::UpdateSuggestionResult { query } => {
                (state, HashSet::from([Eff::FindSuggestions { query }]))
            }

            Msg::ShowSuggestions { suggestions } => {
                (State { suggestions, ..state }, HashSet::new())
            }

            Msg::ShowDishes { dishes } => {
                let ui_state = if dishes.is_empty() {
                    DishesUiState::Empty
                } else {
                    DishesUiState::Content(dishes)
                };
                (
                    State {
                        ui_state,
                        suggestions: BTreeMap::new(),
                        ..state
                    },
                    HashSet::new(),
                )
            }

            Msg::ShowLoading => (
                State {
                    ui_state: DishesUiState::Loading,
                    ..state
                },
                HashSet::new(),
            ),

            Msg::ShowError { message } => (
                State {
                    ui_state: DishesUiState::Error(message),
                    ..state
                },
                HashSet::new(),
            ),

            Msg::AddToCart { id, title } => {
                (state, HashSet::from([Eff::AddToCart { id, title }]))
            }

            Msg::RemoveFromCart { id, title } => {
                (state, HashSet::from([Eff::RemoveFromCart { id, title }]))
            }

            Msg::ClickDish { id, title } => (
                State {
                    input: String::new(),
                    is_search: false,
                    suggestions: BTreeMap::new(),
                    ..state
                },
                HashSet::from([Eff::Navigate(NavigateCommand::ToDishItem { id, title })]),
            ),
        }
    }
}
