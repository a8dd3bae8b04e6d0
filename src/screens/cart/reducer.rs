//! Reducer for the cart screen.

use std::collections::HashSet;

use crate::mvi::Reducer;
use crate::root::{Msg as RootMsg, NavigateCommand, Notification};

use super::eff::Eff;
use super::msg::Msg;
use super::state::{CartUiState, ConfirmDialogState, State};

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = State;
    type Msg = Msg;
    type Eff = Eff;

    fn reduce(state: Self::State, msg: Self::Msg) -> (Self::State, HashSet<Self::Eff>) {
        match msg {
            Msg::ShowCart { items } => {
                let ui_state = if items.is_empty() {
                    CartUiState::Empty
                } else {
                    CartUiState::Content(items)
                };
                (State { ui_state, ..state }, HashSet::new())
            }

            Msg::ShowConfirm { id, title } => (
                State {
                    confirm_dialog: ConfirmDialogState::Show { id, title },
                    ..state
                },
                HashSet::new(),
            ),

            Msg::HideConfirm => (
                State {
                    confirm_dialog: ConfirmDialogState::Hide,
                    ..state
                },
                HashSet::new(),
            ),

            Msg::RemoveFromCart { id } => {
                let title = match &state.confirm_dialog {
                    ConfirmDialogState::Show { title, .. } => title.clone(),
                    ConfirmDialogState::Hide => String::new(),
                };
                let effs = HashSet::from([
                    Eff::RemoveItem {
                        id: id.clone(),
                        title: title.clone(),
                    },
                    Eff::Notify(Notification::Action {
                        message: format!("{title} removed from cart"),
                        label: "Restore".to_string(),
                        action: Box::new(RootMsg::Cart(Msg::IncrementCount { id })),
                    }),
                ]);
                (
                    State {
                        confirm_dialog: ConfirmDialogState::Hide,
                        ..state
                    },
                    effs,
                )
            }

            Msg::IncrementCount { id } => (state, HashSet::from([Eff::IncrementItem { id }])),

            Msg::DecrementCount { id } => (state, HashSet::from([Eff::DecrementItem { id }])),

            Msg::SendOrder { order } => (
                State {
                    ui_state: CartUiState::Loading,
                    ..state
                },
                HashSet::from([Eff::SendOrder { order }]),
            ),

            Msg::ClickOnDish { id, title } => (
                state,
                HashSet::from([Eff::Navigate(NavigateCommand::ToDishItem { id, title })]),
            ),

            Msg::ShowError { message } => (
                State {
                    ui_state: CartUiState::Error(message),
                    confirm_dialog: ConfirmDialogState::Hide,
                    ..state
                },
                HashSet::new(),
            ),
        }
    }
}
