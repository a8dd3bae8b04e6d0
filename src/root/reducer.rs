//! Routing reducer: sends each message to the active screen's reducer,
//! applies root mutations directly, and runs the navigation machine.

use std::collections::HashSet;

use tracing::debug;

use crate::mvi::Reducer;
use crate::screens::cart::{self, CartReducer};
use crate::screens::dish::{self, DishReducer};
use crate::screens::dishes::{self, DishesReducer};

use super::eff::{Command, Eff, NavigateCommand};
use super::msg::Msg;
use super::state::{RootState, ScreenState};

/// Effect set seeding the fold on cold start: populate the landing
/// screen and sync the cart counter.
pub fn initial_effects() -> HashSet<Eff> {
    let mut effs = lift_dishes(dishes::initial_effects());
    effs.insert(Eff::SyncCounter);
    effs
}

/// Advance the root state by one message.
///
/// Screen-scoped messages reach their reducer only while that screen is
/// active; stale ones (e.g. a response for a screen the user has left)
/// are discarded without a state change. Root mutations and navigation
/// apply regardless of the active screen.
pub fn route_and_reduce(root: RootState, msg: Msg) -> (RootState, HashSet<Eff>) {
    match msg {
        Msg::Dishes(msg) => match root.current() {
            ScreenState::Dishes(state) => {
                let (state, effs) = DishesReducer::reduce(state.clone(), msg);
                (
                    root.with_current(ScreenState::Dishes(state)),
                    lift_dishes(effs),
                )
            }
            _ => discard(root, "dishes"),
        },

        Msg::Dish(msg) => match root.current() {
            ScreenState::Dish(state) => {
                let (state, effs) = DishReducer::reduce(state.clone(), msg);
                (root.with_current(ScreenState::Dish(state)), lift_dish(effs))
            }
            _ => discard(root, "dish"),
        },

        Msg::Cart(msg) => match root.current() {
            ScreenState::Cart(state) => {
                let (state, effs) = CartReducer::reduce(state.clone(), msg);
                (root.with_current(ScreenState::Cart(state)), lift_cart(effs))
            }
            _ => discard(root, "cart"),
        },

        Msg::UpdateCartCount { count } => (
            RootState {
                cart_count: count,
                ..root
            },
            HashSet::new(),
        ),

        Msg::Navigate(cmd) => reduce_navigate(root, cmd),
    }
}

fn discard(root: RootState, target: &str) -> (RootState, HashSet<Eff>) {
    debug!(
        target_screen = target,
        active = %root.current_route,
        "discarding stale message for inactive screen"
    );
    (root, HashSet::new())
}

fn reduce_navigate(mut root: RootState, cmd: NavigateCommand) -> (RootState, HashSet<Eff>) {
    match cmd {
        NavigateCommand::ToDishItem { id, title } => {
            root.backstack.push(root.current().clone());
            let state = dish::State::new(id.clone(), title);
            root.screens
                .insert(dish::ROUTE.to_string(), ScreenState::Dish(state));
            root.current_route = dish::ROUTE.to_string();
            (root, lift_dish(dish::initial_effects(&id)))
        }

        NavigateCommand::ToCart => {
            if root.current_route == cart::ROUTE {
                return (root, HashSet::new());
            }
            root.backstack.push(root.current().clone());
            root.current_route = cart::ROUTE.to_string();
            (root, lift_cart(cart::initial_effects()))
        }

        NavigateCommand::ToBack => match root.backstack.pop() {
            Some(prev) => {
                let route = prev.route().to_string();
                root.screens.insert(route.clone(), prev);
                root.current_route = route;
                (root, HashSet::new())
            }
            None => (root, HashSet::from([Eff::Cmd(Command::Finish)])),
        },
    }
}

// Tagging a screen's effect set into the root union is the only
// coupling between screen reducers and the root. Screen-level
// navigation and notification requests flatten to their root variants.

fn lift_dishes(effs: HashSet<dishes::Eff>) -> HashSet<Eff> {
    effs.into_iter()
        .map(|eff| match eff {
            dishes::Eff::Navigate(cmd) => Eff::Navigate(cmd),
            other => Eff::Dishes(other),
        })
        .collect()
}

fn lift_dish(effs: HashSet<dish::Eff>) -> HashSet<Eff> {
    effs.into_iter().map(Eff::Dish).collect()
}

fn lift_cart(effs: HashSet<cart::Eff>) -> HashSet<Eff> {
    effs.into_iter()
        .map(|eff| match eff {
            cart::Eff::Navigate(cmd) => Eff::Navigate(cmd),
            cart::Eff::Notify(notification) => Eff::Notification(notification),
            other => Eff::Cart(other),
        })
        .collect()
}
