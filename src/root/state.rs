use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::screens::{cart, dish, dishes};

/// Process-wide state, advanced one message at a time by the store's
/// fold loop. Every transition produces a new value; observers only
/// ever see complete revisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    /// Every route the application can navigate to has an entry here.
    pub screens: BTreeMap<String, ScreenState>,
    pub current_route: String,
    /// Previously active screens, most recent last.
    pub backstack: Vec<ScreenState>,
    /// Derived counter shown on every screen, independent of the cart
    /// screen's own state.
    pub cart_count: u32,
}

impl RootState {
    /// Default state for a cold start: all screens at their initial
    /// state, the dish list active.
    pub fn initial() -> Self {
        let mut screens = BTreeMap::new();
        screens.insert(
            dishes::ROUTE.to_string(),
            ScreenState::Dishes(dishes::State::default()),
        );
        screens.insert(
            dish::ROUTE.to_string(),
            ScreenState::Dish(dish::State::default()),
        );
        screens.insert(
            cart::ROUTE.to_string(),
            ScreenState::Cart(cart::State::default()),
        );
        Self {
            screens,
            current_route: dishes::ROUTE.to_string(),
            backstack: Vec::new(),
            cart_count: 0,
        }
    }

    /// The active screen.
    ///
    /// Panics if `current_route` has no entry in `screens`; that is a
    /// broken invariant, not a recoverable condition.
    pub fn current(&self) -> &ScreenState {
        self.screens
            .get(&self.current_route)
            .unwrap_or_else(|| panic!("no screen state for active route '{}'", self.current_route))
    }

    /// Returns a copy with the active screen's state replaced.
    pub(crate) fn with_current(mut self, screen: ScreenState) -> Self {
        self.screens.insert(self.current_route.clone(), screen);
        self
    }
}

/// State of one screen, tagged by variant. The route is constant per
/// variant; the title may depend on screen content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScreenState {
    Dishes(dishes::State),
    Dish(dish::State),
    Cart(cart::State),
}

impl ScreenState {
    pub fn route(&self) -> &'static str {
        match self {
            ScreenState::Dishes(_) => dishes::ROUTE,
            ScreenState::Dish(_) => dish::ROUTE,
            ScreenState::Cart(_) => cart::ROUTE,
        }
    }

    pub fn title(&self) -> String {
        match self {
            ScreenState::Dishes(_) => "All dishes".to_string(),
            ScreenState::Dish(state) => state.title.clone(),
            ScreenState::Cart(_) => "Cart".to_string(),
        }
    }
}
