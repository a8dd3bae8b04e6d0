use std::collections::HashSet;

use plateful::root::{
    initial_effects, route_and_reduce, Command, Eff, Msg, NavigateCommand, RootState, ScreenState,
};
use plateful::screens::cart;
use plateful::screens::dish::{self, DishUiState};
use plateful::screens::dishes::{self, DishItem, DishesUiState};

fn dish_item(id: &str, title: &str) -> DishItem {
    DishItem {
        id: id.to_string(),
        title: title.to_string(),
        image: String::new(),
        price: 100,
    }
}

fn navigate(root: RootState, cmd: NavigateCommand) -> (RootState, HashSet<Eff>) {
    route_and_reduce(root, Msg::Navigate(cmd))
}

#[test]
fn cold_start_lands_on_the_dish_list() {
    let root = RootState::initial();
    assert_eq!(root.current_route, dishes::ROUTE);
    assert!(root.backstack.is_empty());
    assert_eq!(root.cart_count, 0);
    match root.current() {
        ScreenState::Dishes(state) => {
            assert_eq!(state.ui_state, DishesUiState::Empty);
            assert!(!state.is_search);
        }
        other => panic!("unexpected landing screen: {other:?}"),
    }
}

#[test]
fn cold_start_effects_load_catalog_and_counter() {
    assert_eq!(
        initial_effects(),
        [Eff::Dishes(dishes::Eff::FindAllDishes), Eff::SyncCounter].into()
    );
}

#[test]
fn every_route_has_a_screen_entry() {
    let root = RootState::initial();
    for route in [dishes::ROUTE, dish::ROUTE, cart::ROUTE] {
        let screen = root.screens.get(route).expect("missing screen entry");
        assert_eq!(screen.route(), route);
    }
}

#[test]
fn stale_message_for_inactive_screen_is_discarded() {
    let root = RootState::initial();
    let (next, effs) = route_and_reduce(
        root.clone(),
        Msg::Cart(cart::Msg::ShowError {
            message: "late response".into(),
        }),
    );
    assert_eq!(next, root);
    assert!(effs.is_empty());
}

#[test]
fn active_screen_message_is_reduced_and_tagged() {
    let (root, effs) = route_and_reduce(
        RootState::initial(),
        Msg::Dishes(dishes::Msg::SearchSubmit {
            query: "pizza".into(),
        }),
    );
    match root.current() {
        ScreenState::Dishes(state) => assert_eq!(state.ui_state, DishesUiState::Loading),
        other => panic!("unexpected screen: {other:?}"),
    }
    assert_eq!(
        effs,
        [Eff::Dishes(dishes::Eff::SearchDishes {
            query: "pizza".into()
        })]
        .into()
    );
}

#[test]
fn screen_navigation_request_lifts_to_root() {
    let (root, effs) = route_and_reduce(
        RootState::initial(),
        Msg::Dishes(dishes::Msg::ClickDish {
            id: "1".into(),
            title: "Margherita".into(),
        }),
    );
    // The click only requests navigation; the route changes when the
    // dispatched command comes back as Msg::Navigate.
    assert_eq!(root.current_route, dishes::ROUTE);
    assert_eq!(
        effs,
        [Eff::Navigate(NavigateCommand::ToDishItem {
            id: "1".into(),
            title: "Margherita".into()
        })]
        .into()
    );
}

#[test]
fn update_cart_count_applies_on_any_screen() {
    let (root, effs) = route_and_reduce(RootState::initial(), Msg::UpdateCartCount { count: 4 });
    assert_eq!(root.cart_count, 4);
    assert!(effs.is_empty());

    let (root, _) = navigate(root, NavigateCommand::ToCart);
    let (root, effs) = route_and_reduce(root, Msg::UpdateCartCount { count: 5 });
    assert_eq!(root.cart_count, 5);
    assert!(effs.is_empty());
}

#[test]
fn navigating_to_a_dish_pushes_the_backstack() {
    let start = RootState::initial();
    let (root, effs) = navigate(
        start.clone(),
        NavigateCommand::ToDishItem {
            id: "1".into(),
            title: "Margherita".into(),
        },
    );

    assert_eq!(root.current_route, dish::ROUTE);
    assert_eq!(root.backstack, vec![start.current().clone()]);
    match root.current() {
        ScreenState::Dish(state) => {
            assert_eq!(state.id, "1");
            assert_eq!(state.title, "Margherita");
            assert_eq!(state.count, 1);
            assert_eq!(state.ui_state, DishUiState::Loading);
        }
        other => panic!("unexpected screen: {other:?}"),
    }
    assert_eq!(
        effs,
        [
            Eff::Dish(dish::Eff::LoadDish { id: "1".into() }),
            Eff::Dish(dish::Eff::LoadReviews { id: "1".into() }),
        ]
        .into()
    );
}

#[test]
fn navigating_to_the_cart_requests_its_content() {
    let (root, effs) = navigate(RootState::initial(), NavigateCommand::ToCart);
    assert_eq!(root.current_route, cart::ROUTE);
    assert_eq!(root.backstack.len(), 1);
    assert_eq!(effs, [Eff::Cart(cart::Eff::LoadCart)].into());
}

#[test]
fn navigating_to_the_cart_twice_is_identity() {
    let (root, _) = navigate(RootState::initial(), NavigateCommand::ToCart);
    let (next, effs) = navigate(root.clone(), NavigateCommand::ToCart);
    assert_eq!(next, root);
    assert!(effs.is_empty());
}

#[test]
fn back_restores_the_previous_screen() {
    // Populate the dish list, then drill into a dish and come back.
    let (root, _) = route_and_reduce(
        RootState::initial(),
        Msg::Dishes(dishes::Msg::ShowDishes {
            dishes: vec![dish_item("1", "Margherita")],
        }),
    );
    let listed = root.current().clone();

    let (root, _) = navigate(
        root,
        NavigateCommand::ToDishItem {
            id: "1".into(),
            title: "Margherita".into(),
        },
    );
    let (root, effs) = navigate(root, NavigateCommand::ToBack);

    assert_eq!(root.current_route, dishes::ROUTE);
    assert!(root.backstack.is_empty());
    assert_eq!(root.current(), &listed);
    assert!(effs.is_empty());
}

#[test]
fn back_past_an_empty_backstack_requests_finish() {
    let (root, effs) = navigate(RootState::initial(), NavigateCommand::ToBack);
    assert_eq!(root, RootState::initial());
    assert_eq!(effs, [Eff::Cmd(Command::Finish)].into());
}

#[test]
fn cart_notification_request_lifts_to_root() {
    let (root, _) = navigate(RootState::initial(), NavigateCommand::ToCart);
    let (root, _) = route_and_reduce(
        root,
        Msg::Cart(cart::Msg::ShowConfirm {
            id: "1".into(),
            title: "Margherita".into(),
        }),
    );
    let (_, effs) = route_and_reduce(root, Msg::Cart(cart::Msg::RemoveFromCart { id: "1".into() }));

    assert_eq!(effs.len(), 2);
    assert!(effs.contains(&Eff::Cart(cart::Eff::RemoveItem {
        id: "1".into(),
        title: "Margherita".into(),
    })));
    assert!(effs
        .iter()
        .any(|eff| matches!(eff, Eff::Notification(_))));
}

#[test]
fn routing_is_deterministic() {
    let script = || {
        vec![
            Msg::Dishes(dishes::Msg::ShowDishes {
                dishes: vec![dish_item("1", "Margherita"), dish_item("2", "Pepperoni")],
            }),
            Msg::UpdateCartCount { count: 2 },
            Msg::Navigate(NavigateCommand::ToDishItem {
                id: "1".into(),
                title: "Margherita".into(),
            }),
            Msg::Dish(dish::Msg::IncrementCount),
            Msg::Navigate(NavigateCommand::ToCart),
            Msg::Navigate(NavigateCommand::ToBack),
            Msg::Navigate(NavigateCommand::ToBack),
        ]
    };
    let fold = |msgs: Vec<Msg>| {
        msgs.into_iter().fold(
            (RootState::initial(), Vec::new()),
            |(state, mut effs), msg| {
                let (state, new_effs) = route_and_reduce(state, msg);
                let mut sorted: Vec<_> = new_effs.into_iter().collect();
                sorted.sort_by_key(|eff| format!("{eff:?}"));
                effs.extend(sorted);
                (state, effs)
            },
        )
    };
    assert_eq!(fold(script()), fold(script()));
}

#[test]
fn every_transition_keeps_the_active_route_resolvable() {
    let msgs = vec![
        Msg::Navigate(NavigateCommand::ToCart),
        Msg::Cart(cart::Msg::ShowCart { items: vec![] }),
        Msg::Navigate(NavigateCommand::ToBack),
        Msg::Navigate(NavigateCommand::ToDishItem {
            id: "7".into(),
            title: "Lemonade".into(),
        }),
        Msg::Dish(dish::Msg::ToggleLike),
        Msg::Navigate(NavigateCommand::ToBack),
        Msg::Navigate(NavigateCommand::ToBack),
    ];
    let mut root = RootState::initial();
    for msg in msgs {
        let (next, _) = route_and_reduce(root, msg);
        // current() panics if the screens map lost the active route.
        assert_eq!(next.current().route(), next.current_route);
        root = next;
    }
}
