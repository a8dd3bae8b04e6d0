use tempfile::tempdir;

use plateful::root::{route_and_reduce, Msg, NavigateCommand, RootState};
use plateful::screens::dishes::{self, DishItem};
use plateful::snapshot::{FileSnapshotBridge, SnapshotBridge, SnapshotError};

/// Builds a state a real session could reach: populated dish list,
/// non-zero counter, one screen deep into navigation.
fn reachable_state() -> RootState {
    let msgs = vec![
        Msg::Dishes(dishes::Msg::ShowDishes {
            dishes: vec![
                DishItem {
                    id: "1".into(),
                    title: "Margherita".into(),
                    image: "https://menu.example/1.jpg".into(),
                    price: 100,
                },
                DishItem {
                    id: "2".into(),
                    title: "Pepperoni".into(),
                    image: "https://menu.example/2.jpg".into(),
                    price: 120,
                },
            ],
        }),
        Msg::UpdateCartCount { count: 3 },
        Msg::Navigate(NavigateCommand::ToDishItem {
            id: "1".into(),
            title: "Margherita".into(),
        }),
    ];
    msgs.into_iter().fold(RootState::initial(), |state, msg| {
        route_and_reduce(state, msg).0
    })
}

#[test]
fn missing_snapshot_restores_none() {
    let dir = tempdir().unwrap();
    let bridge = FileSnapshotBridge::new(dir.path().join("snapshot.json"));
    assert_eq!(bridge.restore().unwrap(), None);
}

#[test]
fn round_trip_preserves_the_full_state() {
    let dir = tempdir().unwrap();
    let bridge = FileSnapshotBridge::new(dir.path().join("snapshot.json"));

    let state = reachable_state();
    bridge.persist(&state).unwrap();
    assert_eq!(bridge.restore().unwrap(), Some(state));
}

#[test]
fn persist_replaces_a_previous_snapshot() {
    let dir = tempdir().unwrap();
    let bridge = FileSnapshotBridge::new(dir.path().join("snapshot.json"));

    bridge.persist(&RootState::initial()).unwrap();
    let state = reachable_state();
    bridge.persist(&state).unwrap();
    assert_eq!(bridge.restore().unwrap(), Some(state));
}

#[test]
fn persist_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let bridge = FileSnapshotBridge::new(dir.path().join("state").join("snapshot.json"));

    bridge.persist(&RootState::initial()).unwrap();
    assert_eq!(bridge.restore().unwrap(), Some(RootState::initial()));
}

#[test]
fn corrupt_snapshot_is_a_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, "not json").unwrap();

    let bridge = FileSnapshotBridge::new(path);
    match bridge.restore() {
        Err(SnapshotError::Decode { .. }) => {}
        other => panic!("expected a decode error, got {other:?}"),
    }
}
