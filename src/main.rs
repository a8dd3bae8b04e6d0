//! Interactive demo host: wires the store to the in-memory dispatcher
//! and a file snapshot bridge, driven by a line-oriented prompt.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use plateful::config::Config;
use plateful::dispatch::memory::InMemoryDispatcher;
use plateful::root::{Msg, NavigateCommand, RootState, ScreenState};
use plateful::screens::cart::{self, CartUiState, ConfirmDialogState};
use plateful::screens::dish::{self, DishUiState, ReviewUiState};
use plateful::screens::dishes::{self, DishesUiState};
use plateful::shutdown::ShutdownHandle;
use plateful::snapshot::{FileSnapshotBridge, SnapshotBridge};
use plateful::store::Store;

#[derive(Parser)]
#[command(name = "plateful", about = "Interactive demo for the plateful coordination engine")]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Snapshot file, overriding the configured path.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Ignore any persisted snapshot and start from the default state.
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let snapshot_path = cli.snapshot.clone().unwrap_or_else(|| config.snapshot_path());
    let bridge = FileSnapshotBridge::new(snapshot_path);
    let restored = if cli.reset {
        None
    } else {
        bridge.restore().context("restoring snapshot")?
    };

    let host = ShutdownHandle::new();
    let dispatcher = Arc::new(InMemoryDispatcher::sample(host.clone()));
    let store = Store::start(restored, dispatcher);

    repl(&store, &host).await?;

    bridge.persist(&store.current()).context("persisting snapshot")?;
    println!("state saved to {}", bridge.path().display());
    Ok(())
}

const HELP: &str = "\
commands:
  search <text>       search the dish list
  suggest <text>      ask for search suggestions
  open <id>           open a dish from the list
  add <id>            add a listed dish to the cart
  more | less         change portions (dish screen)
  like                toggle like (dish screen)
  take                add the open dish to the cart
  review <1-5> <text> send a review for the open dish
  cart                go to the cart
  inc <id> | dec <id> change counts (cart screen)
  remove <id>         ask to remove an item (cart screen)
  yes | no            answer the remove confirmation
  order               send the order (cart screen)
  back                navigate back
  quit                save and exit";

async fn repl(store: &Store, host: &ShutdownHandle) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");
    // give the cold-start effects a moment to populate the landing screen
    tokio::time::sleep(Duration::from_millis(50)).await;
    render(&store.current());

    loop {
        tokio::select! {
            _ = host.wait() => break,
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !apply(store, line.trim()) {
                    break;
                }
                // let feedback messages fold before rendering
                tokio::time::sleep(Duration::from_millis(50)).await;
                render(&store.current());
            }
        }
    }
    Ok(())
}

/// Translate one prompt line into a message. Returns false on quit.
fn apply(store: &Store, line: &str) -> bool {
    let (cmd, rest) = match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };
    let state = store.current();

    match (cmd, rest) {
        ("quit", _) => return false,
        ("help", _) | ("", _) => println!("{HELP}"),

        ("search", query) => store.submit(Msg::Dishes(dishes::Msg::SearchSubmit {
            query: query.to_string(),
        })),
        ("suggest", query) => store.submit(Msg::Dishes(dishes::Msg::UpdateSuggestionResult {
            query: query.to_string(),
        })),
        ("open", id) => match listed_dish_title(&state, id) {
            Some(title) => store.submit(Msg::Dishes(dishes::Msg::ClickDish {
                id: id.to_string(),
                title,
            })),
            None => println!("no dish '{id}' on screen"),
        },
        ("add", id) => match listed_dish_title(&state, id) {
            Some(title) => store.submit(Msg::Dishes(dishes::Msg::AddToCart {
                id: id.to_string(),
                title,
            })),
            None => println!("no dish '{id}' on screen"),
        },

        ("more", _) => store.submit(Msg::Dish(dish::Msg::IncrementCount)),
        ("less", _) => store.submit(Msg::Dish(dish::Msg::DecrementCount)),
        ("like", _) => store.submit(Msg::Dish(dish::Msg::ToggleLike)),
        ("take", _) => store.submit(Msg::Dish(dish::Msg::AddToCart)),
        ("review", rest) => match rest.split_once(' ') {
            Some((rating, text)) => match rating.parse::<u8>() {
                Ok(rating @ 1..=5) => store.submit(Msg::Dish(dish::Msg::SendReview {
                    rating,
                    text: text.trim().to_string(),
                })),
                _ => println!("rating must be 1-5"),
            },
            None => println!("usage: review <1-5> <text>"),
        },

        ("cart", _) => store.submit(Msg::Navigate(NavigateCommand::ToCart)),
        ("back", _) => store.submit(Msg::Navigate(NavigateCommand::ToBack)),

        ("inc", id) => store.submit(Msg::Cart(cart::Msg::IncrementCount { id: id.to_string() })),
        ("dec", id) => store.submit(Msg::Cart(cart::Msg::DecrementCount { id: id.to_string() })),
        ("remove", id) => match carted_item_title(&state, id) {
            Some(title) => store.submit(Msg::Cart(cart::Msg::ShowConfirm {
                id: id.to_string(),
                title,
            })),
            None => println!("no item '{id}' in the cart"),
        },
        ("yes", _) => match open_confirm_id(&state) {
            Some(id) => store.submit(Msg::Cart(cart::Msg::RemoveFromCart { id })),
            None => println!("nothing to confirm"),
        },
        ("no", _) => store.submit(Msg::Cart(cart::Msg::HideConfirm)),
        ("order", _) => match cart_order(&state) {
            Some(order) => store.submit(Msg::Cart(cart::Msg::SendOrder { order })),
            None => println!("cart is empty"),
        },

        _ => println!("unknown command, try 'help'"),
    }
    true
}

fn listed_dish_title(state: &RootState, id: &str) -> Option<String> {
    if let ScreenState::Dishes(state) = state.current() {
        if let DishesUiState::Content(items) = &state.ui_state {
            return items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.title.clone());
        }
    }
    None
}

fn carted_item_title(state: &RootState, id: &str) -> Option<String> {
    if let ScreenState::Cart(state) = state.current() {
        if let CartUiState::Content(items) = &state.ui_state {
            return items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.title.clone());
        }
    }
    None
}

fn open_confirm_id(state: &RootState) -> Option<String> {
    if let ScreenState::Cart(state) = state.current() {
        if let ConfirmDialogState::Show { id, .. } = &state.confirm_dialog {
            return Some(id.clone());
        }
    }
    None
}

fn cart_order(state: &RootState) -> Option<BTreeMap<String, u32>> {
    if let ScreenState::Cart(state) = state.current() {
        if let CartUiState::Content(items) = &state.ui_state {
            return Some(
                items
                    .iter()
                    .map(|item| (item.id.clone(), item.count))
                    .collect(),
            );
        }
    }
    None
}

fn render(state: &RootState) {
    let screen = state.current();
    println!("── {} (cart: {})", screen.title(), state.cart_count);

    match screen {
        ScreenState::Dishes(state) => {
            if state.is_search || !state.input.is_empty() {
                println!("   search: '{}'", state.input);
            }
            for (name, count) in &state.suggestions {
                println!("   ? {name} ({count})");
            }
            match &state.ui_state {
                DishesUiState::Loading => println!("   loading..."),
                DishesUiState::Empty => println!("   nothing here"),
                DishesUiState::Content(items) => {
                    for item in items {
                        println!("   [{}] {} - {}", item.id, item.title, item.price);
                    }
                }
                DishesUiState::Error(message) => println!("   error: {message}"),
            }
        }

        ScreenState::Dish(state) => {
            let liked = if state.is_liked { "  (liked)" } else { "" };
            match &state.ui_state {
                DishUiState::Loading => println!("   loading..."),
                DishUiState::Content(content) => {
                    println!("   {}", content.description);
                    match content.old_price {
                        Some(old) => {
                            println!("   {} (was {}) x {}{}", content.price, old, state.count, liked)
                        }
                        None => println!("   {} x {}{}", content.price, state.count, liked),
                    }
                }
                DishUiState::Error(message) => println!("   error: {message}"),
            }
            match &state.reviews {
                ReviewUiState::Loading => println!("   reviews loading..."),
                ReviewUiState::Empty => println!("   no reviews yet"),
                ReviewUiState::Content(reviews) | ReviewUiState::ContentWhileLoading(reviews) => {
                    for review in reviews {
                        println!("   {}* {} - {}", review.rating, review.author, review.text);
                    }
                }
            }
        }

        ScreenState::Cart(state) => {
            match &state.ui_state {
                CartUiState::Empty => println!("   cart is empty"),
                CartUiState::Loading => println!("   loading..."),
                CartUiState::Content(items) => {
                    let total: u32 = items.iter().map(|item| item.price * item.count).sum();
                    for item in items {
                        println!(
                            "   [{}] {} - {} x {}",
                            item.id, item.title, item.price, item.count
                        );
                    }
                    println!("   total: {total}");
                }
                CartUiState::Error(message) => println!("   error: {message}"),
            }
            if let ConfirmDialogState::Show { title, .. } = &state.confirm_dialog {
                println!("   remove {title} from the cart? (yes/no)");
            }
        }
    }
}
