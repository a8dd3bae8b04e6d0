//! Reference dispatcher backed by an in-memory catalog and cart.
//!
//! Executes every effect without real I/O: catalog queries answer from
//! a fixed menu, cart mutations update a map, navigation and counter
//! sync feed straight back as messages. Used by the demo binary and the
//! loop-level integration tests.

use std::collections::BTreeMap;
use std::future::Future;

use parking_lot::Mutex;

use tracing::info;

use crate::root::{Command, Eff, Msg, Notification};
use crate::screens::cart::{self, CartItem};
use crate::screens::dish::{self, DishContent, Review};
use crate::screens::dishes::{self, DishItem};
use crate::shutdown::ShutdownHandle;

use super::{EffHandler, Emitter};

pub struct InMemoryDispatcher {
    catalog: Vec<DishContent>,
    reviews: Mutex<BTreeMap<String, Vec<Review>>>,
    /// Cart contents as dish id -> portion count.
    cart: Mutex<BTreeMap<String, u32>>,
    host: ShutdownHandle,
}

impl InMemoryDispatcher {
    pub fn new(catalog: Vec<DishContent>, host: ShutdownHandle) -> Self {
        Self {
            catalog,
            reviews: Mutex::new(BTreeMap::new()),
            cart: Mutex::new(BTreeMap::new()),
            host,
        }
    }

    /// Dispatcher over a small built-in menu.
    pub fn sample(host: ShutdownHandle) -> Self {
        let menu = [
            ("1", "Margherita", "Tomato, mozzarella, basil", 100, Some(120)),
            ("2", "Pepperoni", "Tomato, mozzarella, pepperoni", 120, None),
            ("3", "Four Cheese Pizza", "Mozzarella, gorgonzola, parmesan, emmental", 130, None),
            ("4", "Pizza Calzone", "Folded pizza with ham and ricotta", 140, Some(160)),
            ("5", "Caesar Salad", "Romaine, chicken, parmesan, croutons", 90, None),
            ("6", "Greek Salad", "Tomato, cucumber, feta, olives", 80, None),
            ("7", "Lemonade", "House-made, 0.5 l", 40, None),
        ];
        let catalog = menu
            .into_iter()
            .map(|(id, title, description, price, old_price)| DishContent {
                id: id.to_string(),
                image: format!("https://menu.example/{id}.jpg"),
                title: title.to_string(),
                description: description.to_string(),
                price,
                old_price,
            })
            .collect();

        let dispatcher = Self::new(catalog, host);
        dispatcher.reviews.lock().insert(
            "1".to_string(),
            vec![
                Review {
                    author: "ann".to_string(),
                    rating: 5,
                    text: "Best margherita in town".to_string(),
                },
                Review {
                    author: "bob".to_string(),
                    rating: 4,
                    text: "Solid, would order again".to_string(),
                },
            ],
        );
        dispatcher
    }

    fn find_all(&self) -> Vec<DishItem> {
        self.catalog.iter().map(to_item).collect()
    }

    /// Blank query returns the whole catalog, matching the data-layer
    /// contract of `SearchDishes`.
    fn search(&self, query: &str) -> Vec<DishItem> {
        let query = query.trim();
        if query.is_empty() {
            return self.find_all();
        }
        self.catalog
            .iter()
            .filter(|dish| find_ignore_ascii_case(&dish.title, query).is_some())
            .map(to_item)
            .collect()
    }

    /// Group matching dishes by the title prefix extended to the end of
    /// the word the query lands in, counting dishes per short name.
    ///
    /// "che" against "Four Cheese Pizza" yields "Four Cheese"; two
    /// dishes sharing a short name merge into one entry with count 2.
    fn suggestions(&self, query: &str) -> BTreeMap<String, u32> {
        let mut suggestions = BTreeMap::new();
        let query = query.trim();
        if query.is_empty() {
            return suggestions;
        }
        for dish in &self.catalog {
            let Some(idx) = find_ignore_ascii_case(&dish.title, query) else {
                continue;
            };
            let bytes = dish.title.as_bytes();
            let mut end = idx + query.len();
            while end < bytes.len() && bytes[end] != b' ' {
                end += 1;
            }
            let short = dish.title[..end].to_string();
            *suggestions.entry(short).or_insert(0) += 1;
        }
        suggestions
    }

    fn dish(&self, id: &str) -> Option<DishContent> {
        self.catalog.iter().find(|dish| dish.id == id).cloned()
    }

    fn add_to_cart(&self, id: &str, count: u32) {
        let mut cart = self.cart.lock();
        *cart.entry(id.to_string()).or_insert(0) += count;
    }

    /// Take one portion out; the entry disappears at zero.
    fn remove_one(&self, id: &str) {
        let mut cart = self.cart.lock();
        match cart.get_mut(id) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                cart.remove(id);
            }
            None => {}
        }
    }

    /// Cart-screen decrement: the UI hides the minus button at one
    /// portion, so this never drops an entry below 1.
    fn decrement(&self, id: &str) {
        let mut cart = self.cart.lock();
        if let Some(count) = cart.get_mut(id) {
            *count = count.saturating_sub(1).max(1);
        }
    }

    fn remove_item(&self, id: &str) {
        self.cart.lock().remove(id);
    }

    fn clear_cart(&self) {
        self.cart.lock().clear();
    }

    fn cart_items(&self) -> Vec<CartItem> {
        let cart = self.cart.lock();
        cart.iter()
            .filter_map(|(id, count)| {
                self.catalog.iter().find(|dish| &dish.id == id).map(|dish| CartItem {
                    id: dish.id.clone(),
                    image: dish.image.clone(),
                    title: dish.title.clone(),
                    price: dish.price,
                    count: *count,
                })
            })
            .collect()
    }

    fn cart_count(&self) -> u32 {
        self.cart.lock().values().sum()
    }

    fn handle_dishes(&self, eff: dishes::Eff, emit: &Emitter) {
        match eff {
            dishes::Eff::FindAllDishes => emit.emit(Msg::Dishes(dishes::Msg::ShowDishes {
                dishes: self.find_all(),
            })),
            dishes::Eff::SearchDishes { query } => {
                emit.emit(Msg::Dishes(dishes::Msg::ShowDishes {
                    dishes: self.search(&query),
                }))
            }
            dishes::Eff::FindSuggestions { query } => {
                emit.emit(Msg::Dishes(dishes::Msg::ShowSuggestions {
                    suggestions: self.suggestions(&query),
                }))
            }
            dishes::Eff::AddToCart { id, .. } => {
                self.add_to_cart(&id, 1);
                emit.emit(Msg::UpdateCartCount {
                    count: self.cart_count(),
                });
            }
            dishes::Eff::RemoveFromCart { id, .. } => {
                self.remove_one(&id);
                emit.emit(Msg::UpdateCartCount {
                    count: self.cart_count(),
                });
            }
            // Routing flattens screen-level navigation before dispatch,
            // but the handler stays total over the declared variants.
            dishes::Eff::Navigate(cmd) => emit.emit(Msg::Navigate(cmd)),
        }
    }

    fn handle_dish(&self, eff: dish::Eff, emit: &Emitter) {
        match eff {
            dish::Eff::LoadDish { id } => match self.dish(&id) {
                Some(content) => emit.emit(Msg::Dish(dish::Msg::ShowDish { content })),
                None => emit.emit(Msg::Dish(dish::Msg::ShowError {
                    message: format!("dish '{id}' not found"),
                })),
            },
            dish::Eff::LoadReviews { id } => {
                let reviews = self.reviews.lock().get(&id).cloned().unwrap_or_default();
                emit.emit(Msg::Dish(dish::Msg::ShowReviews { reviews }));
            }
            dish::Eff::AddToCart { id, count } => {
                self.add_to_cart(&id, count);
                emit.emit(Msg::UpdateCartCount {
                    count: self.cart_count(),
                });
            }
            dish::Eff::SendReview { id, rating, text } => {
                let reviews = {
                    let mut all = self.reviews.lock();
                    let list = all.entry(id).or_default();
                    list.push(Review {
                        author: "you".to_string(),
                        rating,
                        text,
                    });
                    list.clone()
                };
                emit.emit(Msg::Dish(dish::Msg::ShowReviews { reviews }));
            }
        }
    }

    fn handle_cart(&self, eff: cart::Eff, emit: &Emitter) {
        match eff {
            cart::Eff::LoadCart => emit.emit(Msg::Cart(cart::Msg::ShowCart {
                items: self.cart_items(),
            })),
            cart::Eff::IncrementItem { id } => {
                self.add_to_cart(&id, 1);
                self.emit_cart(emit);
            }
            cart::Eff::DecrementItem { id } => {
                self.decrement(&id);
                self.emit_cart(emit);
            }
            cart::Eff::RemoveItem { id, title } => {
                self.remove_item(&id);
                info!(%title, "removed from cart");
                self.emit_cart(emit);
            }
            cart::Eff::SendOrder { order } => {
                info!(items = order.len(), "order sent");
                self.clear_cart();
                self.emit_cart(emit);
            }
            cart::Eff::Navigate(cmd) => emit.emit(Msg::Navigate(cmd)),
            cart::Eff::Notify(notification) => show_notification(&notification),
        }
    }

    fn emit_cart(&self, emit: &Emitter) {
        emit.emit(Msg::Cart(cart::Msg::ShowCart {
            items: self.cart_items(),
        }));
        emit.emit(Msg::UpdateCartCount {
            count: self.cart_count(),
        });
    }
}

impl EffHandler for InMemoryDispatcher {
    fn handle(&self, eff: Eff, emit: Emitter) -> impl Future<Output = anyhow::Result<()>> + Send {
        async move {
            match eff {
                Eff::Dishes(eff) => self.handle_dishes(eff, &emit),
                Eff::Dish(eff) => self.handle_dish(eff, &emit),
                Eff::Cart(eff) => self.handle_cart(eff, &emit),
                Eff::Navigate(cmd) => emit.emit(Msg::Navigate(cmd)),
                Eff::SyncCounter => emit.emit(Msg::UpdateCartCount {
                    count: self.cart_count(),
                }),
                Eff::Cmd(Command::Finish) => self.host.signal(),
                Eff::Notification(notification) => show_notification(&notification),
            }
            Ok(())
        }
    }
}

/// Project a catalog entry onto its dish-list representation.
fn to_item(dish: &DishContent) -> DishItem {
    DishItem {
        id: dish.id.clone(),
        title: dish.title.clone(),
        image: dish.image.clone(),
        price: dish.price,
    }
}

/// A real host renders these as snackbars; here they go to the log.
fn show_notification(notification: &Notification) {
    match notification {
        Notification::Text { message } => info!(%message, "notification"),
        Notification::Action { message, label, .. } => {
            info!(%message, %label, "notification with action")
        }
        Notification::Error { message, .. } => info!(%message, "error notification"),
    }
}

/// Byte-wise ASCII-case-insensitive substring search. Returns the byte
/// offset of the first match.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
