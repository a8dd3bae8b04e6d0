//! Root of the state hierarchy: the screen map, the message/effect
//! unions and the routing reducer.

mod eff;
mod msg;
mod reducer;
mod state;

pub use eff::{Command, Eff, NavigateCommand, Notification};
pub use msg::Msg;
pub use reducer::{initial_effects, route_and_reduce};
pub use state::{RootState, ScreenState};
