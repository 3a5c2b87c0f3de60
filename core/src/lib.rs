//! # Mochila Core
//!
//! * [`inventory`]: the bounded backpack and its insert/remove/search/list operations.
//! * [`menu`]: parsing of the numbered menu choices.
//! * [`session`]: the blocking menu loop that drives an [`inventory::Inventory`].
//! * [`view`]: text rendering shared by the session.

pub mod input;
pub mod inventory;
pub mod menu;
pub mod session;
pub mod view;

pub use inventory::{CAPACITY, Inventory};
pub use menu::MenuOption;
pub use session::Session;
