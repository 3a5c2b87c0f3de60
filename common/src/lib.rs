//! Shared building blocks for the `mochila` workspace.
//!
//! * [`item`]: the `Item` record and its field limits.
//! * [`error`]: the error taxonomy reported back to the user.
//! * [`config`]: runtime switches collected from the command line.

pub mod config;
pub mod error;
pub mod item;
