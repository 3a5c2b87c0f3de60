//! # Error Types
//!
//! Everything an inventory operation can refuse to do. None of these are
//! fatal: the session prints them and goes back to the menu.

use thiserror::Error;

/// A field value that can't be stored in an [`crate::item::Item`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("category cannot be empty")]
    EmptyCategory,

    #[error("name is longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("category is longer than {max} characters")]
    CategoryTooLong { max: usize },

    #[error("quantity cannot be negative (got {0})")]
    NegativeQuantity(i64),

    #[error("quantity {0} is too large")]
    QuantityTooLarge(i64),

    /// The line read from input was not valid UTF-8.
    #[error("text is not valid UTF-8")]
    NotUtf8,

    /// The raw text did not parse as an integer.
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("backpack is full, it holds at most {capacity} items")]
    CapacityExceeded { capacity: usize },

    #[error("backpack is empty")]
    EmptyInventory,

    #[error("item '{name}' not found")]
    NotFound { name: String },
}
