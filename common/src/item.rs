//! # Item Model
//!
//! A single entry in the backpack. Fields are validated once, in
//! [`Item::new`], so every `Item` in existence satisfies the limits below.

use std::fmt;

use crate::error::ValidationError;

/// Longest accepted item name, in characters.
pub const MAX_NAME_LEN: usize = 29;
/// Longest accepted category, in characters.
pub const MAX_CATEGORY_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    category: String,
    quantity: u32,
}

impl Item {
    /// Builds an item, rejecting empty or over-long text and negative quantities.
    ///
    /// Name and category are checked before quantity so the first problem the
    /// user typed is the one reported.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();

        validate_name(&name)?;
        validate_category(&category)?;
        let quantity = validate_quantity(quantity)?;

        Ok(Self {
            name,
            category,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Category: {} | Quantity: {}",
            self.name, self.category, self.quantity
        )
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::CategoryTooLong {
            max: MAX_CATEGORY_LEN,
        });
    }
    Ok(())
}

pub fn validate_quantity(quantity: i64) -> Result<u32, ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity(quantity));
    }
    u32::try_from(quantity).map_err(|_| ValidationError::QuantityTooLarge(quantity))
}

/// Parses a quantity typed by the user. Surrounding whitespace is ignored.
pub fn parse_quantity(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    validate_quantity(value)
}
