use std::fmt;
use std::str::FromStr;

use mochila_common::error::ValidationError;
use thiserror::Error;

/// One entry of the main menu. The discriminant is the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit = 0,
    Insert = 1,
    Remove = 2,
    List = 3,
    Search = 4,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("invalid input '{0}', type the number of an option")]
    InvalidInput(String),
    #[error("unknown option {0}")]
    Unknown(i64),
    /// The line could not be read as text at all.
    #[error("invalid input: {0}")]
    Unreadable(ValidationError),
}

impl MenuOption {
    /// Menu entries in the order they are shown.
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Insert,
        MenuOption::Remove,
        MenuOption::List,
        MenuOption::Search,
        MenuOption::Exit,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Insert => "Add item",
            MenuOption::Remove => "Remove item by name",
            MenuOption::List => "List items",
            MenuOption::Search => "Search item by name",
            MenuOption::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.number(), self.label())
    }
}

impl FromStr for MenuOption {
    type Err = MenuError;

    /// Parses a menu choice. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| MenuError::InvalidInput(trimmed.to_string()))?;

        match number {
            0 => Ok(MenuOption::Exit),
            1 => Ok(MenuOption::Insert),
            2 => Ok(MenuOption::Remove),
            3 => Ok(MenuOption::List),
            4 => Ok(MenuOption::Search),
            other => Err(MenuError::Unknown(other)),
        }
    }
}
