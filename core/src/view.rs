//! Text rendering for the menu session.
//!
//! Everything here writes to a caller-supplied [`Write`] so a session can be
//! pointed at stdout or at an in-memory buffer.

use std::fmt::Display;
use std::io::{self, Write};

use colored::*;
use mochila_common::item::Item;

use crate::inventory::Inventory;
use crate::menu::MenuOption;

pub const TOTAL_WIDTH: usize = 64;

pub mod colors {
    use colored::Color;

    pub const PRIMARY: Color = Color::BrightGreen;
    pub const ACCENT: Color = Color::Cyan;
    pub const SEPARATOR: Color = Color::BrightBlack;
    pub const TEXT_DEFAULT: Color = Color::White;
}

/// `──────⟦ TITLE ⟧──────`, padded to [`TOTAL_WIDTH`].
pub fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let dash_count: usize = TOTAL_WIDTH.saturating_sub(formatted.chars().count());
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

pub fn separator_line() -> String {
    "─".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string()
}

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Menu:".bold())?;
    for option in MenuOption::ALL {
        writeln!(
            out,
            "{} {} {}",
            option.number().to_string().color(colors::ACCENT),
            "-".color(colors::SEPARATOR),
            option.label()
        )?;
    }
    prompt(out, "Choose an option: ")
}

/// Writes `text` without a newline and flushes so it shows before the read blocks.
pub fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Full listing: header with the fill level, one numbered line per item, footer.
pub fn listing(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    writeln!(out)?;
    let title = format!("backpack {}/{}", inventory.len(), inventory.capacity());
    writeln!(out, "{}", header_line(&title))?;

    if inventory.is_empty() {
        writeln!(out, "{}", "(empty)".dimmed())?;
    }
    for (idx, item) in inventory.list().iter().enumerate() {
        writeln!(out, "{} {}", format!("{})", idx + 1).color(colors::ACCENT), item)?;
    }

    writeln!(out, "{}", separator_line())?;
    writeln!(out)
}

pub fn found(out: &mut impl Write, item: &Item) -> io::Result<()> {
    success(out, "Item found:")?;
    let rows = [
        ("Name", item.name().to_string()),
        ("Category", item.category().to_string()),
        ("Quantity", item.quantity().to_string()),
    ];
    for (key, value) in rows {
        writeln!(out, "{}{} {}", key.color(colors::PRIMARY), ":".color(colors::SEPARATOR), value)?;
    }
    Ok(())
}

pub fn success(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "[+]".green().bold(), msg)
}

pub fn failure(out: &mut impl Write, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "{} {}", "[-]".red().bold(), err)
}

pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Leaving... good luck out there!".color(colors::PRIMARY))?;
    out.flush()
}
