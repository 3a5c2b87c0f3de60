use std::io::Cursor;

use mochila_core::{Inventory, Session};

pub struct Transcript {
    pub inventory: Inventory,
    pub text: String,
}

impl Transcript {
    /// Item lines of every listing printed, in order. Each inner vec is one listing.
    pub fn listings(&self) -> Vec<Vec<String>> {
        let mut listings = Vec::new();
        let mut current: Option<Vec<String>> = None;

        for line in self.text.lines() {
            if line.contains("⟦ BACKPACK") {
                current = Some(Vec::new());
            } else if line.starts_with('─') {
                if let Some(done) = current.take() {
                    listings.push(done);
                }
            } else if let Some(lines) = current.as_mut() {
                if line != "(empty)" {
                    lines.push(line.to_string());
                }
            }
        }
        listings
    }

    pub fn last_listing(&self) -> Vec<String> {
        self.listings().pop().unwrap_or_default()
    }
}

/// Feeds `lines` to a fresh session, one per line, and runs it to completion.
pub fn run(lines: &[&str]) -> Transcript {
    run_with(Inventory::new(), lines)
}

pub fn run_with(inventory: Inventory, lines: &[&str]) -> Transcript {
    colored::control::set_override(false);

    let mut script = lines.join("\n");
    script.push('\n');

    let mut session = Session::with_inventory(inventory, Cursor::new(script), Vec::new());
    session.run().expect("session should only fail on I/O errors");

    let inventory = session.inventory().clone();
    let text = String::from_utf8(session.into_output()).expect("output is UTF-8");
    Transcript { inventory, text }
}

/// Menu keystrokes that add one item.
pub fn add<'a>(name: &'a str, category: &'a str, quantity: &'a str) -> [&'a str; 4] {
    ["1", name, category, quantity]
}
