//! The interactive menu loop.
//!
//! A [`Session`] owns the backpack, a line reader and an output sink. It runs
//! one operation at a time to completion and only ever blocks on input.
//! Inventory errors are shown to the user and the loop carries on; only I/O
//! failures end a session early.

use std::io::{BufRead, Write};

use anyhow::Context;
use mochila_common::error::{InventoryError, ValidationError};
use mochila_common::item::{self, Item};
use tracing::{debug, info_span};

use crate::input::LineReader;
use crate::inventory::Inventory;
use crate::menu::{MenuError, MenuOption};
use crate::view;

pub struct Session<R, W> {
    inventory: Inventory,
    input: LineReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self::with_inventory(Inventory::new(), input, out)
    }

    pub fn with_inventory(inventory: Inventory, input: R, out: W) -> Self {
        Self {
            inventory,
            input: LineReader::new(input),
            out,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Hands back the output sink, mostly so tests can inspect the transcript.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the menu until the user picks `0` or input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            view::menu(&mut self.out)?;

            let Some(line) = self.input.read_line().context("failed to read menu choice")? else {
                debug!("end of input, closing session");
                writeln!(self.out)?;
                view::farewell(&mut self.out)?;
                return Ok(());
            };

            let choice = line
                .map_err(MenuError::Unreadable)
                .and_then(|line| line.parse::<MenuOption>());

            match choice {
                Ok(MenuOption::Exit) => {
                    view::farewell(&mut self.out)?;
                    return Ok(());
                }
                Ok(option) => self.dispatch(option)?,
                Err(err) => {
                    debug!(%err, "rejected menu choice");
                    view::failure(&mut self.out, &err)?;
                    writeln!(self.out)?;
                }
            }
        }
    }

    /// Runs one operation and prints the listing afterwards.
    pub fn dispatch(&mut self, option: MenuOption) -> anyhow::Result<()> {
        let span = info_span!("operation", ?option);
        let _guard = span.enter();

        let outcome = match option {
            MenuOption::Insert => self.insert()?,
            MenuOption::Remove => self.remove()?,
            MenuOption::Search => self.search()?,
            MenuOption::List | MenuOption::Exit => Ok(()),
        };

        if let Err(err) = outcome {
            debug!(%err, "operation rejected");
            view::failure(&mut self.out, &err)?;
        }

        view::listing(&mut self.out, &self.inventory)?;
        Ok(())
    }

    fn insert(&mut self) -> anyhow::Result<Result<(), InventoryError>> {
        if self.inventory.is_full() {
            return Ok(Err(InventoryError::CapacityExceeded {
                capacity: self.inventory.capacity(),
            }));
        }

        let item = match self.read_item()? {
            Ok(item) => item,
            Err(err) => return Ok(Err(err.into())),
        };

        if let Err(err) = self.inventory.push(item) {
            return Ok(Err(err));
        }
        view::success(&mut self.out, "Item added to the backpack!")?;
        Ok(Ok(()))
    }

    /// Prompts for each field in turn, stopping at the first bad one.
    fn read_item(&mut self) -> anyhow::Result<Result<Item, ValidationError>> {
        let name = match self
            .ask("Item name: ")?
            .and_then(|name| item::validate_name(&name).map(|()| name))
        {
            Ok(name) => name,
            Err(err) => return Ok(Err(err)),
        };

        let category = match self
            .ask("Item category (e.g. weapon, ammo, healing, tool): ")?
            .and_then(|category| item::validate_category(&category).map(|()| category))
        {
            Ok(category) => category,
            Err(err) => return Ok(Err(err)),
        };

        let quantity = match self
            .ask("Quantity: ")?
            .and_then(|raw| item::parse_quantity(&raw))
        {
            Ok(quantity) => quantity,
            Err(err) => return Ok(Err(err)),
        };

        Ok(Item::new(name, category, i64::from(quantity)))
    }

    fn remove(&mut self) -> anyhow::Result<Result<(), InventoryError>> {
        if self.inventory.is_empty() {
            return Ok(Err(InventoryError::EmptyInventory));
        }

        let name = match self.ask("Name of the item to remove: ")? {
            Ok(name) => name,
            Err(err) => return Ok(Err(err.into())),
        };
        match self.inventory.remove(&name) {
            Ok(_) => {
                view::success(&mut self.out, "Item removed.")?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn search(&mut self) -> anyhow::Result<Result<(), InventoryError>> {
        if self.inventory.is_empty() {
            return Ok(Err(InventoryError::EmptyInventory));
        }

        let name = match self.ask("Name of the item to search for: ")? {
            Ok(name) => name,
            Err(err) => return Ok(Err(err.into())),
        };
        match self.inventory.search(&name) {
            Ok(found) => {
                view::found(&mut self.out, found)?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    /// Prompts and reads one line. End of input counts as an empty answer.
    fn ask(&mut self, question: &str) -> anyhow::Result<Result<String, ValidationError>> {
        view::prompt(&mut self.out, question)?;
        let answer = self
            .input
            .read_line()
            .context("failed to read from input")?
            .unwrap_or_else(|| Ok(String::new()));
        Ok(answer)
    }
}
