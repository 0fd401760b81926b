//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for catalog operations. It owns the [`Catalog`] for the duration of a run,
//! so there is no process-wide state: one `ShelfApi` is one run.
//!
//! The API does not format text or touch streams. It returns [`CmdResult`] values
//! that [`crate::render`] lays out and [`crate::runner`] writes.
//!
//! `ShelfApi<S: ItemStore>` is generic over the store, with
//! `ShelfApi<InMemoryStore>` being what the binary uses.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::script::Command;
use crate::store::memory::InMemoryStore;
use crate::store::{Catalog, ItemStore};

pub struct ShelfApi<S: ItemStore> {
    catalog: Catalog<S>,
}

impl ShelfApi<InMemoryStore> {
    /// An API over an empty in-memory catalog.
    pub fn in_memory() -> Self {
        Self::new(Catalog::new())
    }
}

impl<S: ItemStore> ShelfApi<S> {
    pub fn new(catalog: Catalog<S>) -> Self {
        Self { catalog }
    }

    /// Dispatch a parsed command to its command module.
    pub fn execute(&mut self, command: Command) -> Result<CmdResult> {
        match command {
            Command::Add(item) => self.add_item(item),
            Command::Remove { barcode } => self.remove_item(&barcode),
            Command::SearchByBarcode { barcode } => self.search_by_barcode(&barcode),
            Command::SearchByName { name } => self.search_by_name(&name),
            Command::Display => self.display(),
        }
    }

    pub fn add_item(&mut self, item: Item) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, item)
    }

    pub fn remove_item(&mut self, barcode: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.catalog, barcode)
    }

    pub fn search_by_barcode(&self, barcode: &str) -> Result<CmdResult> {
        commands::search::by_barcode(&self.catalog, barcode)
    }

    pub fn search_by_name(&self, name: &str) -> Result<CmdResult> {
        commands::search::by_name(&self.catalog, name)
    }

    pub fn display(&self) -> Result<CmdResult> {
        commands::display::run(&self.catalog)
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }
}

pub use crate::commands::{CmdMessage, Heading};
