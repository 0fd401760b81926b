use crate::commands::{CmdResult, Heading};
use crate::error::Result;
use crate::store::{Catalog, ItemStore};

/// Every item, books first, then toys, then stationery, each in insertion order.
pub fn run<S: ItemStore>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let items = catalog
        .stores()
        .flat_map(|store| store.list().iter().cloned())
        .collect();
    Ok(CmdResult::with_heading(Heading::Inventory).with_listed_items(items))
}
