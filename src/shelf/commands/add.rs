use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Item;
use crate::store::{Catalog, ItemStore};

/// Append an item to the store of its category. Produces no output.
pub fn run<S: ItemStore>(catalog: &mut Catalog<S>, item: Item) -> Result<CmdResult> {
    catalog.store_mut(item.category()).add(item.clone());
    Ok(CmdResult::default().with_affected_items(vec![item]))
}
