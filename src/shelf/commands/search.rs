use crate::commands::{CmdMessage, CmdResult, Heading};
use crate::error::Result;
use crate::model::Item;
use crate::store::{Catalog, ItemStore};

pub fn by_barcode<S: ItemStore>(catalog: &Catalog<S>, barcode: &str) -> Result<CmdResult> {
    Ok(found(catalog.find(|store| store.search_by_barcode(barcode))))
}

pub fn by_name<S: ItemStore>(catalog: &Catalog<S>, name: &str) -> Result<CmdResult> {
    Ok(found(catalog.find(|store| store.search_by_name(name))))
}

fn found(hit: Option<&Item>) -> CmdResult {
    let result = CmdResult::with_heading(Heading::SearchResults);
    match hit {
        Some(item) => result.with_listed_items(vec![item.clone()]),
        None => result.with_message(CmdMessage::ItemNotFound),
    }
}
