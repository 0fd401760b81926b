use crate::commands::{CmdMessage, CmdResult, Heading};
use crate::error::Result;
use crate::model::Category;
use crate::store::{Catalog, ItemStore};

/// Remove every item with `barcode` from every store.
///
/// All three stores are swept even after an earlier one had a match.
pub fn run<S: ItemStore>(catalog: &mut Catalog<S>, barcode: &str) -> Result<CmdResult> {
    let mut removed = false;
    for category in Category::ALL {
        removed |= catalog.store_mut(category).remove(barcode);
    }

    let message = if removed {
        CmdMessage::ItemRemoved
    } else {
        CmdMessage::ItemNotFound
    };
    Ok(CmdResult::with_heading(Heading::RemoveResults).with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn reports_not_found_on_empty_catalog() {
        let mut catalog = CatalogFixture::new().catalog;
        let result = run(&mut catalog, "XYZ").unwrap();

        assert_eq!(result.heading, Some(Heading::RemoveResults));
        assert_eq!(result.messages, vec![CmdMessage::ItemNotFound]);
    }

    #[test]
    fn removes_existing_item() {
        let mut catalog = CatalogFixture::new()
            .with_toy("Kite", "Blue", "T1", "8")
            .catalog;
        let result = run(&mut catalog, "T1").unwrap();

        assert_eq!(result.messages, vec![CmdMessage::ItemRemoved]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn sweeps_all_stores() {
        let mut catalog = CatalogFixture::new()
            .with_book("Emma", "Austen", "X1", "5")
            .with_toy("Kite", "Blue", "X1", "8")
            .with_stationery("Pad", "Lined", "X1", "2")
            .with_stationery("Pen", "Gel", "S2", "1")
            .catalog;

        let result = run(&mut catalog, "X1").unwrap();

        assert_eq!(result.messages, vec![CmdMessage::ItemRemoved]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.store(Category::Stationery).list()[0].barcode(),
            "S2"
        );
    }

    #[test]
    fn second_removal_is_not_found() {
        let mut catalog = CatalogFixture::new()
            .with_book("Emma", "Austen", "B1", "5")
            .catalog;
        run(&mut catalog, "B1").unwrap();
        let result = run(&mut catalog, "B1").unwrap();
        assert_eq!(result.messages, vec![CmdMessage::ItemNotFound]);
    }
}
