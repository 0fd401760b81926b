//! # Storage Layer
//!
//! This module defines the per-category store abstraction. The [`ItemStore`] trait
//! is the seam between the command layer and however items are held.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `Vec`-backed store, the only one shelf ships.
//!   Items live for the duration of a run and are discarded at exit.
//!
//! ## The Catalog
//!
//! A [`Catalog`] owns one store per [`Category`]. Every cross-store operation
//! visits the stores in [`Category::ALL`] order (books, toys, stationery), and
//! searches stop at the first match. Callers that need that order should go
//! through [`Catalog::stores`] or [`Catalog::find`] rather than picking stores
//! by hand.

use crate::model::{Category, Item};

pub mod memory;

/// An ordered collection of items of a single category.
///
/// Insertion order is preserved and is both display order and search order.
/// None of the operations fail: absence is `None` or `false`.
pub trait ItemStore {
    /// The category this store holds.
    fn category(&self) -> Category;

    /// Append an item. Barcodes are not checked for uniqueness.
    fn add(&mut self, item: Item);

    /// Remove every item with this barcode. Returns true if any was removed.
    fn remove(&mut self, barcode: &str) -> bool;

    /// First item with this barcode, in insertion order.
    fn search_by_barcode(&self, barcode: &str) -> Option<&Item>;

    /// First item with this display name, in insertion order.
    fn search_by_name(&self, name: &str) -> Option<&Item>;

    /// All items in insertion order.
    fn list(&self) -> &[Item];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One store per category, probed in priority order.
#[derive(Debug)]
pub struct Catalog<S: ItemStore> {
    books: S,
    toys: S,
    stationery: S,
}

impl<S: ItemStore> Catalog<S> {
    /// Build a catalog from three stores. Each store must hold the category
    /// of the slot it is placed in.
    pub fn with_stores(books: S, toys: S, stationery: S) -> Self {
        debug_assert_eq!(books.category(), Category::Book);
        debug_assert_eq!(toys.category(), Category::Toy);
        debug_assert_eq!(stationery.category(), Category::Stationery);
        Self {
            books,
            toys,
            stationery,
        }
    }

    pub fn store(&self, category: Category) -> &S {
        match category {
            Category::Book => &self.books,
            Category::Toy => &self.toys,
            Category::Stationery => &self.stationery,
        }
    }

    pub fn store_mut(&mut self, category: Category) -> &mut S {
        match category {
            Category::Book => &mut self.books,
            Category::Toy => &mut self.toys,
            Category::Stationery => &mut self.stationery,
        }
    }

    /// The three stores in lookup priority order.
    pub fn stores(&self) -> impl Iterator<Item = &S> {
        Category::ALL.into_iter().map(move |c| self.store(c))
    }

    /// Probe each store in priority order and return the first hit.
    pub fn find<'a, F>(&'a self, probe: F) -> Option<&'a Item>
    where
        F: FnMut(&'a S) -> Option<&'a Item>,
    {
        self.stores().find_map(probe)
    }

    /// Total number of items across all stores.
    pub fn len(&self) -> usize {
        self.stores().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::memory::fixtures::CatalogFixture;
    use super::*;

    #[test]
    fn stores_iterate_in_priority_order() {
        let catalog = CatalogFixture::new().catalog;
        let order: Vec<Category> = catalog.stores().map(|s| s.category()).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn find_prefers_books_over_later_stores() {
        let catalog = CatalogFixture::new()
            .with_stationery("Pad", "Lined", "X1", "2")
            .with_toy("Kite", "Blue", "X1", "8")
            .with_book("Emma", "Austen", "X1", "5")
            .catalog;

        let hit = catalog.find(|s| s.search_by_barcode("X1")).unwrap();
        assert_eq!(hit.category(), Category::Book);
        assert_eq!(hit.name(), "Emma");
    }

    #[test]
    fn find_falls_through_to_later_stores() {
        let catalog = CatalogFixture::new()
            .with_book("Emma", "Austen", "B1", "5")
            .with_stationery("Pad", "Lined", "S1", "2")
            .catalog;

        let hit = catalog.find(|s| s.search_by_barcode("S1")).unwrap();
        assert_eq!(hit.category(), Category::Stationery);
        assert!(catalog.find(|s| s.search_by_barcode("nope")).is_none());
    }

    #[test]
    fn len_counts_every_store() {
        let catalog = CatalogFixture::new()
            .with_book("Emma", "Austen", "B1", "5")
            .with_toy("Kite", "Blue", "T1", "8")
            .with_toy("Ball", "Red", "T2", "3")
            .catalog;
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.store(Category::Toy).len(), 2);
        assert!(catalog.store(Category::Stationery).is_empty());
    }
}
