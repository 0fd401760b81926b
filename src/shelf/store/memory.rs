use super::{Catalog, ItemStore};
use crate::model::{Category, Item};

/// In-memory store for one category.
/// Does NOT persist data.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    category: Category,
    items: Vec<Item>,
}

impl InMemoryStore {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            items: Vec::new(),
        }
    }
}

impl ItemStore for InMemoryStore {
    fn category(&self) -> Category {
        self.category
    }

    fn add(&mut self, item: Item) {
        debug_assert_eq!(
            item.category(),
            self.category,
            "item added to the wrong store"
        );
        self.items.push(item);
    }

    fn remove(&mut self, barcode: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.barcode() != barcode);
        self.items.len() != before
    }

    fn search_by_barcode(&self, barcode: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.barcode() == barcode)
    }

    fn search_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    fn list(&self) -> &[Item] {
        &self.items
    }
}

impl Catalog<InMemoryStore> {
    /// A catalog with three empty in-memory stores.
    pub fn new() -> Self {
        Self::with_stores(
            InMemoryStore::new(Category::Book),
            InMemoryStore::new(Category::Toy),
            InMemoryStore::new(Category::Stationery),
        )
    }
}

impl Default for Catalog<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Price;

    pub struct CatalogFixture {
        pub catalog: Catalog<InMemoryStore>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::new(),
            }
        }

        pub fn with_item(
            mut self,
            category: Category,
            name: &str,
            extra: &str,
            barcode: &str,
            price: &str,
        ) -> Self {
            let price: Price = price.parse().expect("fixture price must parse");
            self.catalog
                .store_mut(category)
                .add(Item::new(category, name, extra, barcode, price));
            self
        }

        pub fn with_book(self, name: &str, author: &str, barcode: &str, price: &str) -> Self {
            self.with_item(Category::Book, name, author, barcode, price)
        }

        pub fn with_toy(self, name: &str, color: &str, barcode: &str, price: &str) -> Self {
            self.with_item(Category::Toy, name, color, barcode, price)
        }

        pub fn with_stationery(self, name: &str, kind: &str, barcode: &str, price: &str) -> Self {
            self.with_item(Category::Stationery, name, kind, barcode, price)
        }
    }
}
