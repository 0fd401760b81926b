use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;

/// The three kinds of item the catalog holds.
///
/// Searches and removals visit books, then toys, then stationery; see
/// [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Book,
    Toy,
    Stationery,
}

impl Category {
    /// All categories in lookup priority order.
    pub const ALL: [Category; 3] = [Category::Book, Category::Toy, Category::Stationery];

    /// The keyword used for this category in command files.
    pub fn keyword(&self) -> &'static str {
        match self {
            Category::Book => "Book",
            Category::Toy => "Toy",
            Category::Stationery => "Stationery",
        }
    }

    /// Label of the category-specific attribute (author, color or kind).
    pub fn attribute_label(&self) -> &'static str {
        match self {
            Category::Book => "Author",
            Category::Toy => "Color",
            Category::Stationery => "Kind",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.keyword() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("not a number ({0})")]
    NotANumber(#[from] ParseFloatError),

    #[error("price must be finite")]
    NotFinite,
}

/// An item price. Any finite number is accepted, negatives included.
///
/// Displays with one mandatory and one optional fractional digit:
/// `9` is `9.0`, `9.50` is `9.5`, `9.55` stays `9.55`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }
        // Collapse -0.0 so it never renders with a sign.
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Price::new(s.trim().parse::<f64>()?)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = format!("{:.2}", self.0);
        if text.ends_with('0') {
            text.pop();
        }
        f.write_str(&text)
    }
}

/// A catalog entry.
///
/// `extra` holds the category-specific attribute: the author of a book,
/// the color of a toy or the kind of a stationery item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    category: Category,
    name: String,
    extra: String,
    barcode: String,
    price: Price,
}

impl Item {
    pub fn new(
        category: Category,
        name: impl Into<String>,
        extra: impl Into<String>,
        barcode: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            extra: extra.into(),
            barcode: barcode.into(),
            price,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// The one-line description written to the output file.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of the {} is {}. Its barcode is {} and its price is {}",
            self.category.attribute_label(),
            self.name,
            self.extra,
            self.barcode,
            self.price
        )
    }
}
