//! Product category classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A product category as named by the remote catalog.
///
/// The catalog uses free-form lowercase strings on the wire (including the
/// misspelled `"jewelery"`), so unrecognized values round-trip through
/// [`Category::Other`] instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Jewelery,
    MensClothing,
    WomensClothing,
    /// A category string the client does not recognize, preserved verbatim.
    Other(String),
}

impl Category {
    /// The categories the catalog is known to serve, in menu order.
    pub const KNOWN: [Self; 4] = [
        Self::Electronics,
        Self::Jewelery,
        Self::MensClothing,
        Self::WomensClothing,
    ];

    /// The wire representation of this category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Electronics => "electronics",
            Self::Jewelery => "jewelery",
            Self::MensClothing => "men's clothing",
            Self::WomensClothing => "women's clothing",
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the catalog's known categories.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.as_str() {
            "electronics" => Self::Electronics,
            "jewelery" => Self::Jewelery,
            "men's clothing" => Self::MensClothing,
            "women's clothing" => Self::WomensClothing,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::from(name.to_owned())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}
