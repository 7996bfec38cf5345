//! Rental categories.

use serde::{Deserialize, Serialize};

/// Error returned when a category name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// A rental category shown on the marketing page and used to filter the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Bikes,
    Cars,
    Homes,
    Villas,
    Gadgets,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Bikes,
        Self::Cars,
        Self::Homes,
        Self::Villas,
        Self::Gadgets,
    ];

    /// Display name, also the value the browse filter compares against.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bikes => "Bikes",
            Self::Cars => "Cars",
            Self::Homes => "Homes",
            Self::Villas => "Villas",
            Self::Gadgets => "Gadgets",
        }
    }

    /// One-line blurb for the category card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bikes => "Two-wheelers for your daily commute",
            Self::Cars => "Luxury cars to budget-friendly options",
            Self::Homes => "Comfortable stays for any duration",
            Self::Villas => "Luxury getaways and vacation rentals",
            Self::Gadgets => "Latest tech for your projects",
        }
    }

    /// Parse a category card's slug (`"bikes"`, `"cars"`, ...).
    ///
    /// The first letter is capitalised and the result must then be an exact
    /// display name, so `"bikes"` and `"Bikes"` work but `"BIKES"` does not.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError`] if the capitalised slug is not a category.
    pub fn from_slug(slug: &str) -> Result<Self, CategoryError> {
        let mut chars = slug.chars();
        let capitalised = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        capitalised.parse()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}
