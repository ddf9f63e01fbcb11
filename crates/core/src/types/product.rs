//! Catalog product types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Money, ProductId};

/// Top-level shop department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Accessories,
}

impl Category {
    /// Every department, in navigation order.
    pub const ALL: [Self; 3] = [Self::Men, Self::Women, Self::Accessories];

    /// URL slug (`/shop/men`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Accessories => "accessories",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "accessories" => Ok(Self::Accessories),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

/// A product in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Money,
    /// Primary image URL used on listing cards and cart lines.
    pub image: String,
    pub slug: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    /// Gallery images for the detail page; the first is the hero shot.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Gallery images, falling back to the primary image when none are set.
    #[must_use]
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// First ~160 characters of the description, cut at a word boundary.
    #[must_use]
    pub fn summary(&self) -> String {
        const MAX: usize = 160;
        if self.description.chars().count() <= MAX {
            return self.description.clone();
        }
        let cut: String = self.description.chars().take(MAX).collect();
        let trimmed = cut.rsplit_once(' ').map_or(cut.as_str(), |(head, _)| head);
        format!("{trimmed}…")
    }
}
