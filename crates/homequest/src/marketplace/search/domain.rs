use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::marketplace::listings::PropertyType;

/// Result ordering selected on the search screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Recent,
    PriceAsc,
    PriceDesc,
    SizeDesc,
    Popular,
}

impl SortKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recent => "Most Recent",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::SizeDesc => "Size: Largest First",
            Self::Popular => "Most Popular",
        }
    }
}

/// Property-type constraint; `Any` is the "All" chip in the filter sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    Any,
    Only(PropertyType),
}

impl TypeFilter {
    pub fn allows(self, property_type: PropertyType) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == property_type,
        }
    }
}

/// Inclusive monthly price bounds in minor units. A `max` of zero comes from
/// the open-ended chips ("10M+") and means unbounded, same as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub min: i64,
    #[serde(default)]
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn contains(&self, price_minor: i64) -> bool {
        price_minor >= self.min && self.upper().map_or(true, |hi| price_minor <= hi)
    }

    fn upper(&self) -> Option<i64> {
        self.max.filter(|hi| *hi != 0)
    }

    pub fn is_constrained(&self) -> bool {
        self.min > 0 || self.upper().is_some()
    }
}

/// Inclusive floor-area bounds in square meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaRange {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

impl AreaRange {
    pub fn contains(&self, area_sqm: f64) -> bool {
        area_sqm >= self.min && self.max.map_or(true, |hi| area_sqm <= hi)
    }

    pub fn is_constrained(&self) -> bool {
        self.min > 0.0 || self.max.is_some()
    }
}

/// Every active constraint of one search interaction. Each UI change builds a
/// fresh spec; defaults impose no constraint, and all constraints are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive substring match against title and location.
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub property_type: TypeFilter,
    #[serde(default)]
    pub price_range: PriceRange,
    /// Lower bound; zero is the "Any" chip.
    #[serde(default)]
    pub min_bedrooms: u32,
    #[serde(default)]
    pub min_bathrooms: u32,
    #[serde(default)]
    pub area_range: AreaRange,
    /// A record matches only if its amenity set is a superset of these tags.
    #[serde(default)]
    pub required_amenities: BTreeSet<String>,
    #[serde(default)]
    pub sort_key: SortKey,
}

impl FilterSpec {
    /// Spec that matches everything in catalog order.
    pub fn unconstrained() -> Self {
        Self::default()
    }
}
