use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for published listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Property categories a listing can be advertised under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Duplex,
    Penthouse,
    Studio,
    Office,
    Shop,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Apartment,
            Self::House,
            Self::Villa,
            Self::Duplex,
            Self::Penthouse,
            Self::Studio,
            Self::Office,
            Self::Shop,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Villa => "Villa",
            Self::Duplex => "Duplex",
            Self::Penthouse => "Penthouse",
            Self::Studio => "Studio",
            Self::Office => "Office",
            Self::Shop => "Shop",
        }
    }

    /// Case-insensitive lookup by display label, used by CSV import and CLI flags.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// One published listing as the search surface sees it. Records are never
/// mutated after publication; status changes live on the catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: ListingId,
    pub title: String,
    /// Monthly rent in the smallest currency unit.
    pub price_minor: i64,
    pub location: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_sqm: f64,
    pub amenities: BTreeSet<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle states shown on the listings management screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Active,
    Pending,
    Rented,
    Inactive,
}

impl ListingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Rented => "Rented",
            Self::Inactive => "Inactive",
        }
    }

    /// Only active listings are visible to property search.
    pub const fn is_searchable(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Form data collected by the add-property wizard before publication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub property_type: Option<PropertyType>,
    pub price_minor: i64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_sqm: f64,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub pet_friendly: bool,
}

impl ListingDraft {
    /// Add the tag if absent, remove it if present.
    pub fn toggle_amenity(&mut self, tag: &str) {
        if !self.amenities.remove(tag) {
            self.amenities.insert(tag.to_string());
        }
    }

    /// Validate the draft against the invariants the search engine assumes.
    /// Reports the first failing wizard field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }
        if self.property_type.is_none() {
            return Err(DraftError::MissingPropertyType);
        }
        if self.price_minor <= 0 {
            return Err(DraftError::NonPositivePrice(self.price_minor));
        }
        if !(self.area_sqm > 0.0) {
            return Err(DraftError::NonPositiveArea(self.area_sqm));
        }
        for (field, value) in [
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::IncompleteLocation { field });
            }
        }
        Ok(())
    }

    /// Convert a validated draft into an immutable property record.
    pub fn into_record(
        self,
        id: ListingId,
        created_at: DateTime<Utc>,
    ) -> Result<PropertyRecord, DraftError> {
        self.validate()?;
        let property_type = self.property_type.ok_or(DraftError::MissingPropertyType)?;

        let mut amenities = self.amenities;
        // The wizard tracks these as standalone toggles; search matches them as tags.
        if self.furnished {
            amenities.insert("Furnished".to_string());
        }
        if self.pet_friendly {
            amenities.insert("Pet Friendly".to_string());
        }

        Ok(PropertyRecord {
            id,
            title: self.title.trim().to_string(),
            price_minor: self.price_minor,
            location: format!("{}, {}", self.city.trim(), self.state.trim()),
            property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area_sqm: self.area_sqm,
            amenities,
            featured: false,
            created_at,
        })
    }
}

/// Validation errors raised before a draft becomes a published record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("listing title is required")]
    MissingTitle,
    #[error("listing description is required")]
    MissingDescription,
    #[error("a property type must be selected")]
    MissingPropertyType,
    #[error("monthly price must be positive, got {0}")]
    NonPositivePrice(i64),
    #[error("floor area must be positive, got {0}")]
    NonPositiveArea(f64),
    #[error("location field '{field}' is required")]
    IncompleteLocation { field: &'static str },
}
