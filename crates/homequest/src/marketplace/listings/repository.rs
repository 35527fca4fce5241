use serde::{Deserialize, Serialize};

use super::domain::{ListingId, ListingStatus, PropertyRecord};

/// Catalog entry pairing the immutable record with its lifecycle metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub record: PropertyRecord,
    pub status: ListingStatus,
    /// Account that published the listing; seeded data has no owner.
    pub realtor: Option<String>,
}

impl CatalogEntry {
    pub fn published(record: PropertyRecord, realtor: Option<String>) -> Self {
        Self {
            record,
            status: ListingStatus::Active,
            realtor,
        }
    }

    pub fn summary(&self) -> ListingSummaryView {
        ListingSummaryView {
            listing_id: self.record.id.clone(),
            title: self.record.title.clone(),
            location: self.record.location.clone(),
            price_minor: self.record.price_minor,
            status: self.status.label(),
            featured: self.record.featured,
        }
    }
}

/// Storage abstraction so services and routers can be exercised in isolation.
pub trait CatalogRepository: Send + Sync {
    fn insert(&self, entry: CatalogEntry) -> Result<CatalogEntry, CatalogError>;
    fn update_status(&self, id: &ListingId, status: ListingStatus) -> Result<(), CatalogError>;
    fn fetch(&self, id: &ListingId) -> Result<Option<CatalogEntry>, CatalogError>;
    /// Snapshot of searchable records in arrival order. Arrival order is what
    /// the `recent` sort preserves, so implementations must keep it stable.
    fn active_records(&self) -> Result<Vec<PropertyRecord>, CatalogError>;
    fn all_entries(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
}

/// Error enumeration for catalog storage failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("listing already exists")]
    Conflict,
    #[error("listing not found")]
    NotFound,
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized listing representation for management screens and API payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ListingSummaryView {
    pub listing_id: ListingId,
    pub title: String,
    pub location: String,
    pub price_minor: i64,
    pub status: &'static str,
    pub featured: bool,
}
