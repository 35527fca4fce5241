//! Listing catalog: publication drafts, lifecycle status, storage
//! abstraction, CSV hydration, and the search facade over active records.

pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

pub use domain::{
    DraftError, ListingDraft, ListingId, ListingStatus, PropertyRecord, PropertyType,
};
pub use import::{CatalogImporter, ImportError};
pub use repository::{CatalogEntry, CatalogError, CatalogRepository, ListingSummaryView};
pub use router::listing_router;
pub use seed::sample_catalog;
pub use service::{ListingService, ListingServiceError, SearchResults};
