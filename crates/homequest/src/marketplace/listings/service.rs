use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::marketplace::search::{active_filter_count, evaluate, FilterSpec};

use super::domain::{DraftError, ListingDraft, ListingId, ListingStatus, PropertyRecord};
use super::repository::{CatalogEntry, CatalogError, CatalogRepository};

/// Service composing draft validation, the catalog, and the search engine.
pub struct ListingService<R> {
    catalog: Arc<R>,
}

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_listing_id() -> ListingId {
    let id = LISTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ListingId(format!("lst-{id:06}"))
}

impl<R> ListingService<R>
where
    R: CatalogRepository + 'static,
{
    pub fn new(catalog: Arc<R>) -> Self {
        Self { catalog }
    }

    /// Validate a wizard draft and publish it as an active listing.
    pub fn publish(
        &self,
        draft: ListingDraft,
        realtor: Option<String>,
    ) -> Result<CatalogEntry, ListingServiceError> {
        let record = draft.into_record(next_listing_id(), Utc::now())?;
        let entry = self.catalog.insert(CatalogEntry::published(record, realtor))?;
        info!(listing_id = %entry.record.id.0, "listing published");
        Ok(entry)
    }

    /// Move a listing through its lifecycle (Active -> Pending -> Rented, or
    /// Inactive to pull it from search).
    pub fn set_status(
        &self,
        id: &ListingId,
        status: ListingStatus,
    ) -> Result<(), ListingServiceError> {
        self.catalog.update_status(id, status)?;
        Ok(())
    }

    pub fn get(&self, id: &ListingId) -> Result<CatalogEntry, ListingServiceError> {
        let entry = self.catalog.fetch(id)?.ok_or(CatalogError::NotFound)?;
        Ok(entry)
    }

    /// Run the filter engine over the active snapshot of the catalog.
    pub fn search(&self, spec: &FilterSpec) -> Result<SearchResults, ListingServiceError> {
        let snapshot = self.catalog.active_records()?;
        let total_available = snapshot.len();
        let records = evaluate(&snapshot, spec);
        debug!(
            total = total_available,
            matched = records.len(),
            "search evaluated"
        );

        Ok(SearchResults {
            total_available,
            matched: records.len(),
            active_filters: active_filter_count(spec),
            records,
        })
    }
}

/// Search response handed to the calling surface.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    /// Active listings considered before filtering.
    pub total_available: usize,
    pub matched: usize,
    /// Badge count for the filter button.
    pub active_filters: usize,
    pub records: Vec<PropertyRecord>,
}

/// Error raised by the listing service.
#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
