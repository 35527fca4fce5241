use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::marketplace::listings::ListingId;

/// Follow-up states a realtor moves an inquiry through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    Responded,
    Scheduled,
    Closed,
}

impl InquiryStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Responded => "Responded",
            Self::Scheduled => "Viewing Scheduled",
            Self::Closed => "Closed",
        }
    }
}

/// A prospective tenant's message about one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: String,
    pub listing_id: ListingId,
    pub name: String,
    pub contact: String,
    pub message: String,
    pub status: InquiryStatus,
    pub received_at: DateTime<Utc>,
}

/// The leads screen's working set with its header counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryBook {
    inquiries: Vec<Inquiry>,
}

impl InquiryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, inquiry: Inquiry) {
        self.inquiries.push(inquiry);
    }

    pub fn all(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn total(&self) -> usize {
        self.inquiries.len()
    }

    pub fn new_count(&self) -> usize {
        self.count_with(InquiryStatus::New)
    }

    pub fn count_with(&self, status: InquiryStatus) -> usize {
        self.inquiries
            .iter()
            .filter(|inquiry| inquiry.status == status)
            .count()
    }

    pub fn with_status(&self, status: InquiryStatus) -> Vec<&Inquiry> {
        self.inquiries
            .iter()
            .filter(|inquiry| inquiry.status == status)
            .collect()
    }

    /// Returns false when the id is unknown.
    pub fn transition(&mut self, id: &str, status: InquiryStatus) -> bool {
        match self.inquiries.iter_mut().find(|inquiry| inquiry.id == id) {
            Some(inquiry) => {
                inquiry.status = status;
                true
            }
            None => false,
        }
    }

    pub fn for_listing(&self, listing_id: &ListingId) -> Vec<&Inquiry> {
        self.inquiries
            .iter()
            .filter(|inquiry| &inquiry.listing_id == listing_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn inquiry(id: &str, listing: &str, status: InquiryStatus) -> Inquiry {
        Inquiry {
            id: id.to_string(),
            listing_id: ListingId(listing.to_string()),
            name: "Chidi Okafor".to_string(),
            contact: "+234 801 000 0000".to_string(),
            message: "Is this still available?".to_string(),
            status,
            received_at: Utc.with_ymd_and_hms(2025, 6, 12, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn header_counters_track_new_and_total() {
        let mut book = InquiryBook::new();
        book.add(inquiry("i-1", "lst-000001", InquiryStatus::New));
        book.add(inquiry("i-2", "lst-000001", InquiryStatus::Responded));
        book.add(inquiry("i-3", "lst-000002", InquiryStatus::New));

        assert_eq!(book.total(), 3);
        assert_eq!(book.new_count(), 2);
    }

    #[test]
    fn transitions_update_status_in_place() {
        let mut book = InquiryBook::new();
        book.add(inquiry("i-1", "lst-000001", InquiryStatus::New));

        assert!(book.transition("i-1", InquiryStatus::Scheduled));
        assert_eq!(book.new_count(), 0);
        assert_eq!(book.count_with(InquiryStatus::Scheduled), 1);
        assert!(!book.transition("i-9", InquiryStatus::Closed));
    }

    #[test]
    fn per_listing_lookup_filters_by_id() {
        let mut book = InquiryBook::new();
        book.add(inquiry("i-1", "lst-000001", InquiryStatus::New));
        book.add(inquiry("i-2", "lst-000002", InquiryStatus::New));

        let for_first = book.for_listing(&ListingId("lst-000001".to_string()));
        assert_eq!(for_first.len(), 1);
        assert_eq!(for_first[0].id, "i-1");
    }
}
