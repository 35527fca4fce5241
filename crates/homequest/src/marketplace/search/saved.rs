use serde::{Deserialize, Serialize};

use super::domain::{FilterSpec, TypeFilter};

/// Most entries the search screen keeps in its recent list.
const MAX_SAVED: usize = 5;

/// Recent-search shortlist shown under the search bar. Newest entries first,
/// exact duplicates are not re-added, and the list is capped at five.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearches {
    entries: Vec<String>,
}

impl SavedSearches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a raw query string. Whitespace-only input is ignored.
    pub fn record(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() || self.entries.iter().any(|entry| entry == trimmed) {
            return;
        }
        self.entries.insert(0, trimmed.to_string());
        self.entries.truncate(MAX_SAVED);
    }

    /// Record a spec-derived entry like "Apartment 3BR lekki".
    pub fn record_spec(&mut self, spec: &FilterSpec) {
        self.record(&describe(spec));
    }
}

fn describe(spec: &FilterSpec) -> String {
    let mut parts = Vec::new();
    if let TypeFilter::Only(property_type) = spec.property_type {
        parts.push(property_type.label().to_string());
    }
    if spec.min_bedrooms > 0 {
        parts.push(format!("{}BR", spec.min_bedrooms));
    }
    let query = spec.search_text.trim();
    if !query.is_empty() {
        parts.push(query.to_string());
    }
    parts.join(" ")
}
