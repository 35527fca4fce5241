//! Property search: one canonical filter/sort evaluator shared by every
//! surface, plus the recent-search shortlist shown under the search bar.

pub mod domain;
mod engine;
mod saved;

#[cfg(test)]
mod tests;

pub use domain::{AreaRange, FilterSpec, PriceRange, SortKey, TypeFilter};
pub use engine::{active_filter_count, evaluate};
pub use saved::SavedSearches;
