use std::cmp::Ordering;

use crate::marketplace::listings::PropertyRecord;

use super::domain::{FilterSpec, SortKey, TypeFilter};

/// Run one search interaction: keep every record satisfying all active
/// constraints, then order the survivors by the requested sort key.
///
/// The catalog slice is the arrival-ordered snapshot; `Recent` therefore
/// never reorders. Sorts are stable so visually identical rows keep their
/// relative position when the spec is re-evaluated on every keystroke.
/// Contradictory bounds yield an empty result rather than an error.
pub fn evaluate(catalog: &[PropertyRecord], spec: &FilterSpec) -> Vec<PropertyRecord> {
    let mut matched: Vec<PropertyRecord> = catalog
        .iter()
        .filter(|record| matches_spec(record, spec))
        .cloned()
        .collect();
    order_by(&mut matched, spec.sort_key);
    matched
}

/// Number of spec fields that differ from their unconstrained defaults,
/// shown as the badge on the filter button. Depends on the spec alone.
pub fn active_filter_count(spec: &FilterSpec) -> usize {
    let mut count = 0;
    if !spec.search_text.trim().is_empty() {
        count += 1;
    }
    if spec.property_type != TypeFilter::Any {
        count += 1;
    }
    if spec.price_range.is_constrained() {
        count += 1;
    }
    if spec.min_bedrooms > 0 {
        count += 1;
    }
    if spec.min_bathrooms > 0 {
        count += 1;
    }
    if spec.area_range.is_constrained() {
        count += 1;
    }
    if !spec.required_amenities.is_empty() {
        count += 1;
    }
    if spec.sort_key != SortKey::Recent {
        count += 1;
    }
    count
}

fn matches_spec(record: &PropertyRecord, spec: &FilterSpec) -> bool {
    matches_search_text(record, &spec.search_text)
        && spec.property_type.allows(record.property_type)
        && spec.price_range.contains(record.price_minor)
        && (spec.min_bedrooms == 0 || record.bedrooms >= spec.min_bedrooms)
        && (spec.min_bathrooms == 0 || record.bathrooms >= spec.min_bathrooms)
        && spec.area_range.contains(record.area_sqm)
        && spec
            .required_amenities
            .iter()
            .all(|tag| record.amenities.contains(tag))
}

fn matches_search_text(record: &PropertyRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(&needle)
        || record.location.to_lowercase().contains(&needle)
}

fn order_by(records: &mut [PropertyRecord], key: SortKey) {
    match key {
        SortKey::Recent => {}
        SortKey::PriceAsc => records.sort_by_key(|record| record.price_minor),
        SortKey::PriceDesc => records.sort_by_key(|record| std::cmp::Reverse(record.price_minor)),
        SortKey::SizeDesc => records.sort_by(|a, b| {
            b.area_sqm
                .partial_cmp(&a.area_sqm)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Popular => records.sort_by_key(|record| !record.featured),
    }
}
