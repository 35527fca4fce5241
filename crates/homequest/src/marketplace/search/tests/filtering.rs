use std::collections::BTreeSet;

use super::common::{catalog, ids, record};
use crate::marketplace::listings::PropertyType;
use crate::marketplace::search::{
    active_filter_count, evaluate, AreaRange, FilterSpec, PriceRange, SortKey, TypeFilter,
};

#[test]
fn empty_catalog_yields_empty_result() {
    let spec = FilterSpec {
        search_text: "anything".to_string(),
        ..FilterSpec::default()
    };
    assert!(evaluate(&[], &spec).is_empty());
}

#[test]
fn default_spec_returns_catalog_unchanged() {
    let listings = catalog();
    let result = evaluate(&listings, &FilterSpec::unconstrained());
    assert_eq!(result, listings);
}

#[test]
fn search_text_matches_location_case_insensitively() {
    let listings = catalog();
    let spec = FilterSpec {
        search_text: "  LEKKI ".to_string(),
        ..FilterSpec::default()
    };
    let result = evaluate(&listings, &spec);
    assert_eq!(ids(&result), ["2"]);
    assert_eq!(result[0].title, "Luxury Villa");
}

#[test]
fn search_text_matches_title_too() {
    let listings = catalog();
    let spec = FilterSpec {
        search_text: "duplex".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&evaluate(&listings, &spec)), ["4"]);
}

#[test]
fn whitespace_only_search_text_imposes_no_constraint() {
    let listings = catalog();
    let spec = FilterSpec {
        search_text: "   ".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(evaluate(&listings, &spec).len(), listings.len());
}

#[test]
fn property_type_filter_is_exact() {
    let listings = catalog();
    let spec = FilterSpec {
        property_type: TypeFilter::Only(PropertyType::Apartment),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&evaluate(&listings, &spec)), ["1", "3"]);
}

#[test]
fn price_range_keeps_only_records_within_inclusive_bounds() {
    let listings = catalog();
    let spec = FilterSpec {
        price_range: PriceRange {
            min: 2_000_000,
            max: Some(5_000_000),
        },
        ..FilterSpec::default()
    };
    assert_eq!(ids(&evaluate(&listings, &spec)), ["1", "4"]);
}

#[test]
fn contradictory_price_range_yields_no_matches_without_error() {
    let listings = catalog();
    let spec = FilterSpec {
        price_range: PriceRange {
            min: 5_000_000,
            max: Some(2_000_000),
        },
        ..FilterSpec::default()
    };
    assert!(evaluate(&listings, &spec).is_empty());
}

#[test]
fn minimum_bedroom_and_bathroom_bounds_are_lower_bounds() {
    let listings = catalog();
    let spec = FilterSpec {
        min_bedrooms: 4,
        min_bathrooms: 3,
        ..FilterSpec::default()
    };
    assert_eq!(ids(&evaluate(&listings, &spec)), ["2", "4"]);
}

#[test]
fn area_range_bounds_are_inclusive() {
    let listings = catalog();
    let spec = FilterSpec {
        area_range: AreaRange {
            min: 120.0,
            max: Some(200.0),
        },
        ..FilterSpec::default()
    };
    assert_eq!(ids(&evaluate(&listings, &spec)), ["1", "4"]);
}

#[test]
fn required_amenities_demand_a_superset() {
    let listings = catalog();

    let matching = FilterSpec {
        required_amenities: BTreeSet::from(["Swimming Pool".to_string(), "Gym".to_string()]),
        ..FilterSpec::default()
    };
    assert_eq!(ids(&evaluate(&listings, &matching)), ["1"]);

    let missing_tag = FilterSpec {
        required_amenities: BTreeSet::from(["Swimming Pool".to_string(), "Sauna".to_string()]),
        ..FilterSpec::default()
    };
    assert!(evaluate(&listings, &missing_tag).is_empty());
}

#[test]
fn adding_a_constraint_never_adds_results() {
    let listings = catalog();
    let broad = FilterSpec {
        property_type: TypeFilter::Only(PropertyType::Apartment),
        ..FilterSpec::default()
    };
    let narrow = FilterSpec {
        min_bedrooms: 3,
        ..broad.clone()
    };

    let broad_ids = ids(&evaluate(&listings, &broad))
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let narrow_result = evaluate(&listings, &narrow);

    // The narrowed result must be a subsequence of the broad one.
    let mut cursor = broad_ids.iter();
    for kept in &narrow_result {
        assert!(
            cursor.any(|id| id == &kept.id.0),
            "{} not found in broad result order",
            kept.id.0
        );
    }
}

#[test]
fn evaluation_is_idempotent() {
    let listings = catalog();
    let spec = FilterSpec {
        search_text: "lagos".to_string(),
        min_bedrooms: 2,
        sort_key: SortKey::PriceAsc,
        ..FilterSpec::default()
    };
    assert_eq!(evaluate(&listings, &spec), evaluate(&listings, &spec));
}

#[test]
fn filtering_leaves_the_catalog_untouched() {
    let listings = catalog();
    let before = listings.clone();
    let spec = FilterSpec {
        min_bedrooms: 5,
        ..FilterSpec::default()
    };
    let _ = evaluate(&listings, &spec);
    assert_eq!(listings, before);
}

#[test]
fn active_filter_count_tracks_non_default_fields() {
    assert_eq!(active_filter_count(&FilterSpec::default()), 0);

    let spec = FilterSpec {
        search_text: "ikeja".to_string(),
        property_type: TypeFilter::Only(PropertyType::Apartment),
        price_range: PriceRange {
            min: 1_000_000,
            max: Some(3_000_000),
        },
        min_bedrooms: 2,
        sort_key: SortKey::SizeDesc,
        ..FilterSpec::default()
    };
    assert_eq!(active_filter_count(&spec), 5);
}

#[test]
fn open_ended_price_chip_counts_as_active() {
    let spec = FilterSpec {
        price_range: PriceRange {
            min: 10_000_000,
            max: Some(0),
        },
        ..FilterSpec::default()
    };
    assert_eq!(active_filter_count(&spec), 1);

    let listings = vec![record(
        "9",
        "Waterfront Penthouse",
        "Ikoyi, Lagos",
        12_000_000,
        PropertyType::Penthouse,
        4,
        4,
        300.0,
        &["Elevator"],
        true,
    )];
    assert_eq!(ids(&evaluate(&listings, &spec)), ["9"]);
}
