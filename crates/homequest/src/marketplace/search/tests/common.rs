use std::collections::BTreeSet;

use chrono::{Duration, TimeZone, Utc};

use crate::marketplace::listings::{ListingId, PropertyRecord, PropertyType};

pub(super) fn record(
    id: &str,
    title: &str,
    location: &str,
    price_minor: i64,
    property_type: PropertyType,
    bedrooms: u32,
    bathrooms: u32,
    area_sqm: f64,
    amenities: &[&str],
    featured: bool,
) -> PropertyRecord {
    let base = Utc
        .with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp");
    let offset: i64 = id.parse().unwrap_or(0);

    PropertyRecord {
        id: ListingId(id.to_string()),
        title: title.to_string(),
        price_minor,
        location: location.to_string(),
        property_type,
        bedrooms,
        bathrooms,
        area_sqm,
        amenities: BTreeSet::from_iter(amenities.iter().map(|tag| tag.to_string())),
        featured,
        created_at: base + Duration::days(offset),
    }
}

/// The home screen's sample listings, in arrival order.
pub(super) fn catalog() -> Vec<PropertyRecord> {
    vec![
        record(
            "1",
            "Modern 3BR Apartment",
            "Victoria Island, Lagos",
            2_500_000,
            PropertyType::Apartment,
            3,
            2,
            120.0,
            &["Swimming Pool", "Gym", "Parking"],
            true,
        ),
        record(
            "2",
            "Luxury Villa",
            "Lekki Phase 1, Lagos",
            8_000_000,
            PropertyType::Villa,
            5,
            4,
            350.0,
            &["Swimming Pool", "Garden", "Security"],
            false,
        ),
        record(
            "3",
            "Cozy 2BR Flat",
            "Ikeja GRA, Lagos",
            1_800_000,
            PropertyType::Apartment,
            2,
            2,
            85.0,
            &["Parking"],
            false,
        ),
        record(
            "4",
            "Executive Duplex",
            "Magodo, Lagos",
            4_200_000,
            PropertyType::Duplex,
            4,
            3,
            200.0,
            &["Security", "Parking", "Generator"],
            true,
        ),
    ]
}

pub(super) fn ids(records: &[PropertyRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.0.as_str()).collect()
}
