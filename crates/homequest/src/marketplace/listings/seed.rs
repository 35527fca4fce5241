use std::collections::BTreeSet;

use chrono::{Duration, TimeZone, Utc};

use super::domain::{ListingId, PropertyRecord, PropertyType};

/// Sample listings used by demos and tests, in arrival order (oldest first).
pub fn sample_catalog() -> Vec<PropertyRecord> {
    let base = match Utc.with_ymd_and_hms(2025, 4, 28, 9, 0, 0).single() {
        Some(timestamp) => timestamp,
        None => Utc::now(),
    };

    let mut listings = Vec::new();
    for (offset, (id, title, location, price_minor, property_type, bedrooms, bathrooms, area_sqm, amenities, featured)) in [
        (
            "lst-100001",
            "Modern 3BR Apartment",
            "Victoria Island, Lagos",
            2_500_000_i64,
            PropertyType::Apartment,
            3_u32,
            2_u32,
            120.0_f64,
            vec!["Swimming Pool", "Gym", "Parking", "Security"],
            true,
        ),
        (
            "lst-100002",
            "Luxury Villa",
            "Lekki Phase 1, Lagos",
            8_000_000,
            PropertyType::Villa,
            5,
            4,
            350.0,
            vec!["Swimming Pool", "Garden", "Security", "Generator"],
            false,
        ),
        (
            "lst-100003",
            "Cozy 2BR Flat",
            "Ikeja GRA, Lagos",
            1_800_000,
            PropertyType::Apartment,
            2,
            2,
            85.0,
            vec!["Parking", "Backup Water"],
            false,
        ),
        (
            "lst-100004",
            "Executive Duplex",
            "Magodo, Lagos",
            4_200_000,
            PropertyType::Duplex,
            4,
            3,
            200.0,
            vec!["Security", "Parking", "Generator", "CCTV"],
            true,
        ),
    ]
    .into_iter()
    .enumerate()
    {
        listings.push(PropertyRecord {
            id: ListingId(id.to_string()),
            title: title.to_string(),
            price_minor,
            location: location.to_string(),
            property_type,
            bedrooms,
            bathrooms,
            area_sqm,
            amenities: BTreeSet::from_iter(amenities.into_iter().map(str::to_string)),
            featured,
            created_at: base + Duration::days(offset as i64),
        });
    }

    listings
}
