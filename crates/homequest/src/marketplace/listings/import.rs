use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use super::domain::{ListingId, PropertyRecord, PropertyType};

/// Hydrates a catalog from a listings CSV export.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<PropertyRecord>, ImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<ListingRow>().enumerate() {
            // Header is line 1, first data row line 2.
            let line = index + 2;
            let row = row?;
            records.push(row.into_record(line)?);
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "Listing ID")]
    listing_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Monthly Price")]
    price_minor: i64,
    #[serde(rename = "Type")]
    property_type: String,
    #[serde(rename = "Bedrooms")]
    bedrooms: u32,
    #[serde(rename = "Bathrooms")]
    bathrooms: u32,
    #[serde(rename = "Area Sqm")]
    area_sqm: f64,
    #[serde(rename = "Amenities", default, deserialize_with = "empty_string_as_none")]
    amenities: Option<String>,
    #[serde(rename = "Featured", default)]
    featured: Option<String>,
    #[serde(rename = "Listed At", default, deserialize_with = "empty_string_as_none")]
    listed_at: Option<String>,
}

impl ListingRow {
    fn into_record(self, line: usize) -> Result<PropertyRecord, ImportError> {
        let property_type = PropertyType::from_label(&self.property_type).ok_or_else(|| {
            ImportError::UnknownPropertyType {
                line,
                value: self.property_type.clone(),
            }
        })?;

        if self.price_minor < 0 {
            return Err(ImportError::NegativePrice {
                line,
                value: self.price_minor,
            });
        }
        if !(self.area_sqm > 0.0) {
            return Err(ImportError::NonPositiveArea {
                line,
                value: self.area_sqm,
            });
        }

        let created_at = match self.listed_at.as_deref() {
            Some(raw) => parse_timestamp(raw).ok_or_else(|| ImportError::InvalidTimestamp {
                line,
                value: raw.to_string(),
            })?,
            None => Utc::now(),
        };

        let amenities: BTreeSet<String> = self
            .amenities
            .as_deref()
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Ok(PropertyRecord {
            id: ListingId(self.listing_id),
            title: self.title,
            price_minor: self.price_minor,
            location: self.location,
            property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area_sqm: self.area_sqm,
            amenities,
            featured: parse_flag(self.featured.as_deref()),
            created_at,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(str::trim),
        Some("1") | Some("true") | Some("yes") | Some("TRUE") | Some("Yes")
    )
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

/// Error raised while hydrating a catalog from CSV.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown property type '{value}'")]
    UnknownPropertyType { line: usize, value: String },
    #[error("line {line}: monthly price must not be negative, got {value}")]
    NegativePrice { line: usize, value: i64 },
    #[error("line {line}: floor area must be positive, got {value}")]
    NonPositiveArea { line: usize, value: f64 },
    #[error("line {line}: unable to parse timestamp '{value}'")]
    InvalidTimestamp { line: usize, value: String },
}
