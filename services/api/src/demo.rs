use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration, Utc};
use clap::Args;

use crate::infra::{hydrate_catalog, InMemoryAuthProvider, InMemoryCatalog};
use homequest::config::CatalogConfig;
use homequest::error::AppError;
use homequest::marketplace::auth::{AuthProvider, UserRole};
use homequest::marketplace::engagement::{
    Inquiry, InquiryBook, InquiryStatus, Notification, NotificationFeed, NotificationFilter,
    NotificationKind,
};
use homequest::marketplace::listings::{
    sample_catalog, CatalogImporter, ListingDraft, ListingService, PropertyRecord, PropertyType,
};
use homequest::marketplace::search::{
    active_filter_count, evaluate, AreaRange, FilterSpec, PriceRange, SavedSearches, SortKey,
    TypeFilter,
};

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Free-text query matched against title and location
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Restrict to one property type (apartment, house, villa, ...)
    #[arg(long, value_parser = crate::infra::parse_property_type)]
    pub(crate) property_type: Option<PropertyType>,
    /// Minimum monthly price in minor units
    #[arg(long)]
    pub(crate) min_price: Option<i64>,
    /// Maximum monthly price in minor units (0 = unbounded)
    #[arg(long)]
    pub(crate) max_price: Option<i64>,
    #[arg(long)]
    pub(crate) min_bedrooms: Option<u32>,
    #[arg(long)]
    pub(crate) min_bathrooms: Option<u32>,
    /// Minimum floor area in square meters
    #[arg(long)]
    pub(crate) min_area: Option<f64>,
    /// Maximum floor area in square meters
    #[arg(long)]
    pub(crate) max_area: Option<f64>,
    /// Required amenity tag; repeat the flag for several
    #[arg(long = "amenity")]
    pub(crate) amenities: Vec<String>,
    /// Result order: recent, price_asc, price_desc, size_desc, popular
    #[arg(long, default_value = "recent", value_parser = crate::infra::parse_sort_key)]
    pub(crate) sort: SortKey,
    /// Search a CSV export instead of the sample catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

impl SearchArgs {
    fn into_spec(self) -> (FilterSpec, Option<PathBuf>) {
        let spec = FilterSpec {
            search_text: self.query.unwrap_or_default(),
            property_type: match self.property_type {
                Some(property_type) => TypeFilter::Only(property_type),
                None => TypeFilter::Any,
            },
            price_range: PriceRange {
                min: self.min_price.unwrap_or(0),
                max: self.max_price,
            },
            min_bedrooms: self.min_bedrooms.unwrap_or(0),
            min_bathrooms: self.min_bathrooms.unwrap_or(0),
            area_range: AreaRange {
                min: self.min_area.unwrap_or(0.0),
                max: self.max_area,
            },
            required_amenities: self.amenities.into_iter().collect(),
            sort_key: self.sort,
        };
        (spec, self.catalog_csv)
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Hydrate the demo catalog from a CSV export instead of the samples
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Skip the authentication portion of the demo
    #[arg(long)]
    pub(crate) skip_auth: bool,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let (spec, catalog_csv) = args.into_spec();
    let records = match catalog_csv {
        Some(path) => CatalogImporter::from_path(path)?,
        None => sample_catalog(),
    };

    let results = evaluate(&records, &spec);
    println!(
        "{} of {} listings match ({} active filters, sorted by {})",
        results.len(),
        records.len(),
        active_filter_count(&spec),
        spec.sort_key.label()
    );
    for (index, record) in results.iter().enumerate() {
        render_listing(index + 1, record);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("HomeQuest marketplace demo");

    let catalog = InMemoryCatalog::default();
    let config = CatalogConfig {
        seed_catalog: true,
        catalog_csv: args.catalog_csv,
    };
    let hydrated = hydrate_catalog(&catalog, &config)?;
    println!("Catalog hydrated with {hydrated} listings");

    let service = Arc::new(ListingService::new(Arc::new(catalog)));

    println!("\nPublishing a new draft through the wizard path");
    let entry = match service.publish(demo_draft(), Some("realtor-demo".to_string())) {
        Ok(entry) => entry,
        Err(err) => {
            println!("  Draft rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "  Published {} -> {} ({})",
        entry.record.id.0,
        entry.record.title,
        entry.status.label()
    );

    let mut saved = SavedSearches::new();

    println!("\nEveryone's view: most recent listings");
    let recent = service.search(&FilterSpec::unconstrained())?;
    for (index, record) in recent.records.iter().enumerate() {
        render_listing(index + 1, record);
    }

    let mid_range = FilterSpec {
        price_range: PriceRange {
            min: 2_000_000,
            max: Some(5_000_000),
        },
        sort_key: SortKey::PriceAsc,
        ..FilterSpec::default()
    };
    saved.record_spec(&mid_range);
    render_search(&service, "Mid-range, cheapest first", &mid_range)?;

    let family_spec = FilterSpec {
        min_bedrooms: 3,
        required_amenities: BTreeSet::from(["Security".to_string()]),
        sort_key: SortKey::Popular,
        ..FilterSpec::default()
    };
    saved.record_spec(&family_spec);
    render_search(&service, "Family homes with security, featured first", &family_spec)?;

    saved.record("lekki waterfront");
    println!("\nRecent searches: {}", saved.entries().join(" | "));

    if !args.skip_auth {
        println!("\nAuthentication demo (mock identity backend)");
        let auth = InMemoryAuthProvider::default();
        match auth.sign_up("demo.realtor@example.com", "long-enough-pass", UserRole::Realtor) {
            Ok(session) => {
                println!(
                    "  Signed up {} as {}",
                    session.profile.email,
                    session.profile.role.label()
                );
                match auth.current_profile(&session.access_token) {
                    Ok(Some(profile)) => println!("  Session resolves to {}", profile.name),
                    Ok(None) => println!("  Session did not resolve"),
                    Err(err) => println!("  Profile lookup failed: {err}"),
                }
                if let Err(err) = auth.sign_out(&session.access_token) {
                    println!("  Sign out failed: {err}");
                } else {
                    println!("  Signed out; token is now invalid");
                }
            }
            Err(err) => println!("  Sign up failed: {err}"),
        }
    }

    println!("\nEngagement snapshot");
    let now = Utc::now();
    let mut feed = NotificationFeed::new();
    feed.push(Notification {
        id: "ntf-1".to_string(),
        kind: NotificationKind::Inquiry,
        title: "New inquiry".to_string(),
        body: format!("Someone asked about {}", entry.record.title),
        created_at: now - Duration::minutes(4),
        read: false,
    });
    feed.push(Notification {
        id: "ntf-2".to_string(),
        kind: NotificationKind::System,
        title: "Weekly summary ready".to_string(),
        body: "Your listing performance digest is available.".to_string(),
        created_at: now - Duration::hours(3),
        read: true,
    });
    println!("  {} unread notification(s)", feed.unread_count());
    for notification in feed.visible(NotificationFilter::Unread) {
        println!("    - [{}] {}", notification.kind.label(), notification.title);
    }

    let mut book = InquiryBook::new();
    book.add(Inquiry {
        id: "inq-1".to_string(),
        listing_id: entry.record.id.clone(),
        name: "Chidi Okafor".to_string(),
        contact: "+234 801 000 0000".to_string(),
        message: "Is this still available?".to_string(),
        status: InquiryStatus::New,
        received_at: now - Duration::minutes(12),
    });
    book.transition("inq-1", InquiryStatus::Responded);
    println!(
        "  Inquiries: {} total, {} new, {} responded",
        book.total(),
        book.new_count(),
        book.count_with(InquiryStatus::Responded)
    );

    Ok(())
}

fn render_search<R>(
    service: &ListingService<R>,
    heading: &str,
    spec: &FilterSpec,
) -> Result<(), AppError>
where
    R: homequest::marketplace::listings::CatalogRepository + 'static,
{
    println!("\n{heading}");
    let results = service.search(spec)?;
    println!(
        "  {} of {} listings match ({} active filters)",
        results.matched, results.total_available, results.active_filters
    );
    for (index, record) in results.records.iter().enumerate() {
        render_listing(index + 1, record);
    }
    Ok(())
}

fn render_listing(position: usize, record: &PropertyRecord) {
    let featured = if record.featured { " | Featured" } else { "" };
    println!(
        "  {position}. {} - {} ({})",
        record.title,
        record.location,
        record.property_type.label()
    );
    println!(
        "     N{}/month | {} bd | {} ba | {} sqm{featured}",
        format_minor(record.price_minor),
        record.bedrooms,
        record.bathrooms,
        record.area_sqm
    );
}

/// Group a minor-unit amount with thousands separators for terminal output.
fn format_minor(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn demo_draft() -> ListingDraft {
    ListingDraft {
        title: "Serviced 4BR Terrace".to_string(),
        description: "Newly built terrace in a gated estate with 24/7 power.".to_string(),
        property_type: Some(PropertyType::House),
        price_minor: 5_500_000,
        bedrooms: 4,
        bathrooms: 4,
        area_sqm: 220.0,
        address: "4 Admiralty Way".to_string(),
        city: "Lekki Phase 1".to_string(),
        state: "Lagos".to_string(),
        amenities: BTreeSet::from(["Parking".to_string(), "Security".to_string()]),
        furnished: false,
        pet_friendly: true,
    }
}
