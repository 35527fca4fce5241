use crate::cli::ServeArgs;
use crate::infra::{hydrate_catalog, AppState, InMemoryAuthProvider, InMemoryCatalog};
use crate::routes::with_marketplace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use homequest::config::AppConfig;
use homequest::error::AppError;
use homequest::marketplace::listings::ListingService;
use homequest::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = InMemoryCatalog::default();
    let hydrated = hydrate_catalog(&catalog, &config.catalog)?;
    let listing_service = Arc::new(ListingService::new(Arc::new(catalog)));
    let auth_provider = Arc::new(InMemoryAuthProvider::default());

    let app = with_marketplace_routes(listing_service, auth_provider)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, listings = hydrated, "marketplace service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
