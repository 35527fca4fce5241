use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::marketplace::search::FilterSpec;

use super::domain::{ListingDraft, ListingId, ListingStatus};
use super::repository::{CatalogError, CatalogRepository};
use super::service::{ListingService, ListingServiceError};

/// Router builder exposing listing intake, lifecycle, and property search.
pub fn listing_router<R>(service: Arc<ListingService<R>>) -> Router
where
    R: CatalogRepository + 'static,
{
    Router::new()
        .route("/api/v1/listings", post(publish_handler::<R>))
        .route("/api/v1/listings/:listing_id", get(listing_handler::<R>))
        .route(
            "/api/v1/listings/:listing_id/status",
            post(status_handler::<R>),
        )
        .route("/api/v1/properties/search", post(search_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PublishRequest {
    #[serde(flatten)]
    pub(crate) draft: ListingDraft,
    #[serde(default)]
    pub(crate) realtor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusRequest {
    pub(crate) status: ListingStatus,
}

pub(crate) async fn publish_handler<R>(
    State(service): State<Arc<ListingService<R>>>,
    axum::Json(request): axum::Json<PublishRequest>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.publish(request.draft, request.realtor) {
        Ok(entry) => (StatusCode::CREATED, axum::Json(entry.summary())).into_response(),
        Err(ListingServiceError::Draft(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ListingServiceError::Catalog(CatalogError::Conflict)) => {
            let payload = json!({ "error": "listing already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn listing_handler<R>(
    State(service): State<Arc<ListingService<R>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    let id = ListingId(listing_id);
    match service.get(&id) {
        Ok(entry) => (StatusCode::OK, axum::Json(entry.summary())).into_response(),
        Err(ListingServiceError::Catalog(CatalogError::NotFound)) => {
            let payload = json!({ "error": "listing not found", "listing_id": id.0 });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<ListingService<R>>>,
    Path(listing_id): Path<String>,
    axum::Json(request): axum::Json<StatusRequest>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    let id = ListingId(listing_id);
    match service.set_status(&id, request.status) {
        Ok(()) => {
            let payload = json!({ "listing_id": id.0, "status": request.status.label() });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(ListingServiceError::Catalog(CatalogError::NotFound)) => {
            let payload = json!({ "error": "listing not found", "listing_id": id.0 });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<ListingService<R>>>,
    axum::Json(spec): axum::Json<FilterSpec>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.search(&spec) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
