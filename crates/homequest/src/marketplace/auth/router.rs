use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::UserRole;
use super::provider::{AuthError, AuthProvider};

/// Router builder exposing the authentication endpoints.
pub fn auth_router<A>(provider: Arc<A>) -> Router
where
    A: AuthProvider + 'static,
{
    Router::new()
        .route("/api/v1/auth/signup", post(sign_up_handler::<A>))
        .route("/api/v1/auth/signin", post(sign_in_handler::<A>))
        .route("/api/v1/auth/signout", post(sign_out_handler::<A>))
        .route(
            "/api/v1/auth/reset-password",
            post(reset_password_handler::<A>),
        )
        .route("/api/v1/auth/profile", get(profile_handler::<A>))
        .with_state(provider)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignUpRequest {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) role: UserRole,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignInRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResetPasswordRequest {
    pub(crate) email: String,
}

pub(crate) async fn sign_up_handler<A>(
    State(provider): State<Arc<A>>,
    axum::Json(request): axum::Json<SignUpRequest>,
) -> Response
where
    A: AuthProvider + 'static,
{
    match provider.sign_up(&request.email, &request.password, request.role) {
        Ok(session) => (StatusCode::CREATED, axum::Json(session)).into_response(),
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn sign_in_handler<A>(
    State(provider): State<Arc<A>>,
    axum::Json(request): axum::Json<SignInRequest>,
) -> Response
where
    A: AuthProvider + 'static,
{
    match provider.sign_in(&request.email, &request.password) {
        Ok(session) => (StatusCode::OK, axum::Json(session)).into_response(),
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn sign_out_handler<A>(
    State(provider): State<Arc<A>>,
    headers: HeaderMap,
) -> Response
where
    A: AuthProvider + 'static,
{
    let Some(token) = bearer_token(&headers) else {
        return auth_error_response(AuthError::NotSignedIn);
    };
    match provider.sign_out(&token) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn reset_password_handler<A>(
    State(provider): State<Arc<A>>,
    axum::Json(request): axum::Json<ResetPasswordRequest>,
) -> Response
where
    A: AuthProvider + 'static,
{
    match provider.reset_password(&request.email) {
        Ok(()) => {
            let payload = json!({ "status": "reset email sent" });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(error) => auth_error_response(error),
    }
}

pub(crate) async fn profile_handler<A>(State(provider): State<Arc<A>>, headers: HeaderMap) -> Response
where
    A: AuthProvider + 'static,
{
    let Some(token) = bearer_token(&headers) else {
        return auth_error_response(AuthError::NotSignedIn);
    };
    match provider.current_profile(&token) {
        Ok(Some(profile)) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Ok(None) => auth_error_response(AuthError::NotSignedIn),
        Err(error) => auth_error_response(error),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn auth_error_response(error: AuthError) -> Response {
    let status = match error {
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::InvalidCredentials | AuthError::NotSignedIn => StatusCode::UNAUTHORIZED,
        AuthError::WeakPassword { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AuthError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = axum::Json(json!({ "error": error.to_string() }));
    (status, body).into_response()
}
