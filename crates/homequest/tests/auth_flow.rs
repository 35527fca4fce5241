//! Exercises the `AuthProvider` capability interface end to end with an
//! in-memory backend, including the HTTP surface.

mod common {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use chrono::Utc;

    use homequest::marketplace::auth::{
        display_name_from_email, AuthError, AuthProvider, AuthSession, UserProfile, UserRole,
    };

    const MIN_PASSWORD_LEN: usize = 8;

    struct Account {
        password: String,
        profile: UserProfile,
    }

    /// Test backend keyed on lowercase email; tokens are monotonic counters.
    #[derive(Default)]
    pub(super) struct MemoryAuthProvider {
        accounts: Mutex<HashMap<String, Account>>,
        sessions: Mutex<HashMap<String, String>>,
        sequence: AtomicU64,
    }

    impl MemoryAuthProvider {
        fn issue_session(&self, profile: UserProfile) -> AuthSession {
            let token = format!("tok-{:06}", self.sequence.fetch_add(1, Ordering::Relaxed));
            self.sessions
                .lock()
                .expect("session mutex poisoned")
                .insert(token.clone(), profile.email.clone());
            AuthSession {
                access_token: token,
                profile,
            }
        }
    }

    impl AuthProvider for MemoryAuthProvider {
        fn sign_up(
            &self,
            email: &str,
            password: &str,
            role: UserRole,
        ) -> Result<AuthSession, AuthError> {
            if password.len() < MIN_PASSWORD_LEN {
                return Err(AuthError::WeakPassword {
                    min_len: MIN_PASSWORD_LEN,
                });
            }

            let key = email.trim().to_lowercase();
            let mut accounts = self.accounts.lock().expect("account mutex poisoned");
            if accounts.contains_key(&key) {
                return Err(AuthError::EmailTaken);
            }

            let profile = UserProfile {
                id: format!("usr-{:06}", accounts.len() + 1),
                email: key.clone(),
                role,
                name: display_name_from_email(&key),
                phone: None,
                created_at: Utc::now(),
            };
            accounts.insert(
                key,
                Account {
                    password: password.to_string(),
                    profile: profile.clone(),
                },
            );
            drop(accounts);

            Ok(self.issue_session(profile))
        }

        fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
            let key = email.trim().to_lowercase();
            let accounts = self.accounts.lock().expect("account mutex poisoned");
            let account = accounts
                .get(&key)
                .filter(|account| account.password == password)
                .ok_or(AuthError::InvalidCredentials)?;
            let profile = account.profile.clone();
            drop(accounts);

            Ok(self.issue_session(profile))
        }

        fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
            let mut sessions = self.sessions.lock().expect("session mutex poisoned");
            match sessions.remove(access_token) {
                Some(_) => Ok(()),
                None => Err(AuthError::NotSignedIn),
            }
        }

        fn reset_password(&self, _email: &str) -> Result<(), AuthError> {
            Ok(())
        }

        fn current_profile(&self, access_token: &str) -> Result<Option<UserProfile>, AuthError> {
            let sessions = self.sessions.lock().expect("session mutex poisoned");
            let Some(email) = sessions.get(access_token) else {
                return Ok(None);
            };
            let accounts = self.accounts.lock().expect("account mutex poisoned");
            Ok(accounts.get(email).map(|account| account.profile.clone()))
        }
    }
}

use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use common::MemoryAuthProvider;
use homequest::marketplace::auth::{auth_router, AuthError, AuthProvider, UserRole};

#[test]
fn sign_up_defaults_the_display_name_from_the_email() {
    let provider = MemoryAuthProvider::default();
    let session = provider
        .sign_up("ada.obi@example.com", "correct-horse", UserRole::Realtor)
        .expect("sign up succeeds");

    assert_eq!(session.profile.name, "ada.obi");
    assert_eq!(session.profile.role, UserRole::Realtor);

    let current = provider
        .current_profile(&session.access_token)
        .expect("lookup succeeds")
        .expect("session resolves");
    assert_eq!(current, session.profile);
}

#[test]
fn duplicate_email_and_weak_password_are_rejected() {
    let provider = MemoryAuthProvider::default();
    provider
        .sign_up("ada@example.com", "correct-horse", UserRole::HomeSeeker)
        .expect("first sign up succeeds");

    assert_eq!(
        provider.sign_up("ADA@example.com", "another-pass", UserRole::HomeSeeker),
        Err(AuthError::EmailTaken)
    );
    assert_eq!(
        provider.sign_up("new@example.com", "short", UserRole::HomeSeeker),
        Err(AuthError::WeakPassword { min_len: 8 })
    );
}

#[test]
fn sign_out_invalidates_the_session() {
    let provider = MemoryAuthProvider::default();
    let session = provider
        .sign_up("ada@example.com", "correct-horse", UserRole::HomeSeeker)
        .expect("sign up succeeds");

    provider
        .sign_out(&session.access_token)
        .expect("sign out succeeds");
    assert_eq!(provider.current_profile(&session.access_token), Ok(None));
    assert_eq!(
        provider.sign_out(&session.access_token),
        Err(AuthError::NotSignedIn)
    );
}

#[test]
fn reset_password_never_confirms_account_existence() {
    let provider = MemoryAuthProvider::default();
    assert_eq!(provider.reset_password("nobody@example.com"), Ok(()));
}

#[tokio::test]
async fn signup_route_issues_a_session() {
    let router = auth_router(Arc::new(MemoryAuthProvider::default()));

    let body = serde_json::json!({
        "email": "tunde@example.com",
        "password": "long-enough-pass",
        "role": "realtor"
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/auth/signup")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("payload is json");
    assert_eq!(payload["profile"]["name"], "tunde");
    assert!(payload["access_token"].as_str().is_some());
}

#[tokio::test]
async fn profile_route_requires_a_bearer_token() {
    let provider = Arc::new(MemoryAuthProvider::default());
    let session = provider
        .sign_up("ada@example.com", "correct-horse", UserRole::HomeSeeker)
        .expect("sign up succeeds");

    let router = auth_router(provider.clone());
    let anonymous = router
        .clone()
        .oneshot(
            axum::http::Request::get("/api/v1/auth/profile")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let authed = router
        .oneshot(
            axum::http::Request::get("/api/v1/auth/profile")
                .header(
                    axum::http::header::AUTHORIZATION,
                    format!("Bearer {}", session.access_token),
                )
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(authed.status(), StatusCode::OK);
}

#[tokio::test]
async fn signin_route_rejects_bad_credentials() {
    let provider = Arc::new(MemoryAuthProvider::default());
    provider
        .sign_up("ada@example.com", "correct-horse", UserRole::HomeSeeker)
        .expect("sign up succeeds");

    let router = auth_router(provider);
    let body = serde_json::json!({
        "email": "ada@example.com",
        "password": "wrong-password"
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/auth/signin")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
