use super::domain::{AuthSession, UserProfile, UserRole};

/// Capability interface over the identity backend. One trait for sign-up,
/// sign-in, sign-out, password reset, and the current profile, so the
/// concrete backend can be swapped without touching callers.
pub trait AuthProvider: Send + Sync {
    fn sign_up(&self, email: &str, password: &str, role: UserRole)
        -> Result<AuthSession, AuthError>;

    fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Always succeeds for well-formed input, whether or not the address has
    /// an account, so callers cannot probe for registered emails.
    fn reset_password(&self, email: &str) -> Result<(), AuthError>;

    /// `None` when the token does not resolve to a live session.
    fn current_profile(&self, access_token: &str) -> Result<Option<UserProfile>, AuthError>;
}

/// Error taxonomy shared by every identity backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("password must be at least {min_len} characters")]
    WeakPassword { min_len: usize },
    #[error("not signed in")]
    NotSignedIn,
    #[error("identity backend unavailable: {0}")]
    Unavailable(String),
}
