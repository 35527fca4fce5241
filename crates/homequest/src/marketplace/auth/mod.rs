//! Authentication boundary: a single capability trait over the identity
//! backend plus the profile model the client consumes.

pub mod domain;
pub mod provider;
pub mod router;

pub use domain::{display_name_from_email, AuthSession, UserProfile, UserRole};
pub use provider::{AuthError, AuthProvider};
pub use router::auth_router;
