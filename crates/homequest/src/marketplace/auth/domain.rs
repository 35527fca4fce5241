use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account roles the marketplace distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Realtor,
    HomeSeeker,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Realtor => "Realtor",
            Self::HomeSeeker => "Home Seeker",
        }
    }
}

/// Profile exposed to the client after authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Authenticated session handed back by sign-up and sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub profile: UserProfile,
}

/// Default display name derived from the email local part, used until the
/// user edits their profile.
pub fn display_name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or(email)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_takes_the_local_part() {
        assert_eq!(display_name_from_email("ada@example.com"), "ada");
    }

    #[test]
    fn display_name_falls_back_to_the_raw_value() {
        assert_eq!(display_name_from_email("@example.com"), "@example.com");
    }
}
