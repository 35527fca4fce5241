use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;

use homequest::config::CatalogConfig;
use homequest::error::AppError;
use homequest::marketplace::auth::{
    display_name_from_email, AuthError, AuthProvider, AuthSession, UserProfile, UserRole,
};
use homequest::marketplace::listings::{
    sample_catalog, CatalogEntry, CatalogError, CatalogImporter, CatalogRepository, ListingId,
    ListingStatus, PropertyRecord, PropertyType,
};
use homequest::marketplace::search::SortKey;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Arrival-ordered in-memory catalog. Insertion order is what the `recent`
/// sort preserves, so a Vec rather than a map.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCatalog {
    entries: Arc<Mutex<Vec<CatalogEntry>>>,
}

impl CatalogRepository for InMemoryCatalog {
    fn insert(&self, entry: CatalogEntry) -> Result<CatalogEntry, CatalogError> {
        let mut guard = self.entries.lock().expect("catalog mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.record.id == entry.record.id)
        {
            return Err(CatalogError::Conflict);
        }
        guard.push(entry.clone());
        Ok(entry)
    }

    fn update_status(&self, id: &ListingId, status: ListingStatus) -> Result<(), CatalogError> {
        let mut guard = self.entries.lock().expect("catalog mutex poisoned");
        match guard.iter_mut().find(|entry| &entry.record.id == id) {
            Some(entry) => {
                entry.status = status;
                Ok(())
            }
            None => Err(CatalogError::NotFound),
        }
    }

    fn fetch(&self, id: &ListingId) -> Result<Option<CatalogEntry>, CatalogError> {
        let guard = self.entries.lock().expect("catalog mutex poisoned");
        Ok(guard.iter().find(|entry| &entry.record.id == id).cloned())
    }

    fn active_records(&self) -> Result<Vec<PropertyRecord>, CatalogError> {
        let guard = self.entries.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|entry| entry.status.is_searchable())
            .map(|entry| entry.record.clone())
            .collect())
    }

    fn all_entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let guard = self.entries.lock().expect("catalog mutex poisoned");
        Ok(guard.clone())
    }
}

/// Fill the catalog per configuration: a CSV export when one is configured,
/// otherwise the built-in sample listings unless seeding is disabled.
pub(crate) fn hydrate_catalog(
    catalog: &InMemoryCatalog,
    config: &CatalogConfig,
) -> Result<usize, AppError> {
    let records = match &config.catalog_csv {
        Some(path) => CatalogImporter::from_path(path)?,
        None if config.seed_catalog => sample_catalog(),
        None => Vec::new(),
    };

    let count = records.len();
    for record in records {
        catalog.insert(CatalogEntry::published(record, None))?;
    }
    Ok(count)
}

pub(crate) fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    PropertyType::from_label(raw).ok_or_else(|| {
        let known = PropertyType::ordered()
            .into_iter()
            .map(|property_type| property_type.label().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown property type '{raw}' (expected one of: {known})")
    })
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "recent" => Ok(SortKey::Recent),
        "price_asc" => Ok(SortKey::PriceAsc),
        "price_desc" => Ok(SortKey::PriceDesc),
        "size_desc" => Ok(SortKey::SizeDesc),
        "popular" => Ok(SortKey::Popular),
        other => Err(format!(
            "unknown sort key '{other}' (expected recent, price_asc, price_desc, size_desc, or popular)"
        )),
    }
}

const MIN_PASSWORD_LEN: usize = 8;

struct Account {
    password: String,
    profile: UserProfile,
}

/// Mock identity backend: accounts keyed on lowercase email, opaque
/// monotonic session tokens. Stands in for the hosted provider in demos.
#[derive(Default)]
pub(crate) struct InMemoryAuthProvider {
    accounts: Mutex<HashMap<String, Account>>,
    sessions: Mutex<HashMap<String, String>>,
    sequence: AtomicU64,
}

impl InMemoryAuthProvider {
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

impl AuthProvider for InMemoryAuthProvider {
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
