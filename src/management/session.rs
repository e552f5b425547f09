use tracing::{debug, warn};

use crate::{
    error::{AppError, Result},
    management::CredentialStore,
    types::Credential,
};

/// Looks up `key` in a `#k=v&k=v` redirect fragment.
pub fn fragment_param(fragment: &str, key: &str) -> Option<String> {
    let pairs = fragment.strip_prefix('#').unwrap_or(fragment);
    url::form_urlencoded::parse(pairs.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Extracts the access token from a redirect fragment.
///
/// # Errors
///
/// Returns [`AppError::MalformedRedirect`] when the fragment has no
/// `access_token` key or its value is empty.
///
/// # Example
///
/// ```
/// let credential = extract_token("#access_token=ABC123&token_type=Bearer")?;
/// assert_eq!(credential.as_str(), "ABC123");
/// ```
pub fn extract_token(fragment: &str) -> Result<Credential> {
    fragment_param(fragment, "access_token")
        .filter(|token| !token.is_empty())
        .map(Credential::new)
        .ok_or(AppError::MalformedRedirect)
}

/// Owns the live credential and its persisted slot.
#[derive(Debug)]
pub struct Session {
    store: CredentialStore,
    credential: Option<Credential>,
}

impl Session {
    /// Resolves the session from the persisted slot or a redirect fragment.
    ///
    /// A persisted credential wins and the fragment is left untouched.
    /// Otherwise the fragment is consumed (set to `None`) and its token, if
    /// any, is persisted. A malformed fragment yields an unauthenticated
    /// session.
    pub async fn initialize(store: CredentialStore, fragment: &mut Option<String>) -> Self {
        if let Some(credential) = store.load().await {
            debug!(path = %store.path().display(), "using persisted credential");
            return Self {
                store,
                credential: Some(credential),
            };
        }

        let Some(raw) = fragment.take() else {
            return Self {
                store,
                credential: None,
            };
        };

        let credential = match extract_token(&raw) {
            Ok(credential) => credential,
            Err(e) => {
                warn!(error = %e, "ignoring redirect fragment");
                return Self {
                    store,
                    credential: None,
                };
            }
        };

        if let Err(e) = store.persist(&credential).await {
            warn!(error = %e, path = %store.path().display(), "failed to persist credential");
        }

        Self {
            store,
            credential: Some(credential),
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Drops the credential and clears the persisted slot.
    pub async fn logout(&mut self) -> Result<()> {
        self.credential = None;
        self.store.clear().await
    }
}
