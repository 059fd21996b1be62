//! # Session Store
//!
//! Persistent key-value storage for the signed-in session: the access token,
//! the refresh token and a JSON snapshot of the user identity.
//!
//! The store is injected (as `Arc<dyn SessionStore>`) into the transport and
//! the façade instead of being ambient global state, so tests can run against
//! [`MemorySessionStore`] while the CLI persists to disk with
//! [`FileSessionStore`].
//!
//! ```rust
//! use lms_client::session::{MemorySessionStore, Session};
//! use shared::AuthTokens;
//!
//! let session = Session::new(MemorySessionStore::new());
//! assert!(session.access_token().is_none());
//!
//! session.store_tokens(&AuthTokens {
//!     access_token: "a".to_string(),
//!     refresh_token: "r".to_string(),
//! });
//! assert_eq!(session.access_token().as_deref(), Some("a"));
//!
//! session.logout();
//! assert!(session.tokens().is_none());
//! ```

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use std::sync::Arc;

use shared::{AuthTokens, AuthUser};

use crate::core::error::Result;

/// Key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Key of the JSON-serialized [`AuthUser`] snapshot.
pub const USER_KEY: &str = "user";

/// Persistent string key-value storage.
///
/// Reads are synchronous snapshots. Implementations synchronize internally
/// and must never hold a lock across an `.await`.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Typed view over a [`SessionStore`], cheap to clone.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_store(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub fn access_token(&self) -> Option<String> {
        self.store
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// Both tokens, when both are present.
    pub fn tokens(&self) -> Option<AuthTokens> {
        Some(AuthTokens {
            access_token: self.access_token()?,
            refresh_token: self.refresh_token()?,
        })
    }

    /// Persist both tokens. Storage failures are logged and ignored.
    pub fn store_tokens(&self, tokens: &AuthTokens) {
        let result = self
            .store
            .set(ACCESS_TOKEN_KEY, &tokens.access_token)
            .and_then(|_| self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token));

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist session tokens");
        }
    }

    /// Stored user snapshot. A corrupt snapshot reads as absent.
    pub fn user(&self) -> Option<AuthUser> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable user snapshot");
                None
            }
        }
    }

    /// Persist the user snapshot. Storage failures are logged and ignored.
    pub fn store_user(&self, user: &AuthUser) {
        let result = serde_json::to_string(user)
            .map_err(Into::into)
            .and_then(|raw| self.store.set(USER_KEY, &raw));

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist user snapshot");
        }
    }

    /// Forget tokens and user snapshot.
    pub fn logout(&self) {
        for key in [USER_KEY, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "Failed to remove session key");
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.access_token().is_some() || self.store.get(USER_KEY).is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}
