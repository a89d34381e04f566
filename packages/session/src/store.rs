//! Persistence wrapper over the three session keys.
//!
//! The store owns the key layout and nothing else: no derived predicates, no
//! navigation, no notifications. Both surfaces construct their own store over
//! the shared backend at initialization and re-read it there — there is no
//! in-memory cache shared between program instances.

use crate::backend::StorageBackend;
use crate::profile::UserProfile;

/// Opaque bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Serialized [`UserProfile`].
pub const USER_KEY: &str = "user";
/// String-encoded cart size for badge display.
pub const CART_COUNT_KEY: &str = "cart_count";

/// The token+profile pair representing the current visitor, or its absence.
///
/// Absence of either field is a valid, common state (anonymous visitor),
/// never an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionRecord {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Storage-backed session record, shared by every surface of the site.
#[derive(Clone, Debug)]
pub struct SessionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist a token+profile pair, replacing prior values.
    ///
    /// The profile is serialized before either key is touched so the pair is
    /// written together or not at all.
    pub fn set(&self, token: &str, user: &UserProfile) {
        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!("could not serialize profile, session left unchanged: {err}");
                return;
            }
        };
        self.backend.set(TOKEN_KEY, token);
        self.backend.set(USER_KEY, &json);
    }

    /// Best-effort reconstruction of the persisted record.
    ///
    /// A corrupt stored profile yields `user = None` with the token left
    /// untouched, so a later profile re-fetch can repair the record without
    /// forcing a re-login.
    pub fn get(&self) -> SessionRecord {
        let token = self.backend.get(TOKEN_KEY);
        let user = self
            .backend
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!("stored profile is unreadable, treating it as absent: {err}");
                    None
                }
            });
        SessionRecord { token, user }
    }

    /// Remove token, profile and cart counter.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.backend.remove(CART_COUNT_KEY);
    }

    /// Cached cart size; absent or garbled values read as zero.
    pub fn cart_count(&self) -> u32 {
        self.backend
            .get(CART_COUNT_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn set_cart_count(&self, count: u32) {
        self.backend.set(CART_COUNT_KEY, &count.to_string());
    }

    pub fn clear_cart(&self) {
        self.backend.remove(CART_COUNT_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::profile::Role;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: Some("Ada".to_string()),
            email: "ada@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_set_then_get_roundtrips() {
        let store = SessionStore::new(MemoryBackend::new());

        let user = profile(Role::User);
        store.set("tok-123", &user);

        let record = store.get();
        assert_eq!(record.token.as_deref(), Some("tok-123"));
        assert_eq!(record.user, Some(user));
    }

    #[test]
    fn test_empty_backend_is_anonymous() {
        let store = SessionStore::new(MemoryBackend::new());

        let record = store.get();
        assert!(record.token.is_none());
        assert!(record.user.is_none());
    }

    #[test]
    fn test_corrupt_profile_leaves_token_untouched() {
        let backend = MemoryBackend::new();
        let store = SessionStore::new(backend.clone());

        store.set("tok-123", &profile(Role::User));
        backend.set(USER_KEY, "{not json");

        let record = store.get();
        assert_eq!(record.token.as_deref(), Some("tok-123"));
        assert!(record.user.is_none());
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let backend = MemoryBackend::new();
        let store = SessionStore::new(backend.clone());

        store.set("tok-123", &profile(Role::Admin));
        store.set_cart_count(4);
        store.clear();

        assert!(backend.get(TOKEN_KEY).is_none());
        assert!(backend.get(USER_KEY).is_none());
        assert!(backend.get(CART_COUNT_KEY).is_none());
    }

    #[test]
    fn test_cart_count_defaults_to_zero() {
        let backend = MemoryBackend::new();
        let store = SessionStore::new(backend.clone());

        assert_eq!(store.cart_count(), 0);

        backend.set(CART_COUNT_KEY, "three");
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_cart_count_roundtrips() {
        let store = SessionStore::new(MemoryBackend::new());

        store.set_cart_count(7);
        assert_eq!(store.cart_count(), 7);

        store.clear_cart();
        assert_eq!(store.cart_count(), 0);
    }
}
