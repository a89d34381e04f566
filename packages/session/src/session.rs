//! Auth facade: derived predicates and session mutations.

use crate::backend::StorageBackend;
use crate::profile::{Role, UserProfile};
use crate::store::{SessionRecord, SessionStore};

/// Handle over the persisted session, constructed once per program instance
/// and threaded (via context in the UI crates) to whichever component needs
/// it.
///
/// The predicates are pure functions of the persisted record, re-read on
/// every call: the store is the single source of truth across surfaces, so
/// the facade never caches. Cloning the handle shares the underlying
/// backend.
#[derive(Clone, Debug)]
pub struct Session<B: StorageBackend> {
    store: SessionStore<B>,
}

impl<B: StorageBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: SessionStore::new(backend),
        }
    }

    /// Fresh read of the persisted record.
    pub fn record(&self) -> SessionRecord {
        self.store.get()
    }

    /// Token presence is sufficient; server-side validity is a collaborator
    /// concern.
    pub fn is_authenticated(&self) -> bool {
        self.store.get().token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.store
            .get()
            .user
            .map_or(false, |user| user.role == Role::Admin)
    }

    /// Persist an already-validated token+profile pair from the login
    /// collaborator.
    pub fn login(&self, token: &str, user: &UserProfile) {
        self.store.set(token, user);
    }

    /// Destroy the session record and the cart counter.
    ///
    /// The farewell notification and the delayed navigation back to the
    /// landing view are surface concerns layered on top by the UI adapters.
    pub fn logout(&self) {
        self.store.clear();
    }

    pub fn cart_count(&self) -> u32 {
        self.store.cart_count()
    }

    pub fn set_cart_count(&self, count: u32) {
        self.store.set_cart_count(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::store::{CART_COUNT_KEY, TOKEN_KEY, USER_KEY};

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: None,
            email: "ada@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_anonymous_session_has_no_privileges() {
        let session = Session::new(MemoryBackend::new());

        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_login_sets_predicates() {
        let session = Session::new(MemoryBackend::new());

        session.login("tok-123", &profile(Role::User));
        assert!(session.is_authenticated());
        assert!(!session.is_admin());

        session.login("tok-456", &profile(Role::Admin));
        assert!(session.is_authenticated());
        assert!(session.is_admin());
    }

    #[test]
    fn test_logout_clears_everything() {
        let backend = MemoryBackend::new();
        let session = Session::new(backend.clone());

        session.login("tok-123", &profile(Role::Admin));
        session.set_cart_count(3);
        session.logout();

        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.cart_count(), 0);
        assert!(backend.get(TOKEN_KEY).is_none());
        assert!(backend.get(USER_KEY).is_none());
        assert!(backend.get(CART_COUNT_KEY).is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let session = Session::new(MemoryBackend::new());

        session.login("tok-123", &profile(Role::User));
        session.logout();
        let after_first = session.record();

        session.logout();
        assert_eq!(session.record(), after_first);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_admin_requires_profile_not_just_token() {
        let backend = MemoryBackend::new();
        let session = Session::new(backend.clone());

        session.login("tok-123", &profile(Role::Admin));
        // Corrupt the cached profile: identity becomes absent, token stays.
        backend.set(USER_KEY, "][");

        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }
}
