//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use session::{Role, SessionRecord, UserProfile};

use crate::notify::{notify, use_notifications, NotifyKind};
use crate::platform::{make_session, PlatformSession};

/// Delay between the farewell notice and leaving for the landing view.
/// A UX contract, not a correctness requirement.
pub const LOGOUT_REDIRECT_DELAY_MS: u32 = 1_200;

pub(crate) const FAREWELL: &str = "Signed out. See you soon!";

/// Authentication state for one program instance.
///
/// `loading` stays true until the persisted record has been consulted; no
/// protected content may render while it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map_or(false, |user| user.role == Role::Admin)
    }

    /// A resolved state mirroring the persisted record.
    pub fn from_record(record: SessionRecord) -> Self {
        Self {
            token: record.token,
            user: record.user,
            loading: false,
        }
    }

    fn signed_out() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the visitor logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// In-memory mirror of the cart counter for the single-page surface. The
/// persisted value stays authoritative; this signal only keeps the badge
/// current between navigations.
pub fn use_cart() -> Signal<u32> {
    use_context::<Signal<u32>>()
}

/// The session handle for this program instance.
pub fn use_session() -> PlatformSession {
    use_context::<PlatformSession>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable the guard and the navbar.
///
/// The first consult of the persisted record resolves after first paint, so
/// every consumer observes an explicit loading phase before identity is
/// known.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_context_provider(make_session);
    let mut auth_state = use_signal(AuthState::default);
    let mut cart_count = use_signal(|| 0u32);

    let consult = session.clone();
    let _ = use_resource(move || {
        let session = consult.clone();
        async move {
            cart_count.set(session.cart_count());
            auth_state.set(AuthState::from_record(session.record()));
        }
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| cart_count);

    rsx! {
        {children}
    }
}

/// Clear the persisted session, reset this instance's auth signal and emit
/// the farewell notice. Scheduling the landing-view navigation is left to
/// the calling surface adapter.
pub fn sign_out(
    session: &PlatformSession,
    auth: &mut Signal<AuthState>,
    notices: &mut Signal<crate::Notifications>,
) {
    session.logout();
    auth.set(AuthState::signed_out());
    notify(notices, NotifyKind::Success, FAREWELL);
}

/// Logout action for the single-page surface.
///
/// The delayed navigation is held as a cancellable task: if this instance is
/// torn down before the delay elapses, `use_drop` cancels it so the timer
/// cannot act against a destroyed scope.
#[component]
pub fn LogoutButton(#[props(default = "".to_string())] class: String) -> Element {
    let session = use_session();
    let mut auth = use_auth();
    let mut cart = use_cart();
    let mut notices = use_notifications();
    let nav = use_navigator();
    let mut pending: Signal<Option<Task>> = use_signal(|| None);

    use_drop(move || {
        if let Some(task) = pending.with_mut(|p| p.take()) {
            task.cancel();
        }
    });

    let onclick = move |_| {
        sign_out(&session, &mut auth, &mut notices);
        cart.set(0);
        if let Some(task) = pending.with_mut(|p| p.take()) {
            task.cancel();
        }
        let task = spawn(async move {
            sleep_ms(LOGOUT_REDIRECT_DELAY_MS).await;
            nav.replace("/");
        });
        pending.set(Some(task));
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "Log out"
        }
    }
}

pub(crate) async fn sleep_ms(ms: u32) {
    let duration = std::time::Duration::from_millis(u64::from(ms));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: None,
            email: "ada@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_default_state_is_loading_and_anonymous() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_state_mirrors_record() {
        let state = AuthState::from_record(SessionRecord {
            token: Some("tok-123".to_string()),
            user: Some(profile(Role::Admin)),
        });
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert!(state.is_admin());
    }

    #[test]
    fn test_admin_needs_profile() {
        let state = AuthState::from_record(SessionRecord {
            token: Some("tok-123".to_string()),
            user: None,
        });
        assert!(state.is_authenticated());
        assert!(!state.is_admin());
    }
}
