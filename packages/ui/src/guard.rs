//! Route guard for the single-page surface.
//!
//! A mounted guard is a small three-state machine: it starts out
//! initializing while the persisted record has not been consulted, then
//! either denies (redirecting away) or authorizes (rendering its children).
//! The decision is recomputed on every auth-state change, and every
//! navigation mounts a fresh guard, so an authorized view that loses its
//! session is torn down rather than left on screen.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};

/// Landing view for visitors who are authenticated but denied an
/// admin-only screen. Distinct from the login view on purpose.
pub const ACCOUNT_LANDING: &str = "/dashboard";

const LOGIN_PATH: &str = "/login";

/// Decision for one guard evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Persisted state not consulted yet; render a loading indication only.
    Initializing,
    /// Not authenticated: leave for the login view, remembering the origin.
    RedirectToLogin { to: String },
    /// Authenticated but not an admin on an admin-only guard.
    RedirectToAccount,
    /// Render protected content.
    Authorized,
}

/// Pure decision function behind [`RequireAuth`].
pub fn evaluate_guard(auth: &AuthState, require_admin: bool, current_path: &str) -> GuardOutcome {
    if auth.loading {
        return GuardOutcome::Initializing;
    }
    if !auth.is_authenticated() {
        return GuardOutcome::RedirectToLogin {
            to: login_redirect(current_path),
        };
    }
    if require_admin && !auth.is_admin() {
        return GuardOutcome::RedirectToAccount;
    }
    GuardOutcome::Authorized
}

/// Build `/login?redirect=<origin>` with the origin percent-encoded, so the
/// login flow can send the visitor back where they came from.
pub fn login_redirect(origin: &str) -> String {
    format!("{LOGIN_PATH}?redirect={}", urlencoding::encode(origin))
}

fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

/// Gate wrapping any protected view.
///
/// The redirect decision is fully computed before any child is rendered;
/// denied and initializing states never mount protected content.
#[component]
pub fn RequireAuth(#[props(default = false)] require_admin: bool, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match evaluate_guard(&auth(), require_admin, &current_path()) {
        GuardOutcome::Initializing => rsx! {
            div { class: "route-guard-loading", "Loading..." }
        },
        GuardOutcome::RedirectToLogin { to } => {
            nav.replace(to);
            rsx! {}
        }
        GuardOutcome::RedirectToAccount => {
            nav.replace(ACCOUNT_LANDING);
            rsx! {}
        }
        GuardOutcome::Authorized => rsx! {
            {children}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::{Role, SessionRecord, UserProfile};

    fn resolved(token: Option<&str>, role: Option<Role>) -> AuthState {
        AuthState::from_record(SessionRecord {
            token: token.map(str::to_string),
            user: role.map(|role| UserProfile {
                id: "u-1".to_string(),
                name: None,
                email: "ada@example.com".to_string(),
                role,
            }),
        })
    }

    #[test]
    fn test_initializing_never_authorizes() {
        let loading = AuthState::default();
        assert_eq!(
            evaluate_guard(&loading, false, "/dashboard"),
            GuardOutcome::Initializing
        );
        assert_eq!(
            evaluate_guard(&loading, true, "/admin"),
            GuardOutcome::Initializing
        );
    }

    #[test]
    fn test_empty_store_redirects_to_login_with_origin() {
        let anonymous = resolved(None, None);
        assert_eq!(
            evaluate_guard(&anonymous, false, "/dashboard"),
            GuardOutcome::RedirectToLogin {
                to: "/login?redirect=%2Fdashboard".to_string()
            }
        );
    }

    #[test]
    fn test_unauthenticated_is_denied_even_without_admin_requirement() {
        let anonymous = resolved(None, None);
        for require_admin in [false, true] {
            assert!(matches!(
                evaluate_guard(&anonymous, require_admin, "/orders"),
                GuardOutcome::RedirectToLogin { .. }
            ));
        }
    }

    #[test]
    fn test_plain_user_on_admin_guard_lands_on_account_not_login() {
        let user = resolved(Some("tok-123"), Some(Role::User));
        assert_eq!(
            evaluate_guard(&user, true, "/admin"),
            GuardOutcome::RedirectToAccount
        );
    }

    #[test]
    fn test_admin_passes_admin_guard() {
        let admin = resolved(Some("tok-123"), Some(Role::Admin));
        assert_eq!(
            evaluate_guard(&admin, true, "/admin"),
            GuardOutcome::Authorized
        );
    }

    #[test]
    fn test_plain_user_passes_plain_guard() {
        let user = resolved(Some("tok-123"), Some(Role::User));
        assert_eq!(
            evaluate_guard(&user, false, "/orders"),
            GuardOutcome::Authorized
        );
    }

    #[test]
    fn test_logout_while_authorized_denies_on_reevaluation() {
        let admin = resolved(Some("tok-123"), Some(Role::Admin));
        assert_eq!(
            evaluate_guard(&admin, true, "/admin"),
            GuardOutcome::Authorized
        );

        // Same guard, next evaluation after the session was cleared.
        let signed_out = resolved(None, None);
        assert_eq!(
            evaluate_guard(&signed_out, true, "/admin"),
            GuardOutcome::RedirectToLogin {
                to: "/login?redirect=%2Fadmin".to_string()
            }
        );
    }

    #[test]
    fn test_login_redirect_encodes_nested_paths() {
        assert_eq!(
            login_redirect("/orders/42"),
            "/login?redirect=%2Forders%2F42"
        );
    }
}
