//! This crate contains all shared UI for the workspace: the auth context and
//! its per-surface adapters, the route guard, the notification utility and
//! the navigation renderers.

mod platform;
pub use platform::{make_session, PlatformBackend, PlatformSession};

mod auth;
pub use auth::{
    sign_out, use_auth, use_cart, use_session, AuthProvider, AuthState, LogoutButton,
    LOGOUT_REDIRECT_DELAY_MS,
};

mod guard;
pub use guard::{evaluate_guard, login_redirect, GuardOutcome, RequireAuth, ACCOUNT_LANDING};

mod notify;
pub use notify::{notify, use_notifications, NotificationHost, Notice, Notifications, NotifyKind};

mod header;
pub use header::{CartBadge, CartLink, IdentityMenu, Navbar, SiteHeader};
