//! Navigation renderers for both surfaces.
//!
//! [`SiteHeader`] is the legacy-surface renderer: it consults the persisted
//! record exactly once per page load and paints the matching affordances.
//! [`Navbar`] is the single-page adapter fed from the auth signal. Both
//! delegate every identity decision to the same session facade; the cart
//! badge is painted independently of the identity branch.

use dioxus::prelude::*;
use session::{Role, UserProfile};

use crate::auth::{use_auth, use_cart, LogoutButton, FAREWELL};
use crate::notify::{notify, use_notifications, NotifyKind};
use crate::platform::make_session;

/// Cart-count badge; paints whenever the counter is nonzero.
#[component]
pub fn CartBadge(count: u32) -> Element {
    rsx! {
        if count > 0 {
            span { class: "cart-badge", "{count}" }
        }
    }
}

/// Cart affordance for the legacy surface: plain anchor, full page load.
#[component]
pub fn CartLink(count: u32) -> Element {
    rsx! {
        a {
            class: "cart-link",
            href: "/cart",
            span { class: "cart-icon", "Cart" }
            CartBadge { count: count }
        }
    }
}

/// Identity dropdown for the legacy surface. Links are plain anchors into
/// the account area; the admin-panel entry only exists for admins.
#[component]
pub fn IdentityMenu(user: UserProfile, on_logout: EventHandler<()>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "identity-menu",
            button {
                class: "identity-toggle",
                onclick: move |_| open.set(!open()),
                "{user.display_name()}"
            }
            if open() {
                div {
                    class: "identity-dropdown",
                    a { href: "/dashboard", "Dashboard" }
                    a { href: "/profile", "Profile" }
                    a { href: "/orders", "Order history" }
                    if user.role == Role::Admin {
                        a { class: "identity-admin", href: "/admin", "Admin panel" }
                    }
                    button {
                        class: "identity-logout",
                        onclick: move |_| on_logout.call(()),
                        "Log out"
                    }
                }
            }
        }
    }
}

/// Shared header for the legacy multi-page surface.
///
/// Reads the session record once at mount ("document ready" on this surface
/// means component mount, before first paint). Pages without a navigation
/// region simply never mount this component.
#[component]
pub fn SiteHeader() -> Element {
    let session = use_hook(make_session);
    let record = use_hook({
        let session = session.clone();
        move || session.record()
    });
    let cart = use_hook({
        let session = session.clone();
        move || session.cart_count()
    });
    let mut notices = use_notifications();

    // Dropping the handle cancels the pending redirect, so teardown of this
    // page cannot be outrun by the timer.
    #[cfg(target_arch = "wasm32")]
    let mut pending: Signal<Option<gloo_timers::callback::Timeout>> = use_signal(|| None);

    let on_logout = move |_: ()| {
        session.logout();
        notify(&mut notices, NotifyKind::Success, FAREWELL);
        #[cfg(target_arch = "wasm32")]
        {
            let timeout = gloo_timers::callback::Timeout::new(crate::auth::LOGOUT_REDIRECT_DELAY_MS, || {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
            pending.set(Some(timeout));
        }
    };

    rsx! {
        header {
            class: "site-header",
            a { class: "site-brand", href: "/", "Meridian Market" }
            nav {
                class: "site-nav",
                a { href: "/products", "Products" }
                a { href: "/services", "Services" }
                a { href: "/blog", "Blog" }
                a { href: "/contact", "Contact" }
            }
            div {
                class: "site-actions",
                CartLink { count: cart }
                if let Some(user) = record.user.clone() {
                    IdentityMenu { user: user, on_logout: on_logout }
                } else {
                    a { class: "site-login", href: "/login", "Log in" }
                    a { class: "site-register", href: "/register", "Register" }
                }
            }
        }
    }
}

/// Header for the single-page surface: same affordances, driven reactively
/// by the auth signal so a login or logout repaints it without a reload.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let cart = use_cart();
    let state = auth();

    rsx! {
        header {
            class: "site-header",
            Link { class: "site-brand", to: "/", "Meridian Market" }
            div {
                class: "site-actions",
                Link {
                    class: "cart-link",
                    to: "/cart",
                    span { class: "cart-icon", "Cart" }
                    CartBadge { count: cart() }
                }
                if !state.loading {
                    if let Some(user) = state.user.clone() {
                        span { class: "identity-name", "{user.display_name()}" }
                        Link { to: "/dashboard", "Dashboard" }
                        Link { to: "/profile", "Profile" }
                        Link { to: "/orders", "Orders" }
                        if user.role == Role::Admin {
                            Link { class: "identity-admin", to: "/admin", "Admin panel" }
                        }
                        LogoutButton { class: "identity-logout" }
                    } else {
                        Link { class: "site-login", to: "/login", "Log in" }
                        Link { class: "site-register", to: "/register", "Register" }
                    }
                }
            }
        }
    }
}
