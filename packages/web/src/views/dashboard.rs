use dioxus::prelude::*;
use ui::{use_auth, RequireAuth};

/// Authenticated landing view.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireAuth {
            AccountOverview {}
        }
    }
}

#[component]
fn AccountOverview() -> Element {
    let auth = use_auth();
    let greeting = auth()
        .user
        .map(|user| format!("Welcome back, {}.", user.display_name()))
        .unwrap_or_else(|| "Welcome back.".to_string());

    rsx! {
        section {
            class: "account-page",
            h1 { "Dashboard" }
            p { class: "account-greeting", "{greeting}" }
            ul {
                class: "account-links",
                li { Link { to: crate::Route::Profile {}, "Your profile" } }
                li { Link { to: crate::Route::Orders {}, "Order history" } }
                li { Link { to: crate::Route::Cart {}, "Cart" } }
            }
        }
    }
}
