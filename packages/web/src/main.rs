use dioxus::prelude::*;

use ui::{AuthProvider, Navbar, NotificationHost};
use views::{Admin, Cart, Dashboard, Home, Login, Orders, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login?:redirect")]
        Login { redirect: String },
        #[route("/register")]
        Register {},
        #[route("/cart")]
        Cart {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/orders")]
        Orders {},
        #[route("/admin")]
        Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NotificationHost {
                Router::<Route> {}
            }
        }
    }
}

/// Shared chrome for every view: the reactive navbar above the routed
/// content.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page-main",
            Outlet::<Route> {}
        }
    }
}
