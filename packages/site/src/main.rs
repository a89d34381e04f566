//! Legacy multi-page surface.
//!
//! There is no client-side router here: every path is an independent full
//! page load, navigation is plain anchors, and the shared header repaints
//! from the persisted session at each load. Account and admin screens live
//! on the single-page surface; this one only links to them.

use dioxus::prelude::*;

use pages::{Blog, Contact, Home, Products, Promo, Services};

mod pages;

const SITE_CSS: Asset = asset!("/assets/site.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let page = match current_pathname().as_str() {
        "/products" => rsx! { Products {} },
        "/services" => rsx! { Services {} },
        "/blog" => rsx! { Blog {} },
        "/contact" => rsx! { Contact {} },
        "/promo" => rsx! { Promo {} },
        _ => rsx! { Home {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }

        ui::NotificationHost {
            {page}
        }
    }
}

fn current_pathname() -> String {
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
