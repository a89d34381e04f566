use dioxus::prelude::*;
use ui::{use_cart, use_session};

/// Cart view; public. Writes the persisted counter so every surface's badge
/// picks it up on its next load, and mirrors it into the shared signal so
/// this surface's badge repaints immediately.
#[component]
pub fn Cart() -> Element {
    let session = use_session();
    let mut count = use_cart();

    let add = {
        let session = session.clone();
        move |_| {
            let next = count() + 1;
            session.set_cart_count(next);
            count.set(next);
        }
    };

    let remove = {
        let session = session.clone();
        move |_| {
            let next = count().saturating_sub(1);
            session.set_cart_count(next);
            count.set(next);
        }
    };

    rsx! {
        section {
            class: "cart-page",
            h1 { "Your cart" }
            p { class: "cart-summary", "{count()} items" }
            div {
                class: "cart-controls",
                button { class: "cart-add", onclick: add, "Add item" }
                button { class: "cart-remove", onclick: remove, "Remove item" }
            }
        }
    }
}
