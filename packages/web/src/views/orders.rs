use dioxus::prelude::*;
use ui::RequireAuth;

#[component]
pub fn Orders() -> Element {
    rsx! {
        RequireAuth {
            section {
                class: "account-page",
                h1 { "Order history" }
                p { class: "orders-empty", "No orders yet. They will show up here once you check out." }
            }
        }
    }
}
