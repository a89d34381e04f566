use dioxus::prelude::*;
use ui::SiteHeader;

#[component]
pub fn Contact() -> Element {
    rsx! {
        SiteHeader {}
        section {
            class: "page-body",
            h1 { "Contact" }
            p { "Write to hello@meridian.market and we will get back to you." }
        }
    }
}
