use dioxus::prelude::*;
use ui::SiteHeader;

#[component]
pub fn Services() -> Element {
    rsx! {
        SiteHeader {}
        section {
            class: "page-body",
            h1 { "Services" }
            p { "Repairs, restorations and custom commissions." }
        }
    }
}
