use dioxus::prelude::*;
use ui::SiteHeader;

#[component]
pub fn Blog() -> Element {
    rsx! {
        SiteHeader {}
        section {
            class: "page-body",
            h1 { "From the workshop" }
            p { "Notes on what we are making and mending." }
        }
    }
}
