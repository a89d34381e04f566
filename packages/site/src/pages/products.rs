use dioxus::prelude::*;
use ui::SiteHeader;

#[component]
pub fn Products() -> Element {
    rsx! {
        SiteHeader {}
        section {
            class: "page-body",
            h1 { "Products" }
            p { "Our catalog is being restocked. Check back shortly." }
        }
    }
}
