use dioxus::prelude::*;
use ui::SiteHeader;

#[component]
pub fn Home() -> Element {
    rsx! {
        SiteHeader {}
        section {
            class: "page-hero",
            h1 { "Meridian Market" }
            p { "Small-batch goods and services, shipped from our workshop to your door." }
            a { class: "page-cta", href: "/products", "Browse products" }
        }
    }
}
