use dioxus::prelude::*;

/// Bare campaign landing page. Deliberately has no navigation region; the
/// header renderer is simply never mounted here.
#[component]
pub fn Promo() -> Element {
    rsx! {
        section {
            class: "promo-hero",
            h1 { "Summer clearance" }
            p { "Up to 40% off workshop seconds, this week only." }
            a { class: "page-cta", href: "/products", "Shop the sale" }
        }
    }
}
