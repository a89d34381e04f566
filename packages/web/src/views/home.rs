use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "Meridian Market" }
            p { "Small-batch goods and services, shipped from our workshop to your door." }
            div {
                class: "hero-actions",
                Link { class: "hero-cta", to: crate::Route::Cart {}, "View cart" }
                Link { class: "hero-cta", to: crate::Route::Dashboard {}, "My account" }
            }
        }
    }
}
