use dioxus::prelude::*;
use ui::RequireAuth;

/// Store administration panel. Requires the admin role; authenticated
/// non-admins are sent back to their dashboard by the guard.
#[component]
pub fn Admin() -> Element {
    rsx! {
        RequireAuth {
            require_admin: true,
            section {
                class: "account-page",
                h1 { "Admin panel" }
                ul {
                    class: "admin-sections",
                    li { "Products" }
                    li { "Services" }
                    li { "Blog posts" }
                    li { "Subscribers" }
                }
            }
        }
    }
}
