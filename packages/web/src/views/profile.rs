use dioxus::prelude::*;
use ui::{use_auth, RequireAuth};

#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireAuth {
            ProfileDetails {}
        }
    }
}

#[component]
fn ProfileDetails() -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        section {
            class: "account-page",
            h1 { "Profile" }
            if let Some(user) = user {
                dl {
                    class: "profile-fields",
                    dt { "Name" }
                    dd { "{user.display_name()}" }
                    dt { "Email" }
                    dd { "{user.email}" }
                }
            } else {
                // Token present but cached profile unreadable; identity will
                // repaint once the profile is re-fetched.
                p { class: "profile-missing", "Your profile is being refreshed." }
            }
        }
    }
}
