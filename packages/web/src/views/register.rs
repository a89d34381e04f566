//! Registration page view.

use dioxus::prelude::*;
use ui::{notify, use_auth, use_notifications, use_session, AuthState, NotifyKind};

#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut notices = use_notifications();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if !auth().loading && auth().is_authenticated() {
        nav.replace(ui::ACCOUNT_LANDING);
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please choose a password".to_string()));
                return;
            }

            loading.set(true);
            match api::register(&n, &e, &p).await {
                Ok(signed) => {
                    session.login(&signed.token, &signed.user);
                    auth.set(AuthState::from_record(session.record()));
                    notify(&mut notices, NotifyKind::Success, "Welcome to Meridian Market!");
                    nav.replace(ui::ACCOUNT_LANDING);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Create your account" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: crate::Route::Login { redirect: String::new() }, "Sign in" }
            }
        }
    }
}
