//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{notify, use_auth, use_notifications, use_session, AuthState, NotifyKind};

/// Login page component.
///
/// Honors the `redirect` query parameter planted by the route guard: a
/// successful sign-in returns the visitor to the screen they were denied.
#[component]
pub fn Login(redirect: String) -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut notices = use_notifications();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let target = resolve_redirect(&redirect);

    // Already signed in: the login view is not for this visitor.
    if !auth().loading && auth().is_authenticated() {
        nav.replace(target.clone());
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        let target = target.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match api::sign_in(&e, &p).await {
                Ok(signed) => {
                    session.login(&signed.token, &signed.user);
                    auth.set(AuthState::from_record(session.record()));
                    notify(&mut notices, NotifyKind::Success, "Welcome back!");
                    nav.replace(target);
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

            h1 { class: "auth-title", "Meridian Market" }
            p { class: "auth-subtitle", "Sign in to your account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
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
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: crate::Route::Register {}, "Sign up" }
            }
        }
    }
}

/// Absent or off-site targets fall back to the account landing; the guard
/// only ever plants same-site paths here, so anything else is discarded.
fn resolve_redirect(raw: &str) -> String {
    if raw.is_empty() {
        return ui::ACCOUNT_LANDING.to_string();
    }
    let decoded = urlencoding::decode(raw)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    if decoded.starts_with('/') && !decoded.starts_with("//") {
        decoded
    } else {
        ui::ACCOUNT_LANDING.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_redirect;

    #[test]
    fn test_empty_redirect_falls_back_to_account_landing() {
        assert_eq!(resolve_redirect(""), "/dashboard");
    }

    #[test]
    fn test_encoded_redirect_is_decoded() {
        assert_eq!(resolve_redirect("%2Forders%2F42"), "/orders/42");
        assert_eq!(resolve_redirect("/profile"), "/profile");
    }

    #[test]
    fn test_offsite_redirect_is_discarded() {
        assert_eq!(resolve_redirect("https%3A%2F%2Fevil.example"), "/dashboard");
        assert_eq!(resolve_redirect("//evil.example"), "/dashboard");
    }
}
