//! # API crate — HTTP client for the authentication backend
//!
//! The storefront surfaces never issue or validate credentials themselves;
//! they exchange them with the backend through this crate and hand the
//! result to the session facade. Everything here is a thin typed wrapper
//! over the backend's JSON endpoints.
//!
//! | Function | Endpoint | Returns |
//! |----------|----------|---------|
//! | [`sign_in`] | `POST /api/auth/sign-in` | [`SignIn`] — token + profile pair |
//! | [`register`] | `POST /api/auth/register` | [`SignIn`] for the new account |
//!
//! On wasm32 the calls go out via `gloo-net`; on every other target they
//! fail with [`ApiError::Unsupported`], since the backend is only reachable
//! from the browser runtime.

#![allow(clippy::unused_async)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use session::UserProfile;

/// Errors crossing the backend boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid email or password")]
    Unauthorized,
    #[error("unexpected response status: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("only available in the browser runtime")]
    Unsupported,
}

/// Successful login/registration payload: an already-validated pair the
/// session facade persists as-is.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SignIn {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Exchange credentials for a token + profile pair.
pub async fn sign_in(email: &str, password: &str) -> Result<SignIn, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        post_json("/api/auth/sign-in", &SignInRequest { email, password }).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (email, password);
        Err(ApiError::Unsupported)
    }
}

/// Create an account and sign it in, in one exchange.
pub async fn register(name: &str, email: &str, password: &str) -> Result<SignIn, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        post_json(
            "/api/auth/register",
            &RegisterRequest {
                name,
                email,
                password,
            },
        )
        .await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unsupported)
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<SignIn, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| {
            tracing::error!("auth backend unreachable: {err}");
            ApiError::Network(err.to_string())
        })?;

    match resp.status() {
        200 => resp
            .json::<SignIn>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string())),
        401 => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::Role;

    #[test]
    fn test_sign_in_payload_wire_format() {
        let payload: SignIn = serde_json::from_str(
            r#"{
                "token": "tok-123",
                "user": {
                    "id": "u-1",
                    "name": "Ada",
                    "email": "ada@example.com",
                    "role": "admin"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(payload.token, "tok-123");
        assert_eq!(payload.user.role, Role::Admin);
        assert_eq!(payload.user.display_name(), "Ada");
    }
}
