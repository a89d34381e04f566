use serde::{Deserialize, Serialize};

/// Authorization level carried inside the cached profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Cached identity of the signed-in visitor.
///
/// This is the client-safe projection handed over by the login collaborator;
/// it never contains credentials. It is serialized to JSON under the `user`
/// storage key so both surfaces reconstruct the same identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
