//! # Library members and their roles
//!
//! The backend owns member records; the client sees two shapes of them:
//!
//! - [`UserProfile`]: name, email, role, and join date of one member. The
//!   caller's own profile is created through the first-login setup modal.
//! - [`UserEntry`]: a profile paired with the member's [`Principal`], as
//!   listed in the admin console.
//!
//! [`SessionInfo`] is what the web server knows about the signed-in browser:
//! the derived principal and the identity provider that vouched for it.

use serde::{Deserialize, Serialize};

use super::{Principal, Time};

/// Access level assigned by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::User, UserRole::Guest];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub joined_at: Time,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserEntry {
    pub principal: Principal,
    pub profile: UserProfile,
}

impl UserEntry {
    /// Case-insensitive match on name, email, or principal text.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.profile.name.to_lowercase().contains(&q)
            || self.profile.email.to_lowercase().contains(&q)
            || self.principal.as_str().to_lowercase().contains(&q)
    }
}

/// Signed-in browser session, safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    pub principal: Principal,
    pub provider: String,
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_user_entry_matches() {
        let entry = UserEntry {
            principal: Principal::new("aaaaa-bbbbb"),
            profile: UserProfile {
                name: "Asha Rao".to_string(),
                email: "asha@vemu.ac.in".to_string(),
                role: UserRole::User,
                joined_at: Time(0),
            },
        };
        assert!(entry.matches("asha"));
        assert!(entry.matches("VEMU.AC"));
        assert!(entry.matches("bbbbb"));
        assert!(!entry.matches("ravi"));
    }
}
