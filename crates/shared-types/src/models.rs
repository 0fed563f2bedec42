use serde::{Deserialize, Serialize};

use crate::common::id_string;

/// Account role, fixed at registration.
///
/// - `Advocate`: practising lawyer; access to a case comes from its permission list.
/// - `Judge`: may manage every case it can open, regardless of permissions.
/// - `GovernmentAgency` / `PrivateIntel`: investigative accounts, permission-scoped.
/// - `Unknown`: any role string this client does not recognise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Advocate,
    Judge,
    GovernmentAgency,
    PrivateIntel,
    #[default]
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Roles a user may pick when registering.
    pub const REGISTERABLE: [UserRole; 4] = [
        UserRole::Advocate,
        UserRole::Judge,
        UserRole::GovernmentAgency,
        UserRole::PrivateIntel,
    ];

    /// Parse a role string. Unknown values map to `Unknown`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "advocate" => UserRole::Advocate,
            "judge" => UserRole::Judge,
            "government_agency" => UserRole::GovernmentAgency,
            "private_intel" => UserRole::PrivateIntel,
            _ => UserRole::Unknown,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Advocate => "advocate",
            UserRole::Judge => "judge",
            UserRole::GovernmentAgency => "government_agency",
            UserRole::PrivateIntel => "private_intel",
            UserRole::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Advocate => "Advocate",
            UserRole::Judge => "Judge",
            UserRole::GovernmentAgency => "Government Agency",
            UserRole::PrivateIntel => "Private Intelligence",
            UserRole::Unknown => "Unknown",
        }
    }

    pub fn is_judge(&self) -> bool {
        matches!(self, UserRole::Judge)
    }
}

/// The authenticated principal returned by login and the session check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
}

/// A user search hit, used to pick a grantee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    pub full_name: String,
    pub email: String,
}

/// Body of `/api/session`, `/api/login` and `/api/register` responses.
/// A missing or null `user` means nobody is signed in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
}
