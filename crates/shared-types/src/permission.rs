use serde::{Deserialize, Serialize};

use crate::common::id_string;
use crate::models::User;

/// Grade of access a collaborator holds on one case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    ViewOnly,
    Sudo,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::ViewOnly => "view_only",
            AccessLevel::Sudo => "sudo",
        }
    }
}

/// A collaborator grant on a case. A user appears at most once per case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub access_level: AccessLevel,
}

/// Whether `user` may change the case status and manage its collaborators.
///
/// Judges always can; anyone else needs a `sudo` grant in `permissions`.
/// Presentation gating only: the server enforces the same rule.
pub fn can_manage(user: &User, permissions: &[Permission]) -> bool {
    user.role.is_judge()
        || permissions
            .iter()
            .find(|p| p.user_id == user.user_id)
            .is_some_and(|p| p.access_level == AccessLevel::Sudo)
}
