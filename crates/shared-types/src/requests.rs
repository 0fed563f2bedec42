use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::case::CaseStatus;
use crate::common::id_string_or_default;
use crate::error::AppError;
use crate::models::UserRole;
use crate::permission::AccessLevel;

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account registration request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

impl RegisterRequest {
    /// Reject obviously incomplete forms before they reach the server.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if !self.email.contains('@') {
            field_errors.insert("email".to_string(), "Valid email is required".to_string());
        }
        if self.password.is_empty() {
            field_errors.insert("password".to_string(), "Password is required".to_string());
        }
        if self.full_name.trim().is_empty() {
            field_errors.insert("full_name".to_string(), "Full name is required".to_string());
        }
        if self.role == UserRole::Unknown {
            field_errors.insert("role".to_string(), "Choose a role".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Validation failed", field_errors))
        }
    }
}

/// Request DTO for creating a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCaseRequest {
    pub case_name: String,
}

impl CreateCaseRequest {
    /// Trim the name and reject empty ones.
    pub fn new(case_name: &str) -> Result<Self, AppError> {
        let case_name = case_name.trim();
        if case_name.is_empty() {
            return Err(AppError::bad_request("Case name is required"));
        }
        Ok(Self {
            case_name: case_name.to_string(),
        })
    }
}

/// Response to case creation. Older backends reply with a bare ack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreatedCase {
    #[serde(default, deserialize_with = "id_string_or_default")]
    pub case_id: String,
}

/// Request DTO for changing a case's status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateStatusRequest {
    pub status: CaseStatus,
}

/// Request DTO for granting a collaborator access to a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrantAccessRequest {
    pub user_id: String,
    pub access_level: AccessLevel,
}
