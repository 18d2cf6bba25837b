//! Signed-in user identity and the auth endpoint payloads.

use std::fmt::Display;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Professor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professor => "professor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Professor => "Professor",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The persisted identity of the signed-in user.
///
/// This is exactly the `user` object returned by the login endpoint; the
/// backend never returns the password. `token` is absent on cookie-only
/// deployments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Session {
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }

    pub fn is_professor(&self) -> bool {
        self.role == Role::Professor
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: Session,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Generic `{success, message}` body used by several endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MessageResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_user_object_parses_without_token() {
        let body = r#"{"success":true,"message":"welcome","user":{"user_id":"u1","name":"Hong","role":"student","email":"hong@student.ac.kr","created_at":"2025-01-01"}}"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.user.user_id, "u1");
        assert_eq!(parsed.user.role, Role::Student);
        assert_eq!(parsed.user.token, None);
    }

    #[test]
    fn session_round_trips_through_storage_json() {
        let session = Session {
            user_id: "p1".to_string(),
            role: Role::Professor,
            name: "Kim".to_string(),
            email: "kim.prof@university.ac.kr".to_string(),
            token: Some("tok".to_string()),
        };
        let stored = serde_json::to_string(&session).unwrap();
        assert!(stored.contains(r#""role":"professor""#));
        let restored: Session = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let body = r#"{"user_id":"x","name":"x","role":"admin"}"#;
        assert!(serde_json::from_str::<Session>(body).is_err());
    }
}
