//! Wire shapes decoded from search responses.
//!
//! These mirror the server's JSON but are owned by the client so either side
//! can evolve its internal types independently.

use serde::Deserialize;

/// Gender as reported by the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// `"male"` on the wire.
    Male,
    /// `"female"` on the wire.
    Female,
}

/// One user record returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Stable numeric identifier.
    pub id: u32,
    /// Given and family name joined by a single space.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Free-text biography.
    pub about: String,
    /// Gender.
    pub gender: Gender,
}

/// Structured rejection body sent with coded 400 responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponseDto {
    pub(crate) error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_user_array() {
        let body = r#"[{"id":0,"name":"Boyd Wolf","age":22,"about":"Nulla.","gender":"male"}]"#;
        let users: Vec<User> = serde_json::from_str(body).expect("valid payload");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Boyd Wolf");
        assert_eq!(users[0].gender, Gender::Male);
    }

    #[test]
    fn rejects_users_missing_fields() {
        let body = r#"[{"id":0,"name":"Boyd Wolf"}]"#;
        assert!(serde_json::from_str::<Vec<User>>(body).is_err());
    }

    #[test]
    fn decodes_an_error_body_and_ignores_extra_fields() {
        let body = r#"{"error":"ErrorBadOrderBy","message":"order_by must be -1, 0 or 1"}"#;
        let dto: ErrorResponseDto = serde_json::from_str(body).expect("valid payload");
        assert_eq!(dto.error, "ErrorBadOrderBy");
    }
}
