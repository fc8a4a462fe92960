use serde::{Deserialize, Serialize};

/// Verdict of a password policy check.
///
/// All five flags are populated on every call so the UI can render a live
/// requirement checklist; `error` carries the first unmet requirement in
/// priority order, or `None` when the password satisfies the policy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub error: Option<String>,
}

impl PasswordChecks {
    /// True when every requirement is met.
    pub fn is_satisfied(&self) -> bool {
        self.min_length
            && self.has_uppercase
            && self.has_lowercase
            && self.has_number
            && self.has_special_char
    }
}

/// Body of a sign-in request. The first field doubles as username or email.
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Body of a sign-up request.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Canonical authentication response.
///
/// Servers have been observed answering with `error` or `message` for
/// failures; both are accepted here and normalized through
/// [`failure_message`](AuthResponse::failure_message) so the rest of the
/// client only ever sees one contract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    pub access_token: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl AuthResponse {
    /// The token, if present and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Human-readable failure text: `error` wins over `message`, and the
    /// caller-supplied fallback covers bodies that carry neither.
    pub fn failure_message(&self, fallback: &str) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_error_field() {
        let resp = AuthResponse {
            access_token: None,
            message: Some("something happened".to_string()),
            error: Some("invalid credentials".to_string()),
        };
        assert_eq!(resp.failure_message("fallback"), "invalid credentials");
    }

    #[test]
    fn test_failure_message_falls_back_to_message_then_default() {
        let resp = AuthResponse {
            access_token: None,
            message: Some("try again".to_string()),
            error: None,
        };
        assert_eq!(resp.failure_message("fallback"), "try again");

        let empty = AuthResponse::default();
        assert_eq!(empty.failure_message("fallback"), "fallback");
    }

    #[test]
    fn test_token_ignores_empty_string() {
        let resp = AuthResponse {
            access_token: Some(String::new()),
            message: None,
            error: None,
        };
        assert!(resp.token().is_none());

        let resp = AuthResponse {
            access_token: Some("tok123".to_string()),
            message: None,
            error: None,
        };
        assert_eq!(resp.token(), Some("tok123"));
    }

    #[test]
    fn test_response_deserializes_partial_bodies() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"access_token":"abc","message":"welcome"}"#).unwrap();
        assert_eq!(resp.token(), Some("abc"));
        assert_eq!(resp.message.as_deref(), Some("welcome"));
        assert!(resp.error.is_none());

        let resp: AuthResponse = serde_json::from_str(r#"{"error":"taken"}"#).unwrap();
        assert!(resp.token().is_none());
        assert_eq!(resp.error.as_deref(), Some("taken"));
    }

    #[test]
    fn test_request_bodies_serialize_with_expected_keys() {
        let body = serde_json::to_value(SignInRequest {
            username_or_email: "moe@example.com".to_string(),
            password: "Secret1!".to_string(),
        })
        .unwrap();
        assert_eq!(body["username_or_email"], "moe@example.com");
        assert_eq!(body["password"], "Secret1!");

        let body = serde_json::to_value(SignUpRequest {
            username: "moe".to_string(),
            email: "moe@example.com".to_string(),
            password: "Secret1!".to_string(),
        })
        .unwrap();
        assert_eq!(body["username"], "moe");
        assert_eq!(body["email"], "moe@example.com");
    }
}
