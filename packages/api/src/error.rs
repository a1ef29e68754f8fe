//! Error type shared by every request the client makes.

/// Failure of a single REST call.
///
/// Services never catch these; they reach the page or form that issued the
/// call unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never completed (DNS, connection refused, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body did not have the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Invalid request body: {0}")]
    Encode(String),

    /// The session could not be written to client storage.
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl RequestError {
    /// HTTP status of the failure, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Build an [`RequestError::Http`] from a raw response.
    ///
    /// The message is the JSON `message` field (or `error`) when the body has
    /// one, the raw body otherwise, and the status reason phrase for an empty
    /// body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"].iter().find_map(|key| {
                    value
                        .get(key)
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                })
            })
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    reqwest::StatusCode::from_u16(status)
                        .ok()
                        .and_then(|s| s.canonical_reason())
                        .unwrap_or("Request failed")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            });
        Self::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let err = RequestError::from_response(
            400,
            r#"{"status":400,"error":"Bad Request","message":"Error: Username is already taken!"}"#,
        );
        assert_eq!(
            err,
            RequestError::Http {
                status: 400,
                message: "Error: Username is already taken!".to_string()
            }
        );
    }

    #[test]
    fn test_error_field_when_message_missing() {
        let err = RequestError::from_response(401, r#"{"status":401,"error":"Unauthorized"}"#);
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_plain_and_empty_bodies() {
        let err = RequestError::from_response(500, "boom");
        assert_eq!(err.to_string(), "HTTP 500: boom");

        let err = RequestError::from_response(404, "");
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = RequestError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }
}
