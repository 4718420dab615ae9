//! Wire types for the generation endpoint

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate-replies`.
///
/// Optional sender fields are serialized as `null` when absent, never as
/// empty strings.
#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    pub email_content: String,
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
}

/// One generated draft. Immutable once received; `id` is opaque and unique
/// within a single response.
#[derive(Debug, Clone, Deserialize)]
pub struct Reply {
    pub id: String,
    pub tone: String,
    pub content: String,
    pub preview: String,
}

/// Successful response body. The backend echoes the submitted email
/// alongside the drafts.
#[derive(Debug, Deserialize)]
pub struct RepliesResponse {
    pub replies: Vec<Reply>,
    /// Echo of the submitted email; not displayed by the session
    #[allow(dead_code)]
    #[serde(default)]
    pub original_email: String,
}

/// Error response body; `detail` is the human-readable failure message.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_absent_sender_as_null() {
        let request = EmailRequest {
            email_content: "Hi, can we reschedule?".to_string(),
            sender_name: None,
            sender_email: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email_content"], "Hi, can we reschedule?");
        assert!(value["sender_name"].is_null());
        assert!(value["sender_email"].is_null());
    }

    #[test]
    fn test_response_deserializes_replies_and_original_email() {
        let body = r#"{
            "replies": [
                {"id": "1", "tone": "professional", "content": "Dear...", "preview": "Dear..."},
                {"id": "2", "tone": "friendly", "content": "Hey...", "preview": "Hey..."}
            ],
            "original_email": "Hi, can we reschedule?"
        }"#;

        let response: RepliesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.replies.len(), 2);
        assert_eq!(response.replies[0].id, "1");
        assert_eq!(response.replies[1].tone, "friendly");
        assert_eq!(response.original_email, "Hi, can we reschedule?");
    }

    #[test]
    fn test_response_tolerates_missing_original_email() {
        let body = r#"{"replies": []}"#;
        let response: RepliesResponse = serde_json::from_str(body).unwrap();
        assert!(response.replies.is_empty());
        assert_eq!(response.original_email, "");
    }

    #[test]
    fn test_error_body_detail_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{"detail": "rate limited"}"#).unwrap();
        assert_eq!(with.detail.as_deref(), Some("rate limited"));

        let without: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(without.detail.is_none());
    }
}
