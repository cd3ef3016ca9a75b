//! Amazon Bedrock HTTP error classification.
//!
//! The Bedrock runtime endpoints usually return JSON error bodies shaped like:
//! `{ "message": "...", "__type": "..." }`. Authorization failures are mapped
//! to [`ChatError::AuthorizationError`]; every other non-success status keeps
//! the provider message in a [`ChatError::ApiError`].

use crate::error::ChatError;

/// `__type` fragments (lowercased) that mean the caller lacks permission.
const AUTHORIZATION_ERROR_TYPES: &[&str] = &[
    "accessdenied",
    "unrecognizedclient",
    "expiredtoken",
    "invalidsignature",
    "missingauthenticationtoken",
    "incompletesignature",
];

fn parse_body(body_text: &str) -> Option<serde_json::Value> {
    serde_json::from_str::<serde_json::Value>(body_text).ok()
}

fn extract_message(json: &serde_json::Value) -> Option<String> {
    let message = json
        .get("message")
        .and_then(|v| v.as_str())
        .or_else(|| json.get("Message").and_then(|v| v.as_str()))
        .or_else(|| json.get("errorMessage").and_then(|v| v.as_str()))
        .map(|s| s.trim().to_string())?;

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

fn extract_error_type(json: &serde_json::Value) -> Option<String> {
    json.get("__type")
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Classify a non-success response.
///
/// `fallback_message` is used when the body carries no usable text, usually
/// the canonical reason phrase of the status.
pub fn classify_bedrock_http_error(
    status: u16,
    body_text: &str,
    fallback_message: Option<&str>,
) -> ChatError {
    let json = parse_body(body_text);
    let message = json
        .as_ref()
        .and_then(extract_message)
        .or_else(|| {
            let trimmed = body_text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .or_else(|| fallback_message.map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {status}"));
    let err_type = json
        .as_ref()
        .and_then(extract_error_type)
        .unwrap_or_default()
        .to_lowercase();

    let looks_unauthorized = AUTHORIZATION_ERROR_TYPES
        .iter()
        .any(|t| err_type.contains(t));
    if status == 401 || status == 403 || looks_unauthorized {
        return ChatError::AuthorizationError(message);
    }

    ChatError::ApiError {
        code: status,
        message,
        details: json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_is_authorization_error() {
        let body = r#"{"message":"User is not authorized to perform: bedrock:InvokeModel","__type":"AccessDeniedException"}"#;
        match classify_bedrock_http_error(403, body, Some("Forbidden")) {
            ChatError::AuthorizationError(msg) => assert!(msg.contains("bedrock:InvokeModel")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn credential_error_type_wins_over_status() {
        let body = r#"{"Message":"The security token included in the request is expired","__type":"com.amazon.coral.service#ExpiredTokenException"}"#;
        assert!(matches!(
            classify_bedrock_http_error(400, body, None),
            ChatError::AuthorizationError(_)
        ));
    }

    #[test]
    fn other_statuses_keep_provider_message() {
        let body = r#"{"message":"Too many requests, please wait before trying again.","__type":"ThrottlingException"}"#;
        match classify_bedrock_http_error(429, body, Some("Too Many Requests")) {
            ChatError::ApiError {
                code,
                message,
                details,
            } => {
                assert_eq!(code, 429);
                assert!(message.starts_with("Too many requests"));
                assert_eq!(details.unwrap()["__type"], "ThrottlingException");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_body_uses_fallback() {
        match classify_bedrock_http_error(502, "  ", Some("Bad Gateway")) {
            ChatError::ApiError { message, .. } => assert_eq!(message, "Bad Gateway"),
            other => panic!("unexpected error: {other:?}"),
        }
        match classify_bedrock_http_error(599, "", None) {
            ChatError::ApiError { message, .. } => assert_eq!(message, "HTTP 599"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
