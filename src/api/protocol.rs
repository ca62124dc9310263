//! Reply Protocol
//!
//! Every mutating endpoint answers with a plain-text body whose success
//! marker is a leading `!!`. A reply failing the marker is a rejection,
//! surfaced to the user verbatim, whatever the HTTP status said.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never completed, or completed outside the 2xx range
    #[error("request failed: {0}")]
    Transport(String),
    /// 2xx reply whose body lacks the `!!` marker
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Raw payload shown in the failure alert
    pub fn payload(&self) -> &str {
        match self {
            ApiError::Transport(body) => body,
            ApiError::Rejected(body) => body,
        }
    }
}

/// Payload after the `!!` marker
pub fn ack(body: &str) -> Option<&str> {
    body.strip_prefix("!!")
}

/// Leading word-character run after the `!!` marker
pub fn ack_token(body: &str) -> Option<&str> {
    let rest = ack(body)?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

/// New display name of a rename reply: the last colon-delimited segment
pub fn rename_display_name(body: &str) -> &str {
    body.rsplit(':').next().unwrap_or(body)
}

/// Enforce HTTP success plus the `!!` marker
pub fn require_ack(status_ok: bool, body: &str) -> Result<(), ApiError> {
    if !status_ok {
        return Err(ApiError::Transport(body.to_string()));
    }
    if ack(body).is_none() {
        return Err(ApiError::Rejected(body.to_string()));
    }
    Ok(())
}

/// Enforce HTTP success plus a `!!<token>` body; yields the token
pub fn require_token(status_ok: bool, body: &str) -> Result<String, ApiError> {
    if !status_ok {
        return Err(ApiError::Transport(body.to_string()));
    }
    match ack_token(body) {
        Some(token) => Ok(token.to_string()),
        None => Err(ApiError::Rejected(body.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_token() {
        assert_eq!(ack_token("!!ab12"), Some("ab12"));
        assert_eq!(ack_token("!!ab12:rest"), Some("ab12"));
        assert_eq!(ack_token("!!_x9"), Some("_x9"));
        assert_eq!(ack_token("!!"), None);
        assert_eq!(ack_token("!!:nope"), None);
        assert_eq!(ack_token("ok"), None);
        assert_eq!(ack_token("!ok"), None);
    }

    #[test]
    fn test_rename_display_name() {
        assert_eq!(rename_display_name("!!done:oldname:new_report.txt"), "new_report.txt");
        assert_eq!(rename_display_name("!!done"), "!!done");
    }

    // Marker and status are both required; a body without `!!` fails even
    // on a 200.
    #[test]
    fn test_require_token_needs_both() {
        assert_eq!(require_token(true, "!!ab12"), Ok("ab12".to_string()));
        assert_eq!(
            require_token(true, "??rename_error"),
            Err(ApiError::Rejected("??rename_error".to_string()))
        );
        assert_eq!(
            require_token(false, "!!ab12"),
            Err(ApiError::Transport("!!ab12".to_string()))
        );
    }

    #[test]
    fn test_require_ack() {
        assert_eq!(require_ack(true, "!!done"), Ok(()));
        assert!(require_ack(true, "denied").is_err());
        assert!(require_ack(false, "!!done").is_err());
    }

    #[test]
    fn test_error_payload_is_raw_body() {
        let err = require_ack(true, "server melted").unwrap_err();
        assert_eq!(err.payload(), "server melted");
        let err = require_ack(false, "!!late").unwrap_err();
        assert_eq!(err.payload(), "!!late");
    }
}
