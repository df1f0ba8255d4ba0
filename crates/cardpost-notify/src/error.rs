use thiserror::Error;

/// Error type for the cardpost-notify crate.
///
/// Every failure is fatal to the single send; there is no retry state to
/// carry, so variants wrap their underlying cause and nothing else.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The HMAC primitive rejected the derived key. HMAC-SHA256 accepts
    /// keys of any length, so this is unreachable in practice.
    #[error("signature generation failed")]
    Signature,

    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("request dispatch failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("response body read failed: {0}")]
    ResponseRead(#[source] reqwest::Error),
}

/// Result type alias for cardpost-notify operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = NotifyError::Signature;
        assert_eq!(err.to_string(), "signature generation failed");
    }

    #[test]
    fn test_payload_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: NotifyError = json_err.into();
        assert!(matches!(err, NotifyError::Payload(_)));
        assert!(err.to_string().starts_with("payload serialization failed"));
    }

    #[test]
    fn test_error_messages_do_not_leak_secrets() {
        let err = NotifyError::Signature;
        let msg = err.to_string();
        assert!(!msg.contains("secret"));
        assert!(!msg.contains("key"));
    }
}
