use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

// ---------------------------------------------------------------------------
// Timestamp — send-time capture, unix epoch seconds
// ---------------------------------------------------------------------------

/// Unix-epoch second captured once per run.
///
/// The same decimal rendering feeds both the signing key and the wire
/// payload's `timestamp` field; the receiving service recomputes the
/// signature from the payload value, so the two must never skew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds_since_epoch: u64,
}

impl Timestamp {
    pub fn now() -> Self {
        Self {
            seconds_since_epoch: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self {
            seconds_since_epoch: seconds,
        }
    }

    /// Decimal rendering used on the wire and in the signing key.
    pub fn to_decimal_string(&self) -> String {
        self.seconds_since_epoch.to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seconds_since_epoch)
    }
}

// ---------------------------------------------------------------------------
// WebhookSecret — shared signing secret
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct WebhookSecret {
    key_bytes: Vec<u8>,
}

impl WebhookSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, &'static str> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err("webhook secret must not be empty");
        }
        Ok(Self {
            key_bytes: secret.into_bytes(),
        })
    }

    pub fn key_bytes(&self) -> &[u8] {
        &self.key_bytes
    }
}

impl fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WebhookSecret([REDACTED])")
    }
}

impl Drop for WebhookSecret {
    fn drop(&mut self) {
        // Zeroize key material on drop
        for byte in self.key_bytes.iter_mut() {
            *byte = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// WebhookEndpoint — delivery target URL
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpoint {
    url: String,
}

impl WebhookEndpoint {
    /// Create an endpoint from a URL string.
    /// Validates that the string parses and uses an http or https scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, &'static str> {
        let url = url.into();
        let parsed = Url::parse(&url).map_err(|_| "webhook endpoint is not a valid URL")?;
        match parsed.scheme() {
            "http" | "https" => {}
            _ => return Err("webhook endpoint must be an http or https URL"),
        }
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for WebhookEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

// ---------------------------------------------------------------------------
// CardTemplate — card template id + version
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub template_id: String,
    pub template_version_name: String,
}

impl CardTemplate {
    pub fn new(
        template_id: impl Into<String>,
        template_version_name: impl Into<String>,
    ) -> Result<Self, &'static str> {
        let template_id = template_id.into();
        let template_version_name = template_version_name.into();
        if template_id.trim().is_empty() {
            return Err("card template id must not be empty");
        }
        if template_version_name.trim().is_empty() {
            return Err("card template version must not be empty");
        }
        Ok(Self {
            template_id,
            template_version_name,
        })
    }
}

// ---------------------------------------------------------------------------
// CardNotification — one card send, assembled once per run
// ---------------------------------------------------------------------------

/// Immutable description of a single card send: where it goes, how it is
/// signed, and which template the chat client renders. Built from the
/// validated configuration plus the capture-time [`Timestamp`]; discarded
/// at process exit.
#[derive(Debug, Clone)]
pub struct CardNotification {
    pub endpoint: WebhookEndpoint,
    pub secret: WebhookSecret,
    pub template: CardTemplate,
    pub timestamp: Timestamp,
}

impl CardNotification {
    pub fn new(
        endpoint: WebhookEndpoint,
        secret: WebhookSecret,
        template: CardTemplate,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            endpoint,
            secret,
            template,
            timestamp,
        }
    }
}
