//! Card Notification Channel
//!
//! Outbound half of a chat-platform group-bot API: a time-based
//! HMAC-SHA256 signature proving possession of the shared secret, the
//! exact interactive-card payload shape the service renders from a
//! template id + version, and a single blocking HTTP POST whose raw
//! response body is handed back to the caller.
//!
//! Key features:
//! - Signing key derived as `"{timestamp}\n{secret}"`, MAC over an empty
//!   message, base64-encoded tag (the receiving service's contract)
//! - Wire payload with stable field order and exact nesting
//! - One-shot delivery with a bounded timeout and no retry
//! - Secret material redacted from Debug output and zeroed on drop

pub mod error;
pub mod payload;
pub mod sender;
pub mod signature;
pub mod types;

// Re-export primary types and functions
pub use error::{NotifyError, NotifyResult};
pub use payload::{Card, CardData, SignedCardPayload, CARD_TYPE_TEMPLATE, MSG_TYPE_INTERACTIVE};
pub use sender::{deliver, DELIVERY_TIMEOUT_SECONDS};
pub use signature::sign_card_request;
pub use types::{CardNotification, CardTemplate, Timestamp, WebhookEndpoint, WebhookSecret};
