//! Time-based HMAC-SHA256 request signing.
//!
//! Signing: HMAC-SHA256 keyed by `"{timestamp}\n{secret}"` over an empty
//! message, base64-encoded (standard alphabet, padded). The receiving
//! service derives the same key from the payload timestamp and its copy of
//! the secret, recomputes the tag, and rejects mismatches or stale windows.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{NotifyError, NotifyResult};
use crate::types::{Timestamp, WebhookSecret};

type HmacSha256 = Hmac<Sha256>;

/// Sign a card request for the given send time.
///
/// The secrecy lives entirely in the key derivation from timestamp+secret;
/// the MAC'd message is empty per the receiving API's contract. Do not
/// move the payload into the MAC input.
pub fn sign_card_request(secret: &WebhookSecret, timestamp: Timestamp) -> NotifyResult<String> {
    let key = signing_key(secret, timestamp);

    let mac = HmacSha256::new_from_slice(&key).map_err(|_| NotifyError::Signature)?;
    let tag = mac.finalize().into_bytes();

    Ok(base64::engine::general_purpose::STANDARD.encode(tag))
}

/// Build the HMAC key: decimal timestamp, literal newline, secret bytes.
fn signing_key(secret: &WebhookSecret, timestamp: Timestamp) -> Vec<u8> {
    let decimal = timestamp.to_decimal_string();
    let mut key = Vec::with_capacity(decimal.len() + 1 + secret.key_bytes().len());
    key.extend_from_slice(decimal.as_bytes());
    key.push(b'\n');
    key.extend_from_slice(secret.key_bytes());
    key
}
