//! Wire payload for a templated interactive card.
//!
//! Field names and nesting mirror the receiving bot API exactly; fields
//! serialize in declaration order, so the emitted JSON is stable.

use serde::{Deserialize, Serialize};

use crate::error::NotifyResult;
use crate::types::CardNotification;

/// `msg_type` value for card messages.
pub const MSG_TYPE_INTERACTIVE: &str = "interactive";

/// `card.type` value for template-rendered cards.
pub const CARD_TYPE_TEMPLATE: &str = "template";

// ---------------------------------------------------------------------------
// SignedCardPayload — the POST body, and nothing else
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedCardPayload {
    pub timestamp: String,
    pub sign: String,
    pub msg_type: String,
    pub card: Card,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub data: CardData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardData {
    pub template_id: String,
    pub template_version_name: String,
}

impl SignedCardPayload {
    /// Build the wire entity from a notification and its signature.
    ///
    /// The `timestamp` field is rendered from the same [`Timestamp`] the
    /// signature was computed over.
    ///
    /// [`Timestamp`]: crate::types::Timestamp
    pub fn new(notification: &CardNotification, signature: impl Into<String>) -> Self {
        Self {
            timestamp: notification.timestamp.to_decimal_string(),
            sign: signature.into(),
            msg_type: MSG_TYPE_INTERACTIVE.to_string(),
            card: Card {
                card_type: CARD_TYPE_TEMPLATE.to_string(),
                data: CardData {
                    template_id: notification.template.template_id.clone(),
                    template_version_name: notification.template.template_version_name.clone(),
                },
            },
        }
    }

    /// Serialize to the UTF-8 JSON text sent as the POST body.
    pub fn to_json(&self) -> NotifyResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
