//! Cardpost Root Library
//!
//! A thin orchestrator over [`cardpost_notify`]: load the configuration,
//! capture the send time once, sign, serialize, deliver, echo. The whole
//! run is a single linear transaction with no intermediate state, so the
//! library surface is two steps: [`prepare`] builds a fully signed
//! request, and [`PreparedCard::deliver`] performs the one network call.
//!
//! The split keeps the process contract intact: the caller can echo the
//! outgoing payload before dispatch, exactly as the response body is
//! echoed after it.

pub mod config;
pub mod error;

pub use config::Conf;
pub use error::{RootError, RootResult};

use tracing::info;

use cardpost_notify::{
    deliver, sign_card_request, CardNotification, CardTemplate, SignedCardPayload, Timestamp,
    WebhookEndpoint, WebhookSecret,
};

// ---------------------------------------------------------------------------
// PreparedCard — signed and serialized, ready for dispatch
// ---------------------------------------------------------------------------

/// A fully signed, serialized card request.
///
/// The signature and the payload's `timestamp` field were derived from the
/// same capture-time value; nothing here is recomputed at send time.
#[derive(Debug)]
pub struct PreparedCard {
    endpoint: WebhookEndpoint,
    payload_json: String,
}

impl PreparedCard {
    /// The UTF-8 JSON text that will be sent as the POST body.
    pub fn payload_json(&self) -> &str {
        &self.payload_json
    }

    /// Perform the single outbound POST and return the raw response body.
    pub fn deliver(&self) -> RootResult<String> {
        info!(bytes = self.payload_json.len(), "sending interactive card");
        Ok(deliver(&self.endpoint, self.payload_json.clone().into_bytes())?)
    }
}

/// Build a [`PreparedCard`] from a validated configuration and the
/// capture-time timestamp.
pub fn prepare(conf: &Conf, timestamp: Timestamp) -> RootResult<PreparedCard> {
    let endpoint = WebhookEndpoint::new(conf.webhook.clone())
        .map_err(|e| RootError::Config(e.into()))?;
    let secret =
        WebhookSecret::new(conf.secret.clone()).map_err(|e| RootError::Config(e.into()))?;
    let template = CardTemplate::new(conf.cardid.clone(), conf.version.clone())
        .map_err(|e| RootError::Config(e.into()))?;

    let notification = CardNotification::new(endpoint, secret, template, timestamp);
    let signature = sign_card_request(&notification.secret, notification.timestamp)?;
    let payload = SignedCardPayload::new(&notification, signature);
    let payload_json = payload.to_json()?;

    Ok(PreparedCard {
        endpoint: notification.endpoint,
        payload_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conf() -> Conf {
        serde_json::from_str(
            r#"{
                "webhook": "https://open.example.com/bot/v2/hook/xyz",
                "secret": "test-secret",
                "cardid": "ctp_X",
                "version": "1.0.0"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_prepare_builds_signed_payload() {
        let prepared = prepare(&test_conf(), Timestamp::from_seconds(1_700_000_000)).unwrap();
        let value: serde_json::Value = serde_json::from_str(prepared.payload_json()).unwrap();

        assert_eq!(value["timestamp"], "1700000000");
        assert_eq!(value["msg_type"], "interactive");
        assert_eq!(value["card"]["type"], "template");
        assert_eq!(value["card"]["data"]["template_id"], "ctp_X");
        assert_eq!(value["card"]["data"]["template_version_name"], "1.0.0");
    }

    #[test]
    fn test_prepare_signature_matches_timestamp_field() {
        // The invariant behind the whole program: sign and timestamp come
        // from the same captured value.
        let timestamp = Timestamp::from_seconds(1_700_000_000);
        let prepared = prepare(&test_conf(), timestamp).unwrap();
        let value: serde_json::Value = serde_json::from_str(prepared.payload_json()).unwrap();

        let expected = sign_card_request(
            &WebhookSecret::new("test-secret").unwrap(),
            timestamp,
        )
        .unwrap();
        assert_eq!(value["sign"], expected.as_str());
    }

    #[test]
    fn test_prepare_rejects_bad_webhook_url() {
        let mut conf = test_conf();
        conf.webhook = "not a url".into();
        let err = prepare(&conf, Timestamp::from_seconds(1)).unwrap_err();
        assert!(matches!(err, RootError::Config(_)));
    }
}
