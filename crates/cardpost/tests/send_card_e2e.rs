//! End-to-end delivery tests against a local mock webhook.
//!
//! The full pipeline under test: conf.json on disk → validated config →
//! signed payload → HTTP POST → echoed response body. The mock asserts
//! the wire contract (method, content type, card structure); the failure
//! test pins the no-retry, fail-fast policy.

use std::path::{Path, PathBuf};

use cardpost::{prepare, Conf, RootError};
use cardpost_notify::{sign_card_request, NotifyError, Timestamp, WebhookSecret};
use mockito::Matcher;

fn write_conf(dir: &Path, webhook: &str) -> PathBuf {
    let path = dir.join("conf.json");
    let contents = serde_json::json!({
        "webhook": webhook,
        "secret": "e2e-secret",
        "cardid": "ctp_e2e",
        "version": "1.0.3",
    });
    std::fs::write(&path, contents.to_string()).unwrap();
    path
}

#[test]
fn posts_signed_card_and_echoes_response() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/bot/v2/hook/e2e")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "msg_type": "interactive",
            "card": {
                "type": "template",
                "data": {
                    "template_id": "ctp_e2e",
                    "template_version_name": "1.0.3"
                }
            }
        })))
        .with_status(200)
        .with_body(r#"{"code":0,"msg":"success"}"#)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let path = write_conf(dir.path(), &format!("{}/bot/v2/hook/e2e", server.url()));
    let conf = Conf::load(&path).unwrap();

    let prepared = prepare(&conf, Timestamp::from_seconds(1_700_000_000)).unwrap();
    let body = prepared.deliver().unwrap();

    assert_eq!(body, r#"{"code":0,"msg":"success"}"#);
    mock.assert();
}

#[test]
fn outgoing_payload_signature_verifies_against_its_timestamp() {
    // What the receiving service does: take the payload's timestamp,
    // derive the key with its copy of the secret, recompute the tag.
    let dir = tempfile::tempdir().unwrap();
    let path = write_conf(dir.path(), "https://open.example.com/bot/v2/hook/e2e");
    let conf = Conf::load(&path).unwrap();

    let prepared = prepare(&conf, Timestamp::from_seconds(1_700_000_000)).unwrap();
    let payload: serde_json::Value = serde_json::from_str(prepared.payload_json()).unwrap();

    let wire_seconds: u64 = payload["timestamp"].as_str().unwrap().parse().unwrap();
    let recomputed = sign_card_request(
        &WebhookSecret::new("e2e-secret").unwrap(),
        Timestamp::from_seconds(wire_seconds),
    )
    .unwrap();

    assert_eq!(payload["sign"].as_str().unwrap(), recomputed);
}

#[test]
fn unreachable_endpoint_aborts_with_request_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_conf(dir.path(), "http://127.0.0.1:9/bot/v2/hook/e2e");
    let conf = Conf::load(&path).unwrap();

    let prepared = prepare(&conf, Timestamp::now()).unwrap();
    let err = prepared.deliver().unwrap_err();

    assert!(matches!(err, RootError::Notify(NotifyError::Request(_))));
}
