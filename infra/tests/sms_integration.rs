//! HTTP-level integration tests for the Vonage SMS provider
//!
//! A wiremock server stands in for the Vonage REST endpoint so the full
//! request/response cycle is exercised without touching the network.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sc_core::errors::{ProviderError, SendError};
use sc_core::services::dispatch::{
    DispatchConfig, DispatchService, SendReceipt, SmsProvider, TextEncoding,
};
use sc_infra::sms::{VonageConfig, VonageSmsProvider};

fn provider_for(server: &MockServer) -> VonageSmsProvider {
    let config = VonageConfig::new("key123", "secret456").with_api_base(server.uri());
    VonageSmsProvider::new(config).unwrap()
}

#[tokio::test]
async fn test_accepted_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms/json"))
        .and(body_partial_json(json!({
            "api_key": "key123",
            "api_secret": "secret456",
            "from": "12013814794",
            "to": "2013814794",
            "text": "hello",
            "type": "unicode",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message-count": "1",
            "messages": [{"to": "2013814794", "status": "0", "message-id": "abc123"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let receipt = provider
        .send_sms("12013814794", "2013814794", "hello", TextEncoding::Unicode)
        .await
        .unwrap();

    assert_eq!(
        receipt,
        SendReceipt::Accepted {
            message_id: "abc123".to_string()
        }
    );
}

#[tokio::test]
async fn test_rejected_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message-count": "1",
            "messages": [{"status": "1", "error-text": "Bad number"}]
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let receipt = provider
        .send_sms("12013814794", "nonsense", "hello", TextEncoding::Unicode)
        .await
        .unwrap();

    assert_eq!(
        receipt,
        SendReceipt::Rejected {
            error_text: "Bad number".to_string()
        }
    );
}

#[tokio::test]
async fn test_http_error_is_transport_fault() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .send_sms("12013814794", "2013814794", "hello", TextEncoding::Unicode)
        .await;

    assert!(matches!(result, Err(ProviderError::Transport(_))));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .send_sms("12013814794", "2013814794", "hello", TextEncoding::Unicode)
        .await;

    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
}

/// Full fan-out through the dispatcher against the wire: the provider
/// accepts the first two recipients and rejects the third; the dispatcher
/// must report two successes with distinct ids and one failure, in order.
#[tokio::test]
async fn test_dispatch_fan_out_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sms/json"))
        .and(body_partial_json(json!({"to": "2013814794"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message-count": "1",
            "messages": [{"status": "0", "message-id": "id-1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sms/json"))
        .and(body_partial_json(json!({"to": "6175550199"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message-count": "1",
            "messages": [{"status": "0", "message-id": "id-2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sms/json"))
        .and(body_partial_json(json!({"to": "badinput"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message-count": "1",
            "messages": [{"status": "6", "error-text": "Bad number"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = Arc::new(provider_for(&server));
    let config = DispatchConfig::new("12013814794").with_reject_unsendable(false);
    let service = DispatchService::new(provider, config);

    let outcomes = service
        .dispatch("2013814794,(617) 555-0199,bad-input", "hello")
        .await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].message_id(), Some("id-1"));
    assert_eq!(outcomes[1].message_id(), Some("id-2"));
    assert_eq!(
        outcomes[2].error(),
        Some(&SendError::ProviderRejected {
            error_text: "Bad number".to_string()
        })
    );
}

/// An unreachable provider endpoint surfaces per recipient, not as an abort.
#[tokio::test]
async fn test_unreachable_endpoint_isolated_per_recipient() {
    // Bind-then-drop a server to get a port with nothing listening
    let server = MockServer::start().await;
    let dead_uri = server.uri();
    drop(server);

    let config = VonageConfig::new("key123", "secret456")
        .with_api_base(dead_uri)
        .with_request_timeout_secs(1);
    let provider = Arc::new(VonageSmsProvider::new(config).unwrap());
    let service = DispatchService::new(provider, DispatchConfig::new("12013814794"));

    let outcomes = service.dispatch("2013814794,6175550199", "hello").await;

    assert_eq!(outcomes.len(), 2);
    for outcome in &outcomes {
        assert!(matches!(
            outcome.error(),
            Some(SendError::ProviderUnavailable { .. })
        ));
    }
}
