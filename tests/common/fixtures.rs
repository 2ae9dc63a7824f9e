//! Test fixtures
//!
//! Builds clients wired to a wiremock server plus the envelope payloads
//! the service answers with.

use serde_json::{json, Value};
use wiremock::MockServer;

use chronicle_client::{ClientConfig, Record, RecordClient};

/// Organization every test client is configured with
pub const TEST_ORG: &str = "acme";
/// Credentials every test client is configured with
pub const TEST_CLIENT_ID: &str = "id";
pub const TEST_CLIENT_SECRET: &str = "secret";

/// Configuration pointing at the given mock server.
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(&server.uri(), TEST_CLIENT_ID, TEST_CLIENT_SECRET, TEST_ORG)
}

/// Client pointing at the given mock server.
pub fn test_client(server: &MockServer) -> RecordClient {
    RecordClient::new(test_config(server)).expect("client should build")
}

/// A filled-in record owned by `TEST_ORG`.
pub fn sample_record(name: &str) -> Record {
    Record {
        client_ip: "120.85.97.21".to_string(),
        user: "admin".to_string(),
        method: "POST".to_string(),
        request_uri: format!("/api/add-store?id={}/{}", TEST_ORG, name),
        action: "add-store".to_string(),
        language: "en".to_string(),
        response: r#"{"status":"ok","msg":""}"#.to_string(),
        is_triggered: true,
        need_commit: true,
        ..Record::new(TEST_ORG, name)
    }
}

/// A success envelope around the given primary payload.
pub fn ok_envelope(data: Value) -> Value {
    json!({"status": "ok", "msg": "", "data": data, "data2": null})
}

/// A success envelope with both payloads.
pub fn ok_envelope_with(data: Value, data2: Value) -> Value {
    json!({"status": "ok", "msg": "", "data": data, "data2": data2})
}

/// An application-level error envelope.
pub fn error_envelope(msg: &str) -> Value {
    json!({"status": "error", "msg": msg, "data": null, "data2": null})
}
