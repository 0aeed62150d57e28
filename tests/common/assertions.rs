//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response with matching JSON `status` field
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert a string is a canonical `#RRGGBB` color
pub fn assert_hex(value: &serde_json::Value) {
    let hex = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected hex string, got {value}"));
    assert_eq!(hex.len(), 7, "Expected #RRGGBB, got {hex}");
    assert!(hex.starts_with('#'), "Expected leading '#', got {hex}");
    assert!(
        hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
        "Expected uppercase hex digits, got {hex}"
    );
}

/// Collect the hex values of a session's colors
pub fn session_hexes(session: &serde_json::Value) -> Vec<String> {
    session["colors"]
        .as_array()
        .expect("Expected colors array")
        .iter()
        .map(|c| c["hex"].as_str().unwrap().to_string())
        .collect()
}

/// Assert a session response is well formed and has `size` colors
pub fn assert_valid_session(session: &serde_json::Value, size: usize) {
    assert!(session["id"].is_string(), "Expected session id");
    let colors = session["colors"].as_array().expect("Expected colors array");
    assert_eq!(colors.len(), size);
    for color in colors {
        assert_hex(&color["hex"]);
        assert!(color["name"].is_string());
        assert!(color["locked"].is_boolean());
    }
}
