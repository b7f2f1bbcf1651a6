use super::*;

// =============================================================
// encode_component
// =============================================================

#[test]
fn encode_component_keeps_unreserved_characters() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_escapes_space_and_reserved() {
    assert_eq!(encode_component("Chess Club"), "Chess%20Club");
    assert_eq!(encode_component("a@b.com"), "a%40b.com");
    assert_eq!(encode_component("a/b?c=d&e#f+g"), "a%2Fb%3Fc%3Dd%26e%23f%2Bg");
}

#[test]
fn encode_component_escapes_utf8_bytes_uppercase() {
    assert_eq!(encode_component("café"), "caf%C3%A9");
}

#[test]
fn encode_component_empty_is_empty() {
    assert_eq!(encode_component(""), "");
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn fixed_endpoints_use_base_prefix() {
    assert_eq!(auth_status_endpoint(""), "/auth/status");
    assert_eq!(activities_endpoint(""), "/activities");
    assert_eq!(login_endpoint("https://school.example"), "https://school.example/auth/login");
    assert_eq!(logout_endpoint("/api"), "/api/auth/logout");
}

#[test]
fn signup_endpoint_encodes_activity_and_email() {
    assert_eq!(
        signup_endpoint("", "Chess Club", "a@b.com"),
        "/activities/Chess%20Club/signup?email=a%40b.com"
    );
}

#[test]
fn unregister_endpoint_encodes_activity_and_email() {
    assert_eq!(
        unregister_endpoint("", "Art & Design", "x+y@b.com"),
        "/activities/Art%20%26%20Design/unregister?email=x%2By%40b.com"
    );
}

// =============================================================
// HttpApi
// =============================================================

#[test]
fn http_api_takes_base_from_config() {
    let config = ClientConfig::from_raw(Some("https://school.example/"), None);
    assert_eq!(HttpApi::new(&config).base(), "https://school.example");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_outside_browser_reports_transport_failure() {
    let api = HttpApi::default();
    let result = futures::executor::block_on(api.activities());
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[test]
fn status_error_reads_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Activity not found"}"#).unwrap();
    assert_eq!(
        status_error::<serde_json::Error>(404, Ok(body)),
        ApiError::Status { status: 404, detail: Some("Activity not found".to_owned()) }
    );
}

#[test]
fn status_error_with_unreadable_body_has_no_detail() {
    let body = serde_json::from_str::<ErrorBody>("<html>Bad Gateway</html>");
    let err = status_error(502, body);
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
    assert_eq!(err.user_message("An error occurred", "Failed to sign up. Please try again."), "An error occurred");
}
