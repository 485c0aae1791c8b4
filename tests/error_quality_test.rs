//! Error message quality tests
//!
//! Tests that verify error messages are helpful and distinguishable.

use bbox_exporter::bbox::ResourceGroup;
use bbox_exporter::error::ExporterError;

#[test]
fn test_auth_error_message_clarity() {
    // Given: An authentication error
    let error = ExporterError::Auth("no session cookie in login response".to_string());

    // When: Converting to string
    let message = format!("{}", error);

    // Then: Message should clearly indicate authentication issue
    assert!(message.contains("Authentication failed"));
    assert!(message.contains("no session cookie"));
}

#[test]
fn test_wrapped_error_names_group_and_resource() {
    // Given: A decode failure on a LAN sub-resource
    let source = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
    let error = ExporterError::Decode {
        path: "/lan/stats".to_string(),
        source,
    }
    .in_resource("/lan/stats")
    .in_group(ResourceGroup::Lan);

    // When: Converting to string
    let message = error.to_string();

    // Then: The group comes first, then the failing resource
    assert!(message.starts_with("lan metrics: /lan/stats: "), "{}", message);
    assert!(message.contains("Failed to decode"), "{}", message);
}

#[test]
fn test_empty_response_message() {
    let error = ExporterError::EmptyResponse {
        resource: "/wan/diags",
    }
    .in_group(ResourceGroup::Wan);

    assert_eq!(error.to_string(), "wan metrics: Empty response from /wan/diags");
}

#[test]
fn test_is_auth_sees_through_wrapping() {
    // Given: An auth error wrapped twice and a non-auth error
    let wrapped = ExporterError::Auth("status 401".to_string())
        .in_resource("/login")
        .in_group(ResourceGroup::Device);
    let other = ExporterError::Config("bad".to_string());

    // Then: Only the auth error is classified as such
    assert!(wrapped.is_auth());
    assert!(!other.is_auth());
}

#[test]
fn test_config_error_message_clarity() {
    // Given: A configuration error
    let error = ExporterError::Config("bbox.password must not be empty".to_string());

    // When: Converting to string
    let message = format!("{}", error);

    // Then: Message should clearly indicate configuration issue
    assert!(message.contains("Configuration error"));
    assert!(message.contains("bbox.password"));
}

#[test]
fn test_invalid_endpoint_message_includes_url() {
    let error = ExporterError::InvalidEndpoint {
        url: "http://192.168.1.254".to_string(),
        reason: "scheme must be https".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("http://192.168.1.254"));
    assert!(message.contains("https"));
}

#[test]
fn test_errors_are_distinguishable() {
    // Given: Each kind of error
    let errors = [
        ExporterError::Auth("x".to_string()),
        ExporterError::Config("x".to_string()),
        ExporterError::Metrics("x".to_string()),
        ExporterError::EmptyResponse { resource: "x" },
    ];

    // Then: No two render the same message
    let messages: std::collections::HashSet<String> =
        errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(messages.len(), errors.len());
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<ExporterError>();
}
