use super::*;

#[test]
fn extract_detail_reads_plain_string() {
    assert_eq!(
        extract_detail(r#"{"detail":"User already exists"}"#),
        Some("User already exists".to_owned())
    );
}

#[test]
fn extract_detail_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"},{"msg":"field required"}]}"#;
    assert_eq!(
        extract_detail(body),
        Some("value is not a valid email address; field required".to_owned())
    );
}

#[test]
fn extract_detail_ignores_non_json_and_blank() {
    assert_eq!(extract_detail("<html>502</html>"), None);
    assert_eq!(extract_detail(r#"{"detail":"  "}"#), None);
    assert_eq!(extract_detail(r#"{"message":"ok"}"#), None);
}

#[test]
fn status_error_displays_detail_when_present() {
    let err = ApiError::from_status(400, r#"{"detail":"User already exists"}"#);
    assert_eq!(err.to_string(), "User already exists");
}

#[test]
fn status_error_falls_back_to_code() {
    let err = ApiError::from_status(500, "");
    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn unauthorized_detection() {
    assert!(ApiError::Status { status: 401, detail: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, detail: None }.is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}
