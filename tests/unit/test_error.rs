use reqwest::StatusCode;
use swaply_client::error::AppError;

#[test]
fn display_includes_backend_diagnostics() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(
        AppError::InvalidInput("bad price".to_string()).to_string(),
        "invalid input: bad price"
    );
    assert_eq!(
        AppError::Conflict("auction ended".to_string()).to_string(),
        "conflict: auction ended"
    );
    assert_eq!(
        AppError::Unexpected(StatusCode::IM_A_TEAPOT).to_string(),
        "unexpected status: 418 I'm a teapot"
    );
}

#[test]
fn errors_report_the_status_they_were_mapped_from() {
    assert_eq!(
        AppError::Unauthorized.status(),
        Some(StatusCode::UNAUTHORIZED)
    );
    assert_eq!(
        AppError::NotFound(String::new()).status(),
        Some(StatusCode::NOT_FOUND)
    );
    assert_eq!(
        AppError::Unexpected(StatusCode::BAD_GATEWAY).status(),
        Some(StatusCode::BAD_GATEWAY)
    );
}

#[test]
fn only_method_rejections_qualify_for_the_put_fallback() {
    assert!(AppError::Unexpected(StatusCode::METHOD_NOT_ALLOWED).is_method_rejected());
    assert!(AppError::Unexpected(StatusCode::NOT_IMPLEMENTED).is_method_rejected());
    assert!(!AppError::Unexpected(StatusCode::BAD_GATEWAY).is_method_rejected());
    assert!(!AppError::InvalidInput("bad".to_string()).is_method_rejected());
    assert!(!AppError::Unauthorized.is_method_rejected());
}
