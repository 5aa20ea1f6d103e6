//! Unit tests for session module.

use super::*;

#[test]
fn test_session_config_default() {
    let config = SessionConfig::default();

    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_session_new() {
    let session = Session::new(SessionConfig::default());

    assert!(session.is_ok());
}

#[test]
fn test_default_headers_without_token() {
    let session = Session::with_defaults().unwrap();
    let headers = session.headers();

    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get(PRAGMA).unwrap(), "no-cache");
    assert_eq!(headers.get(CACHE_CONTROL).unwrap(), "no-cache");
    assert!(headers.get(AUTH_TOKEN_HEADER).is_none());
}

#[test]
fn test_token_header_after_set() {
    let session = Session::with_defaults().unwrap();
    session.set_auth_token(Some("abc123".to_string()));

    let headers = session.headers();
    assert_eq!(headers.get(AUTH_TOKEN_HEADER).unwrap(), "abc123");
    assert_eq!(session.auth_token().as_deref(), Some("abc123"));
}

#[test]
fn test_clearing_token_removes_header() {
    let session = Session::with_defaults().unwrap();
    session.set_auth_token(Some("abc123".to_string()));
    session.set_auth_token(None);

    let headers = session.headers();
    assert!(headers.get(AUTH_TOKEN_HEADER).is_none());
    assert!(session.auth_token().is_none());
}

#[test]
fn test_cloned_session_shares_token() {
    let session = Session::with_defaults().unwrap();
    let clone = session.clone();

    session.set_auth_token(Some("shared".to_string()));
    assert_eq!(clone.auth_token().as_deref(), Some("shared"));

    clone.set_auth_token(None);
    assert!(session.auth_token().is_none());
}

#[test]
fn test_independent_sessions_have_independent_tokens() {
    let first = Session::with_defaults().unwrap();
    let second = Session::with_defaults().unwrap();

    first.set_auth_token(Some("first".to_string()));

    assert!(second.auth_token().is_none());
}

#[test]
fn test_built_request_carries_contract_headers() {
    let session = Session::with_defaults().unwrap();
    session.set_auth_token(Some("tok".to_string()));

    let request = session.post("http://localhost/api/x").build().unwrap();

    assert_eq!(request.method(), "POST");
    assert_eq!(
        request.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(request.headers().get(AUTH_TOKEN_HEADER).unwrap(), "tok");
    assert!(request.body().is_none());
}

#[test]
fn test_normalize_base_url_trims_trailing_slash() {
    let base = normalize_base_url("http://localhost:8080/").unwrap();

    assert_eq!(base, "http://localhost:8080");
}

#[test]
fn test_normalize_base_url_rejects_garbage() {
    assert!(normalize_base_url("not a url").is_err());
}
