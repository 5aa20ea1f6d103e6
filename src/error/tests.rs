//! Unit tests for error module.

use super::*;

#[test]
fn test_not_implemented_display() {
    let err = Error::NotImplemented;
    assert_eq!(format!("{}", err), "not implemented");
}

#[test]
fn test_json_error_display() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = Error::from(json_err);

    assert!(format!("{}", err).starts_with("JSON error:"));
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_invalid_url_display() {
    let parse_err = url::Url::parse("not a url").unwrap_err();
    let err = Error::from(parse_err);

    assert!(format!("{}", err).starts_with("Invalid URL:"));
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_error_is_debug() {
    let err = Error::NotImplemented;
    assert!(!format!("{:?}", err).is_empty());
}
