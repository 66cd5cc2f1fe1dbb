use repo_utils::error::{RepoUtilsError, Result};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = RepoUtilsError::MissingToken;
    assert_eq!(format!("{}", error), "GITHUB_TOKEN environment variable not set");

    let error = RepoUtilsError::SelectorError("bad selector".to_string());
    assert_eq!(format!("{}", error), "Invalid selector: bad selector");

    let error = RepoUtilsError::GitError("fetch failed".to_string());
    assert_eq!(format!("{}", error), "Git error: fetch failed");

    let error = RepoUtilsError::ConfigError("bad url".to_string());
    assert_eq!(format!("{}", error), "Invalid configuration: bad url");
}

#[test]
fn test_error_source() {
    let error = RepoUtilsError::MissingToken;
    assert!(error.source().is_none());

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: RepoUtilsError = io_error.into();
    assert!(error.source().is_some());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: RepoUtilsError = io_error.into();
    assert!(matches!(error, RepoUtilsError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: RepoUtilsError = json_error.into();
    assert!(matches!(error, RepoUtilsError::JsonError(_)));
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<String> {
        Err(RepoUtilsError::MissingToken)
    }

    assert!(returns_error().is_err());
}
