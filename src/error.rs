use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoUtilsError {
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingToken,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid selector: {0}")]
    SelectorError(String),

    #[error("Git error: {0}")]
    GitError(String),
}

pub type Result<T> = std::result::Result<T, RepoUtilsError>;
