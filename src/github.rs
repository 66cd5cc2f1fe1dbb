use crate::error::{RepoUtilsError, Result};
use crate::types::{BatchSummary, GitHubErrorBody, RepoRef, UpdateOutcome, Visibility, VisibilityPatch};
use reqwest::Client;
use std::io::Write;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const UNKNOWN_ERROR: &str = "Unknown error";

pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: String, base_url: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(RepoUtilsError::MissingToken);
        }

        let client = Client::builder()
            .user_agent(concat!("repo-utils/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the `private` flag of one repository.
    ///
    /// Only a 200 counts as success. Any other status is reported as a
    /// failure outcome carrying the API's `message`; transport errors and
    /// undecodable error bodies are returned as `Err`.
    pub async fn update_visibility(
        &self,
        repo: &RepoRef,
        visibility: Visibility,
    ) -> Result<UpdateOutcome> {
        let url = format!("{}/repos/{}/{}", self.base_url, repo.owner, repo.name);
        debug!(%url, %visibility, "Sending visibility update");

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .json(&VisibilityPatch {
                private: visibility.is_private(),
            })
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            return Ok(UpdateOutcome::Success {
                repo: repo.clone(),
                visibility,
            });
        }

        let body = response.text().await?;
        let error_body: GitHubErrorBody = serde_json::from_str(&body)?;
        let message = error_body
            .message
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        warn!(repo = %repo, status = status.as_u16(), %message, "Visibility update rejected");

        Ok(UpdateOutcome::Failure {
            repo: repo.clone(),
            status: status.as_u16(),
            message,
        })
    }
}

/// Validate an API root and strip any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw)
        .map_err(|e| RepoUtilsError::ConfigError(format!("invalid GITHUB_BASE_URL {:?}: {}", raw, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(RepoUtilsError::ConfigError(format!(
                "unsupported GITHUB_BASE_URL scheme: {}",
                other
            )));
        }
    }

    Ok(raw.trim_end_matches('/').to_string())
}

/// Treat an unset or empty token as missing. Whitespace is passed through.
pub fn require_token(token: Option<String>) -> Result<String> {
    match token {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(RepoUtilsError::MissingToken),
    }
}

/// Update every repository in order, writing progress to `out`.
///
/// A rejected repository does not stop the batch. A transport error does.
pub async fn change_visibility_batch<W: Write>(
    client: &GitHubClient,
    owner: &str,
    repos: &[String],
    visibility: Visibility,
    out: &mut W,
) -> Result<BatchSummary> {
    let mut succeeded = 0;

    for name in repos {
        let repo = RepoRef::new(owner, name.as_str());
        writeln!(out, "Processing {}...", repo)?;

        let outcome = client.update_visibility(&repo, visibility).await?;
        writeln!(out, "{}", outcome)?;
        if outcome.is_success() {
            succeeded += 1;
        }

        writeln!(out)?;
    }

    let summary = BatchSummary {
        succeeded,
        total: repos.len(),
        visibility,
    };
    writeln!(out, "{}", summary)?;

    Ok(summary)
}
