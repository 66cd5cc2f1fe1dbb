use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository on the remote host, addressed as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoRef {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    pub fn from_private_flag(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Private => f.write_str("private"),
            Visibility::Public => f.write_str("public"),
        }
    }
}

// GitHub API request/response structures
#[derive(Debug, Serialize)]
pub struct VisibilityPatch {
    pub private: bool,
}

#[derive(Debug, Deserialize)]
pub struct GitHubErrorBody {
    pub message: Option<String>,
}

/// What happened to a single repository in a visibility batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Success {
        repo: RepoRef,
        visibility: Visibility,
    },
    Failure {
        repo: RepoRef,
        status: u16,
        message: String,
    },
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UpdateOutcome::Success { .. })
    }

    pub fn repo(&self) -> &RepoRef {
        match self {
            UpdateOutcome::Success { repo, .. } | UpdateOutcome::Failure { repo, .. } => repo,
        }
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOutcome::Success { repo, visibility } => {
                write!(f, "Successfully changed {} to {}", repo, visibility)
            }
            UpdateOutcome::Failure { status, message, .. } => {
                write!(f, "Error: {} - {}", status, message)
            }
        }
    }
}

/// Success/total tally printed at the end of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub total: usize,
    pub visibility: Visibility,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Completed: {}/{} repositories successfully changed to {}",
            self.succeeded, self.total, self.visibility
        )
    }
}
