use crate::error::{RepoUtilsError, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{error, info, warn};

/// Counts reported once every repository has been visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub processed: usize,
    pub successful: usize,
    pub failures: Vec<String>,
}

impl UpdateSummary {
    pub fn failed(&self) -> usize {
        self.processed - self.successful
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoStatus {
    Updated { branch: String },
    NotARepository,
    NoCommits,
}

pub struct RepoUpdater {
    base_dir: PathBuf,
}

impl RepoUpdater {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        RepoUpdater {
            base_dir: base_dir.into(),
        }
    }

    /// Visit every subdirectory of the base directory in name order.
    pub fn run(&self) -> Result<UpdateSummary> {
        info!(base_dir = %self.base_dir.display(), "Starting repository update process");

        let mut dirs = std::fs::read_dir(&self.base_dir)
            .map_err(|e| {
                error!(base_dir = %self.base_dir.display(), "Cannot access base directory");
                RepoUtilsError::IoError(e)
            })?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect::<Vec<_>>();
        dirs.sort();

        let mut summary = UpdateSummary::default();
        for dir in &dirs {
            summary.processed += 1;
            match self.update_repo(dir) {
                Ok(_) => summary.successful += 1,
                Err(reason) => {
                    let name = repo_name(dir);
                    summary.failures.push(format!("{}: {}", name, reason));
                }
            }
        }

        info!("=== SUMMARY ===");
        info!(
            processed = summary.processed,
            successful = summary.successful,
            failed = summary.failed(),
            "Repository update summary"
        );

        if summary.failures.is_empty() {
            info!("All repositories updated successfully!");
        } else {
            error!(failures = ?summary.failures, "Failed repositories");
        }

        Ok(summary)
    }

    /// Bring one repository up to date with origin.
    ///
    /// The error string is the short reason recorded in the failure list.
    pub fn update_repo(&self, repo_dir: &Path) -> std::result::Result<RepoStatus, String> {
        let name = repo_name(repo_dir);
        info!(%name, "Processing repository");

        if !repo_dir.join(".git").exists() {
            info!(%name, "SKIP: not a git repository");
            return Ok(RepoStatus::NotARepository);
        }

        if git(repo_dir, &["rev-parse", "--verify", "HEAD"]).is_err() {
            info!(%name, "SKIP: has no commits");
            return Ok(RepoStatus::NoCommits);
        }

        match git_output(repo_dir, &["branch", "--show-current"]) {
            Ok(branch) if !branch.is_empty() => {}
            _ => warn!(%name, "in detached HEAD state"),
        }

        let status = git_output(repo_dir, &["status", "--porcelain"]).map_err(|_| {
            error!(%name, "Failed to check status");
            "Failed to check status".to_string()
        })?;

        if !status.is_empty() {
            warn!(%name, "has uncommitted changes - stashing");
            let message = stash_message();
            git(repo_dir, &["stash", "push", "-m", message.as_str()]).map_err(|_| {
                error!(%name, "Failed to stash changes");
                "Failed to stash changes".to_string()
            })?;
        }

        git(repo_dir, &["fetch", "origin"]).map_err(|_| {
            error!(%name, "Failed to fetch from origin");
            "Failed to fetch".to_string()
        })?;

        let branch = if git(repo_dir, &["rev-parse", "--verify", "origin/main"]).is_ok() {
            "main"
        } else if git(repo_dir, &["rev-parse", "--verify", "origin/master"]).is_ok() {
            "master"
        } else {
            error!(%name, "Neither main nor master branch exists on origin");
            return Err("No main/master branch".to_string());
        };

        git(repo_dir, &["checkout", branch]).map_err(|_| {
            error!(%name, %branch, "Failed to checkout branch");
            format!("Failed to checkout {}", branch)
        })?;

        git(repo_dir, &["pull", "origin", branch]).map_err(|_| {
            error!(%name, "Failed to pull latest changes");
            "Failed to pull".to_string()
        })?;

        info!(%name, %branch, "Successfully updated repository");
        Ok(RepoStatus::Updated {
            branch: branch.to_string(),
        })
    }
}

pub fn stash_message() -> String {
    format!(
        "Auto-stash before update {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

fn repo_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

fn git(dir: &Path, args: &[&str]) -> Result<()> {
    git_output(dir, args).map(|_| ())
}

fn git_output(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;

    if !output.status.success() {
        return Err(RepoUtilsError::GitError(format!(
            "git {} exited with {}",
            args.join(" "),
            output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
