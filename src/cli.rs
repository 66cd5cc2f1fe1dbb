use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::github::DEFAULT_API_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "change-repo-visibility")]
#[command(about = "Change the visibility of one or more GitHub repositories")]
#[command(version)]
#[command(after_help = "Set GITHUB_TOKEN environment variable with your personal access token\n\
Optionally set GITHUB_BASE_URL for GitHub Enterprise (defaults to https://api.github.com)")]
pub struct VisibilityCli {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repositories to update, processed in order
    #[arg(required = true, num_args = 1..)]
    pub repos: Vec<String>,

    /// Make the repositories public instead of private
    #[arg(long)]
    pub public: bool,

    /// Personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API root, override for GitHub Enterprise
    #[arg(long, env = "GITHUB_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub base_url: String,
}

#[derive(Parser, Debug)]
#[command(name = "extract-links")]
#[command(about = "Extract saved post links from a Reddit HTML export as TSV")]
#[command(version)]
pub struct ExtractLinksCli {
    /// Saved HTML page
    pub html_file: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "update-repos")]
#[command(about = "Fast-forward every git repository in a directory to origin's main branch")]
#[command(version)]
pub struct UpdateReposCli {
    /// Directory containing the repositories
    #[arg(default_value = ".")]
    pub base_dir: PathBuf,
}

/// Parse arguments, exiting with status 1 on a usage error.
///
/// Usage errors are followed by the command's `after_help` text.
/// `--help` and `--version` still exit 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if !e.use_stderr() {
                std::process::exit(0);
            }
            if let Some(hint) = T::command().get_after_help() {
                eprintln!("\n{}", hint);
            }
            std::process::exit(1);
        }
    }
}
