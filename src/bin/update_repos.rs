use colored::*;
use repo_utils::cli::{parse_or_exit, UpdateReposCli};
use repo_utils::logging;
use repo_utils::updater::RepoUpdater;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    logging::init("info");

    let cli: UpdateReposCli = parse_or_exit();
    tracing::info!(version = VERSION, base_dir = %cli.base_dir.display(), "Starting repository updater");

    let summary = RepoUpdater::new(&cli.base_dir).run()?;

    if !summary.failures.is_empty() {
        eprintln!(
            "{}",
            format!("{}/{} repositories failed to update", summary.failed(), summary.processed).red()
        );
        std::process::exit(1);
    }

    Ok(())
}
