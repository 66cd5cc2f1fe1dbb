use colored::*;
use repo_utils::cli::{parse_or_exit, VisibilityCli};
use repo_utils::github::{change_visibility_batch, require_token, GitHubClient};
use repo_utils::logging;
use repo_utils::types::Visibility;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    logging::init("warn");

    let cli: VisibilityCli = parse_or_exit();

    let token = match require_token(cli.token) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    };

    let client = match GitHubClient::new(token, &cli.base_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    };

    let visibility = Visibility::from_private_flag(!cli.public);
    tracing::info!(base_url = client.base_url(), %visibility, repos = cli.repos.len(), "Starting batch");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    change_visibility_batch(&client, &cli.owner, &cli.repos, visibility, &mut out).await?;

    Ok(())
}
