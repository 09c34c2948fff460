use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use github_metrics::store::PrStore;
use github_metrics::{cli, fetch, github, Config, RepoId};

#[derive(Parser, Debug)]
#[command(name = "load-prs")]
#[command(about = "Load closed pull requests of a GitHub repository into SQLite", long_about = None)]
#[command(version, after_help = cli::EXIT_CODES_HELP)]
struct Cli {
    /// SQLite database file (created if missing; must not already hold a prs table)
    db_path: PathBuf,

    /// Repository owner (user or organization)
    owner: String,

    /// Repository name
    repo: String,
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let client = github::create_client(&config)?;
    let repo = RepoId::new(cli.owner, cli.repo);

    // Dropped (and closed) on every return path below
    let store = PrStore::open(&cli.db_path)
        .with_context(|| format!("Failed to open database at {}", cli.db_path.display()))?;
    store.ensure_schema()?;

    let inserted = fetch::load_closed_prs(&client, &repo, &store)
        .await
        .with_context(|| format!("Failed to load closed PRs for {}", repo))?;

    tracing::info!(total = inserted, repository = %repo, "load complete");
    store.close()?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Cli = cli::parse_args();
    cli::init();
    cli::exit_with(run(args).await);
}
