use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use github_metrics::output::{format_pr_table, TableStyle};
use github_metrics::{cli, fetch, github, Config};

#[derive(Parser, Debug)]
#[command(name = "list-open-prs")]
#[command(about = "List open pull requests of a GitHub repository", long_about = None)]
#[command(version, after_help = cli::EXIT_CODES_HELP)]
struct Cli {
    /// Repository owner (user or organization)
    owner: String,

    /// Repository name
    repo: String,
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let client = github::create_client(&config)?;

    let prs = fetch::fetch_open_prs(&client, &cli.owner, &cli.repo)
        .await
        .with_context(|| format!("Failed to list PRs for {}/{}", cli.owner, cli.repo))?;

    println!("{}", format_pr_table(&prs, Utc::now(), TableStyle::detect()));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Cli = cli::parse_args();
    cli::init();
    cli::exit_with(run(args).await);
}
