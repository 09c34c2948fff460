use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use github_metrics::output::{format_repo_pr_table, TableStyle};
use github_metrics::{cli, fetch, github, Config};

#[derive(Parser, Debug)]
#[command(name = "list-open-prs-org")]
#[command(
    about = "List open pull requests older than three weeks across an organization",
    long_about = None
)]
#[command(version, after_help = cli::EXIT_CODES_HELP)]
struct Cli {
    /// Organization whose repositories are scanned
    owner: String,
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let client = github::create_client(&config)?;

    let stale = fetch::fetch_stale_org_prs(&client, &cli.owner)
        .await
        .with_context(|| format!("Failed to list PRs for organization {}", cli.owner))?;

    tracing::info!(count = stale.len(), "found PRs older than {} days", fetch::AGE_CUTOFF_DAYS);
    println!("{}", format_repo_pr_table(&stale, Utc::now(), TableStyle::detect()));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Cli = cli::parse_args();
    cli::init();
    cli::exit_with(run(args).await);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use github_metrics::cli::usage_exit_code;
    use github_metrics::error::EXIT_USAGE;

    #[test]
    fn test_expected_arguments_parse() {
        assert!(Cli::try_parse_from(["list-open-prs-org", "acme"]).is_ok());
    }

    #[test]
    fn test_too_few_arguments_is_usage_error() {
        let err = Cli::try_parse_from(["list-open-prs-org"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(usage_exit_code(&err), EXIT_USAGE);
    }

    #[test]
    fn test_too_many_arguments_is_usage_error() {
        let err = Cli::try_parse_from(["list-open-prs-org", "acme", "widgets"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(usage_exit_code(&err), EXIT_USAGE);
    }
}
