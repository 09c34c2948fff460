use chrono::{DateTime, Duration, Utc};
use octocrab::Octocrab;

use crate::error::MetricsError;
use crate::github::pagination::{for_each_page, FIRST_PAGE};
use crate::github::types::{PrWithRepo, PullRequest, PullRequestState};
use crate::github::{list_org_repos_page, list_pull_requests, list_pull_requests_page};
use crate::repo_id::RepoId;
use crate::store::PrStore;

/// Open PRs older than this are reported by the organization scan
pub const AGE_CUTOFF_DAYS: i64 = 21;

pub fn age_cutoff() -> Duration {
    Duration::days(AGE_CUTOFF_DAYS)
}

/// Strictly older than the cutoff; a PR exactly 21 days old is not stale
pub fn is_stale(pr: &PullRequest, now: DateTime<Utc>) -> bool {
    pr.age_at(now) > age_cutoff()
}

/// Order by creation time, oldest first
pub fn sort_by_created(prs: &mut [PrWithRepo]) {
    prs.sort_by_key(|p| p.pr.created_at);
}

/// Fetch every open PR of a single repository, in API order
pub async fn fetch_open_prs(
    client: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<Vec<PullRequest>, MetricsError> {
    list_pull_requests(client, owner, repo, PullRequestState::Open).await
}

/// Fetch open PRs older than the age cutoff across every repository of an
/// organization, sorted oldest first
pub async fn fetch_stale_org_prs(
    client: &Octocrab,
    org: &str,
) -> Result<Vec<PrWithRepo>, MetricsError> {
    fetch_stale_org_prs_with_clock(client, org, Utc::now).await
}

/// Same as [`fetch_stale_org_prs`] with an injectable clock. The clock is
/// read once per PR as it is fetched.
pub async fn fetch_stale_org_prs_with_clock<C>(
    client: &Octocrab,
    org: &str,
    clock: C,
) -> Result<Vec<PrWithRepo>, MetricsError>
where
    C: Fn() -> DateTime<Utc>,
{
    let mut stale = Vec::new();
    let mut page = FIRST_PAGE;

    loop {
        let repos = list_org_repos_page(client, org, page).await?;

        for repo in repos.items {
            tracing::info!(repo = %repo, "looking in repo");

            let prs = list_pull_requests(client, org, &repo, PullRequestState::Open).await?;
            for pr in prs {
                if is_stale(&pr, clock()) {
                    stale.push(PrWithRepo {
                        pr,
                        repo: repo.clone(),
                    });
                }
            }
        }

        match repos.next_page {
            Some(next) => page = next,
            None => break,
        }
    }

    sort_by_created(&mut stale);
    Ok(stale)
}

/// Insert every closed PR of `repo` into `store`, one row per PR, page by
/// page. Returns the number of rows inserted. The first failed insert
/// aborts the load; rows written before it stay.
pub async fn load_closed_prs(
    client: &Octocrab,
    repo: &RepoId,
    store: &PrStore,
) -> Result<usize, MetricsError> {
    let full_name = repo.full_name();
    let mut total = 0;

    for_each_page(
        |page| {
            list_pull_requests_page(client, &repo.owner, &repo.repo, PullRequestState::Closed, page)
        },
        |prs| {
            for pr in &prs {
                store.insert(&full_name, pr)?;
            }
            total += prs.len();
            tracing::info!(count = prs.len(), "inserted records");
            Ok(())
        },
    )
    .await?;

    Ok(total)
}
