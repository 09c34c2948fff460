use octocrab::{Octocrab, Page};

use crate::error::MetricsError;
use crate::github::pagination::{collect_pages, PageOf, PER_PAGE};
use crate::github::types::{ApiPullRequest, PullRequest, PullRequestState};

/// Fetch a single page of pull requests for `owner/repo`
pub async fn list_pull_requests_page(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    state: PullRequestState,
    page: u32,
) -> Result<PageOf<PullRequest>, MetricsError> {
    tracing::debug!(owner, repo, state = state.as_str(), page, "listing pull requests");

    let route = format!("/repos/{owner}/{repo}/pulls");
    let page_str = page.to_string();
    let per_page_str = PER_PAGE.to_string();
    let params = [
        ("state", state.as_str()),
        ("per_page", per_page_str.as_str()),
        ("page", page_str.as_str()),
    ];

    let result: Page<ApiPullRequest> = client
        .get(route, Some(&params))
        .await
        .map_err(|e| MetricsError::from_octocrab("list pull requests", &e))?;

    Ok(PageOf::from_octocrab(result))
}

/// Fetch every pull request in the given state, following pagination
pub async fn list_pull_requests(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    state: PullRequestState,
) -> Result<Vec<PullRequest>, MetricsError> {
    collect_pages(|page| list_pull_requests_page(client, owner, repo, state, page)).await
}
