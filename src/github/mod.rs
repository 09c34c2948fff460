pub mod client;
pub mod pagination;
pub mod pulls;
pub mod repos;
pub mod types;

pub use client::create_client;
pub use pagination::{collect_pages, for_each_page, PageOf, FIRST_PAGE, PER_PAGE};
pub use pulls::{list_pull_requests, list_pull_requests_page};
pub use repos::list_org_repos_page;
pub use types::{PrWithRepo, PullRequest, PullRequestState};
