//! Pull request reports and loaders for GitHub repositories.
//!
//! Three binaries share this library:
//!
//! - `list-open-prs <owner> <repo>` prints a table of open pull requests.
//! - `list-open-prs-org <owner>` prints open pull requests older than three
//!   weeks across every repository of an organization, oldest first.
//! - `load-prs <sqlite-file> <owner> <repo>` loads closed pull requests
//!   into a SQLite table.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod github;
pub mod logging;
pub mod output;
pub mod repo_id;
pub mod store;

pub use config::Config;
pub use error::MetricsError;
pub use repo_id::{parse_repo_id, RepoId};
