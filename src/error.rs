use http::StatusCode;
use thiserror::Error;

// Exit codes shared by all binaries
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_AUTH: i32 = 1;
pub const EXIT_NETWORK: i32 = 2;
pub const EXIT_CONFIG: i32 = 4;
pub const EXIT_STORAGE: i32 = 5;
// BSD sysexits EX_USAGE: wrong arguments
pub const EXIT_USAGE: i32 = 64;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("incorrect repository format {0:?}. expected \"<owner>/<repo>\"")]
    Format(String),

    #[error("environment variable {0} is not set")]
    MissingToken(&'static str),

    #[error("invalid API base URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("{message}")]
    Authentication { message: String },

    #[error("{message}")]
    Network { message: String },

    #[error("{message}")]
    Api { message: String },

    #[error("{operation} failed: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl MetricsError {
    /// Map an octocrab failure for the named operation onto the error taxonomy
    pub fn from_octocrab(operation: &str, error: &octocrab::Error) -> Self {
        if let octocrab::Error::GitHub { source, .. } = error {
            let status = source.status_code;
            return if is_auth_failure(status) {
                MetricsError::Authentication {
                    message: format!(
                        "{operation} failed: GitHub returned {status} {}. Check GITHUB_TOKEN.",
                        source.message
                    ),
                }
            } else {
                MetricsError::Api {
                    message: format!(
                        "{operation} failed with status {status}: {}",
                        source.message
                    ),
                }
            };
        }

        if is_network_error(error) {
            return MetricsError::Network {
                message: format!("{operation} failed: {error}"),
            };
        }

        MetricsError::Api {
            message: format!("{operation} failed: {error}"),
        }
    }

    pub fn storage(operation: &'static str, source: rusqlite::Error) -> Self {
        MetricsError::Storage { operation, source }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MetricsError::Authentication { .. } => EXIT_AUTH,
            MetricsError::Network { .. } | MetricsError::Api { .. } => EXIT_NETWORK,
            MetricsError::Format(_)
            | MetricsError::MissingToken(_)
            | MetricsError::InvalidUrl { .. } => EXIT_CONFIG,
            MetricsError::Storage { .. } => EXIT_STORAGE,
        }
    }
}

/// Exit code for an error chain, falling back to the network code for
/// errors that did not originate in this crate.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<MetricsError>())
        .map(MetricsError::exit_code)
        .unwrap_or(EXIT_NETWORK)
}

fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. } | octocrab::Error::Hyper { .. } | octocrab::Error::Service { .. }
    )
}
