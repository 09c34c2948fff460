use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A pull request as consumed from the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub author: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// PR age relative to `now`, rounded to whole seconds
    pub fn age_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        round_to_seconds(now - self.created_at)
    }
}

/// Round half away from zero, to the nearest second
pub fn round_to_seconds(duration: chrono::Duration) -> chrono::Duration {
    let millis = duration.num_milliseconds();
    let secs = if millis >= 0 {
        (millis + 500) / 1000
    } else {
        (millis - 500) / 1000
    };
    chrono::Duration::seconds(secs)
}

/// A pull request tagged with the short name of its repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrWithRepo {
    pub pr: PullRequest,
    pub repo: String,
}

/// `state` filter for the pulls endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestState {
    Open,
    Closed,
}

impl PullRequestState {
    pub fn as_str(self) -> &'static str {
        match self {
            PullRequestState::Open => "open",
            PullRequestState::Closed => "closed",
        }
    }
}

/// Deserialisation target for entries of `GET /repos/{owner}/{repo}/pulls`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub number: u64,
    pub title: Option<String>,
    pub user: Option<ApiUser>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub login: String,
}

/// Deserialisation target for entries of `GET /orgs/{org}/repos`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub name: String,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(api: ApiPullRequest) -> Self {
        PullRequest {
            number: api.number,
            author: api.user.map(|u| u.login).unwrap_or_default(),
            title: api.title.unwrap_or_default(),
            created_at: api.created_at,
            closed_at: api.closed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_api_pull_request_conversion() {
        let api: ApiPullRequest = serde_json::from_value(serde_json::json!({
            "number": 7,
            "title": "Add widget",
            "state": "closed",
            "user": { "login": "octocat", "id": 1 },
            "created_at": "2024-01-01T00:00:00Z",
            "closed_at": "2024-01-03T12:00:00Z",
            "extra": "ignored"
        }))
        .unwrap();

        let pr = PullRequest::from(api);
        assert_eq!(pr.number, 7);
        assert_eq!(pr.author, "octocat");
        assert_eq!(pr.title, "Add widget");
        assert_eq!(pr.created_at, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            pr.closed_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_optional_fields() {
        let api: ApiPullRequest = serde_json::from_value(serde_json::json!({
            "number": 8,
            "user": null,
            "created_at": "2024-01-01T00:00:00Z",
            "closed_at": null
        }))
        .unwrap();

        let pr = PullRequest::from(api);
        assert_eq!(pr.author, "");
        assert_eq!(pr.title, "");
        assert_eq!(pr.closed_at, None);
    }

    #[test]
    fn test_age_at() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let pr = PullRequest {
            number: 1,
            author: "a".into(),
            title: "t".into(),
            created_at: created,
            closed_at: None,
        };
        assert_eq!(pr.age_at(created + Duration::days(3)), Duration::days(3));
    }

    #[test]
    fn test_round_to_seconds() {
        assert_eq!(
            round_to_seconds(Duration::milliseconds(1_499)),
            Duration::seconds(1)
        );
        assert_eq!(
            round_to_seconds(Duration::milliseconds(1_500)),
            Duration::seconds(2)
        );
        assert_eq!(
            round_to_seconds(Duration::milliseconds(-1_500)),
            Duration::seconds(-2)
        );
    }

    #[test]
    fn test_state_strings() {
        assert_eq!(PullRequestState::Open.as_str(), "open");
        assert_eq!(PullRequestState::Closed.as_str(), "closed");
    }
}
