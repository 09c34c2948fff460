use std::fmt;
use std::str::FromStr;

use crate::error::MetricsError;

/// A repository identifier in "owner/repo" form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Full name as stored in the database ("owner/repo")
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

/// Split "owner/repo" into its two parts.
///
/// Fails unless the input splits on '/' into exactly two non-empty parts.
/// No other validation is applied to the characters.
pub fn parse_repo_id(input: &str) -> Result<(String, String), MetricsError> {
    let parts: Vec<&str> = input.split('/').collect();
    match parts.as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(MetricsError::Format(input.to_string())),
    }
}

impl FromStr for RepoId {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, repo) = parse_repo_id(s)?;
        Ok(Self { owner, repo })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let (owner, repo) = parse_repo_id("acme/widgets").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "widgets");
    }

    #[test]
    fn test_parse_keeps_unusual_characters() {
        // Only the separator is checked
        let (owner, repo) = parse_repo_id("some org/re po!").unwrap();
        assert_eq!(owner, "some org");
        assert_eq!(repo, "re po!");
    }

    #[test]
    fn test_parse_no_separator() {
        assert!(matches!(
            parse_repo_id("acme"),
            Err(MetricsError::Format(_))
        ));
    }

    #[test]
    fn test_parse_too_many_separators() {
        assert!(parse_repo_id("acme/widgets/extra").is_err());
        assert!(parse_repo_id("acme//widgets").is_err());
    }

    #[test]
    fn test_parse_empty_parts() {
        assert!(parse_repo_id("/widgets").is_err());
        assert!(parse_repo_id("acme/").is_err());
        assert!(parse_repo_id("/").is_err());
        assert!(parse_repo_id("").is_err());
    }

    #[test]
    fn test_error_message_mentions_expected_format() {
        let err = parse_repo_id("nope").unwrap_err();
        assert!(err.to_string().contains("<owner>/<repo>"));
    }

    #[test]
    fn test_from_str_and_display() {
        let id: RepoId = "acme/widgets".parse().unwrap();
        assert_eq!(id, RepoId::new("acme", "widgets"));
        assert_eq!(id.full_name(), "acme/widgets");
    }
}
