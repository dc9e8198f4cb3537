use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::GitHubError;

/// An `organization/repository` pair identifying the repository a session browses.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub organization: String,
    pub repository: String,
}

fn segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("segment pattern is valid"))
}

impl FromStr for RepoPath {
    type Err = GitHubError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            [organization, repository]
                if segment_pattern().is_match(organization)
                    && segment_pattern().is_match(repository) =>
            {
                Ok(Self {
                    organization: (*organization).to_string(),
                    repository: (*repository).to_string(),
                })
            }
            _ => Err(GitHubError::InvalidPath(path.to_string())),
        }
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.repository)
    }
}
