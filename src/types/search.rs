use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{IssueConnection, IssueEdge};
use crate::repo_path::RepoPath;
use crate::responses::PageInfo;

/// How a free-text search is scoped before it is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Restrict results to open issues of the session's repository, matching
    /// what browsing lists
    #[default]
    Repository,
    /// Send the text as-is and search all of GitHub
    Global,
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository => write!(f, "repository"),
            Self::Global => write!(f, "global"),
        }
    }
}

impl SearchScope {
    /// Build the search string GitHub receives for `text`.
    pub fn apply(self, path: &RepoPath, text: &str) -> String {
        match self {
            Self::Global => text.to_string(),
            Self::Repository => {
                let qualifiers = format!("repo:{path} is:issue is:open");
                if text.trim().is_empty() {
                    qualifiers
                } else {
                    format!("{qualifiers} {text}")
                }
            }
        }
    }
}

/// Result shape of the `search` field.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SearchConnection {
    #[serde(rename = "issueCount")]
    pub issue_count: u64,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    pub edges: Vec<IssueEdge>,
}

impl From<SearchConnection> for IssueConnection {
    fn from(search: SearchConnection) -> Self {
        Self {
            edges: search.edges,
            total_count: search.issue_count,
            page_info: search.page_info,
        }
    }
}
