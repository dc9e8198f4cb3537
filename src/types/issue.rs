use serde::{Deserialize, Serialize};

use crate::responses::PageInfo;

/// One issue as returned by either the browse or the search query.
///
/// The search query only selects fields on `Issue` nodes, so pull requests
/// and other node types arrive as empty objects; every field tolerates that.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<IssueRepository>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct IssueRepository {
    pub name: String,
}

impl Issue {
    pub fn repository_name(&self) -> Option<&str> {
        self.repository.as_ref().map(|r| r.name.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct IssueEdge {
    pub node: Issue,
}

/// A page (or accumulated pages) of issues, in server order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct IssueConnection {
    pub edges: Vec<IssueEdge>,
    #[serde(rename = "totalCount")]
    pub total_count: u64,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

impl IssueConnection {
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.edges.iter().map(|e| &e.node)
    }
}
