use serde::{Deserialize, Serialize};

use super::IssueConnection;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Organization {
    pub name: Option<String>,
    pub url: String,
    pub repository: Option<Repository>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
    pub stargazers: Stargazers,
    #[serde(rename = "viewerHasStarred")]
    pub viewer_has_starred: bool,
    pub issues: IssueConnection,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Stargazers {
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}
