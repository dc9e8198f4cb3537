//! Shared GraphQL response types for the fixed queries and mutations.

use serde::{Deserialize, Serialize};

use crate::types::{Organization, SearchConnection};

/// Pagination info for cursor-based pagination.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

/// `data` of the browse-issues query.
#[derive(Deserialize, Debug, Clone)]
pub struct IssuesOfRepository {
    pub organization: Option<Organization>,
}

/// `data` of the search query. `search` is null when the field failed.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchIssues {
    pub search: Option<SearchConnection>,
}

/// `data` of the addStar mutation.
#[derive(Deserialize, Debug)]
pub struct AddStarResponse {
    #[serde(rename = "addStar")]
    pub add_star: Option<StarPayload>,
}

/// `data` of the removeStar mutation.
#[derive(Deserialize, Debug)]
pub struct RemoveStarResponse {
    #[serde(rename = "removeStar")]
    pub remove_star: Option<StarPayload>,
}

#[derive(Deserialize, Debug)]
pub struct StarPayload {
    pub starrable: Starrable,
}

#[derive(Deserialize, Debug)]
pub struct Starrable {
    #[serde(rename = "viewerHasStarred")]
    pub viewer_has_starred: bool,
}
