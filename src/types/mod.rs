mod issue;
mod organization;
mod search;

pub use issue::{Issue, IssueConnection, IssueEdge};
pub use organization::{Organization, Repository, Stargazers};
pub use search::{SearchConnection, SearchScope};
