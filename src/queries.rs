//! The fixed GraphQL documents sent to GitHub.

use const_format::concatcp;

/// Number of issues requested per page.
pub const PAGE_SIZE: u32 = 15;

pub const GET_ISSUES_OF_REPOSITORY: &str = concatcp!(
    r#"
query IssuesOfRepository($organization: String!, $repository: String!, $cursor: String) {
    organization(login: $organization) {
        name
        url
        repository(name: $repository) {
            id
            name
            url
            stargazers {
                totalCount
            }
            viewerHasStarred
            issues(first: "#,
    PAGE_SIZE,
    r#", after: $cursor, states: [OPEN]) {
                edges {
                    node {
                        id
                        title
                        url
                    }
                }
                totalCount
                pageInfo {
                    endCursor
                    hasNextPage
                }
            }
        }
    }
}
"#
);

pub const SEARCH_ISSUES: &str = concatcp!(
    r#"
query SearchIssues($query: String!, $cursor: String) {
    search(first: "#,
    PAGE_SIZE,
    r#", after: $cursor, type: ISSUE, query: $query) {
        issueCount
        pageInfo {
            hasNextPage
            endCursor
        }
        edges {
            node {
                ... on Issue {
                    id
                    createdAt
                    title
                    url
                    repository {
                        name
                    }
                }
            }
        }
    }
}
"#
);

pub const ADD_STAR: &str = r#"
mutation AddStar($repositoryId: ID!) {
    addStar(input: { starrableId: $repositoryId }) {
        starrable {
            viewerHasStarred
        }
    }
}
"#;

pub const REMOVE_STAR: &str = r#"
mutation RemoveStar($repositoryId: ID!) {
    removeStar(input: { starrableId: $repositoryId }) {
        starrable {
            viewerHasStarred
        }
    }
}
"#;
