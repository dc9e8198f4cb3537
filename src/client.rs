use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use crate::error::{GitHubError, Result};
use crate::queries::{ADD_STAR, GET_ISSUES_OF_REPOSITORY, REMOVE_STAR, SEARCH_ISSUES};
use crate::repo_path::RepoPath;
use crate::responses::{AddStarResponse, IssuesOfRepository, RemoveStarResponse, SearchIssues};
use crate::types::SearchScope;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Everything the client needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
        }
    }
}

pub struct GitHubClient {
    http: Client,
    endpoint: Url,
    token: Option<String>,
}

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<serde_json::Value>,
}

/// A transported GraphQL response.
///
/// GraphQL-level errors are part of a successful response and may sit next
/// to partial `data`; callers inspect `errors` themselves.
#[derive(Deserialize, Debug, Clone)]
pub struct QueryResult<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GraphQLError {
    pub message: String,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|_| GitHubError::InvalidUrl(config.endpoint))?;

        if config.token.is_none() {
            warn!("no GitHub token configured; requests will be unauthenticated");
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            endpoint,
            token: config.token,
        })
    }

    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<QueryResult<T>> {
        let request = GraphQLRequest { query, variables };

        let mut builder = self
            .http
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(&request);

        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("bearer {token}"));
        }

        debug!(endpoint = %self.endpoint, "sending GraphQL request");
        let response = builder.send().await?;

        if !response.status().is_success() {
            return Err(GitHubError::Api {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let result: QueryResult<T> = response.json().await?;

        if let Some(errors) = &result.errors {
            debug!(count = errors.len(), "GraphQL response carried errors");
        }

        Ok(result)
    }

    /// Fetch one page of open issues; `cursor` of `None` means the first page.
    pub async fn fetch_repository_issues(
        &self,
        path: &str,
        cursor: Option<&str>,
    ) -> Result<QueryResult<IssuesOfRepository>> {
        let path: RepoPath = path.parse()?;

        let variables = json!({
            "organization": path.organization,
            "repository": path.repository,
            "cursor": cursor,
        });

        debug!(%path, ?cursor, "fetching repository issues");
        self.query(GET_ISSUES_OF_REPOSITORY, Some(variables)).await
    }

    pub async fn search_issues(
        &self,
        path: &str,
        cursor: Option<&str>,
        text: &str,
        scope: SearchScope,
    ) -> Result<QueryResult<SearchIssues>> {
        let path: RepoPath = path.parse()?;

        let variables = json!({
            "query": scope.apply(&path, text),
            "cursor": cursor,
        });

        debug!(%path, %scope, ?cursor, "searching issues");
        self.query(SEARCH_ISSUES, Some(variables)).await
    }

    pub async fn add_star(&self, repository_id: &str) -> Result<QueryResult<AddStarResponse>> {
        self.query(ADD_STAR, Some(json!({ "repositoryId": repository_id })))
            .await
    }

    pub async fn remove_star(
        &self,
        repository_id: &str,
    ) -> Result<QueryResult<RemoveStarResponse>> {
        self.query(REMOVE_STAR, Some(json!({ "repositoryId": repository_id })))
            .await
    }
}
