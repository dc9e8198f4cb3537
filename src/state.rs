//! Session state and the pure transitions that fold responses into it.
//!
//! Every transition consumes a snapshot and returns the next one. Only
//! [`Session`] holds the mutable reference to the current snapshot, and it
//! applies transitions one response at a time, in arrival order.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::{GitHubClient, GraphQLError, QueryResult};
use crate::error::{GitHubError, Result};
use crate::responses::{IssuesOfRepository, SearchIssues};
use crate::types::{IssueConnection, Organization, SearchScope};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SessionState {
    pub path: String,
    pub organization: Option<Organization>,
    pub errors: Option<Vec<GraphQLError>>,
    pub query: String,
    /// Last transport failure, cleared by the next successful response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// What the presentation layer should show for a snapshot.
#[derive(Debug, PartialEq)]
pub enum RenderState<'a> {
    Empty,
    Errors(&'a [GraphQLError]),
    Loaded(&'a Organization),
}

impl SessionState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            organization: None,
            errors: None,
            query: String::new(),
            failure: None,
        }
    }

    pub fn render_state(&self) -> RenderState<'_> {
        match (&self.errors, &self.organization) {
            (Some(errors), _) if !errors.is_empty() => RenderState::Errors(errors),
            (_, Some(organization)) => RenderState::Loaded(organization),
            _ => RenderState::Empty,
        }
    }

    pub fn issues(&self) -> Option<&IssueConnection> {
        self.organization
            .as_ref()
            .and_then(|o| o.repository.as_ref())
            .map(|r| &r.issues)
    }

    /// Cursor to continue from, present only while more pages exist and
    /// the last response carried no GraphQL errors.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.errors.as_ref().is_some_and(|e| !e.is_empty()) {
            return None;
        }
        self.issues()
            .filter(|issues| issues.page_info.has_next_page)
            .and_then(|issues| issues.page_info.end_cursor.as_deref())
    }

    pub fn has_more(&self) -> bool {
        self.next_cursor().is_some()
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    /// Merge a browse page. A page fetched without a cursor replaces the
    /// organization wholesale; a continuation appends its edges after the
    /// accumulated ones and takes everything else from the new page.
    pub fn resolve_issues_query(
        self,
        result: QueryResult<IssuesOfRepository>,
        had_cursor: bool,
    ) -> Self {
        let QueryResult { data, errors } = result;
        let organization = data.and_then(|d| d.organization);

        if !had_cursor {
            return Self {
                organization,
                errors,
                failure: None,
                ..self
            };
        }

        let organization = match organization {
            Some(mut fresh) if fresh.repository.is_some() => {
                let accumulated = self
                    .organization
                    .and_then(|o| o.repository)
                    .map(|r| r.issues.edges)
                    .unwrap_or_default();

                if let Some(repository) = fresh.repository.as_mut() {
                    let page = std::mem::take(&mut repository.issues.edges);
                    repository.issues.edges = accumulated;
                    repository.issues.edges.extend(page);
                }
                Some(fresh)
            }
            // A continuation without a repository only carries errors.
            _ => self.organization,
        };

        Self {
            organization,
            errors,
            failure: None,
            ..self
        }
    }

    /// Merge a search page. The repository wrapper stays as loaded; its
    /// issue connection becomes exactly the search results.
    pub fn resolve_search_query(self, result: QueryResult<SearchIssues>) -> Result<Self> {
        let QueryResult { data, errors } = result;

        let mut organization = self.organization.ok_or(GitHubError::NothingLoaded)?;
        let repository = organization
            .repository
            .as_mut()
            .ok_or(GitHubError::NothingLoaded)?;

        // A failed search field leaves the current list in place.
        if let Some(search) = data.and_then(|d| d.search) {
            repository.issues = IssueConnection::from(search);
        }

        Ok(Self {
            organization: Some(organization),
            errors,
            failure: None,
            ..self
        })
    }

    /// Record the repository's new starred flag, adjusting the stargazer count.
    pub fn resolve_star(self, starred: bool) -> Result<Self> {
        let mut organization = self.organization.ok_or(GitHubError::NothingLoaded)?;
        let repository = organization
            .repository
            .as_mut()
            .ok_or(GitHubError::NothingLoaded)?;

        if repository.viewer_has_starred != starred {
            let count = &mut repository.stargazers.total_count;
            *count = if starred {
                *count + 1
            } else {
                count.saturating_sub(1)
            };
            repository.viewer_has_starred = starred;
        }

        Ok(Self {
            organization: Some(organization),
            failure: None,
            ..self
        })
    }

    pub fn with_failure(self, message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..self
        }
    }
}

/// Owns the current snapshot and drives the client, one request at a time.
pub struct Session<'a> {
    client: &'a GitHubClient,
    scope: SearchScope,
    state: SessionState,
    /// Cursor of the last continuation requested.
    requested: Option<String>,
}

impl<'a> Session<'a> {
    pub fn new(client: &'a GitHubClient, path: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            client,
            scope,
            state: SessionState::new(path),
            requested: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state = self.state.clone().with_query(query);
    }

    pub async fn load(&mut self) -> Result<()> {
        self.fetch(None).await
    }

    /// Fetch the next page, if any. Returns whether a page was requested.
    ///
    /// Stops when the last response carried errors or when the server hands
    /// back a cursor that was already requested.
    pub async fn fetch_more(&mut self) -> Result<bool> {
        let Some(cursor) = self.state.next_cursor().map(String::from) else {
            return Ok(false);
        };
        if self.requested.as_deref() == Some(cursor.as_str()) {
            warn!(%cursor, "cursor did not advance; not requesting it again");
            return Ok(false);
        }

        self.requested = Some(cursor.clone());
        self.fetch(Some(cursor)).await?;
        Ok(true)
    }

    pub async fn fetch(&mut self, cursor: Option<String>) -> Result<()> {
        let outcome = self
            .client
            .fetch_repository_issues(&self.state.path, cursor.as_deref())
            .await;

        let result = self.settle(outcome)?;
        let had_cursor = cursor.is_some();
        self.replace(|state| Ok(state.resolve_issues_query(result, had_cursor)))?;

        if let Some(issues) = self.state.issues() {
            info!(
                loaded = issues.edges.len(),
                total = issues.total_count,
                more = issues.page_info.has_next_page,
                "issues merged"
            );
        }
        Ok(())
    }

    pub async fn search(&mut self, cursor: Option<&str>) -> Result<()> {
        let outcome = self
            .client
            .search_issues(&self.state.path, cursor, &self.state.query, self.scope)
            .await;

        let result = self.settle(outcome)?;
        self.replace(|state| state.resolve_search_query(result))
    }

    /// Flip the starred flag of the loaded repository.
    pub async fn toggle_star(&mut self, star: bool) -> Result<()> {
        let repository_id = self
            .state
            .organization
            .as_ref()
            .and_then(|o| o.repository.as_ref())
            .map(|r| r.id.clone())
            .ok_or(GitHubError::NothingLoaded)?;

        let starred = if star {
            let outcome = self.client.add_star(&repository_id).await;
            let result = self.settle(outcome)?;
            self.record_errors(result.errors);
            result
                .data
                .and_then(|d| d.add_star)
                .map(|p| p.starrable.viewer_has_starred)
        } else {
            let outcome = self.client.remove_star(&repository_id).await;
            let result = self.settle(outcome)?;
            self.record_errors(result.errors);
            result
                .data
                .and_then(|d| d.remove_star)
                .map(|p| p.starrable.viewer_has_starred)
        };

        match starred {
            Some(starred) => self.replace(|state| state.resolve_star(starred)),
            None => Ok(()),
        }
    }

    /// Turn a transport failure into the failure state, leaving data intact.
    fn settle<T>(&mut self, outcome: Result<T>) -> Result<T> {
        outcome.inspect_err(|e| {
            debug!(error = %e, "request failed; keeping previous state");
            self.state = self.state.clone().with_failure(e.to_string());
        })
    }

    fn record_errors(&mut self, errors: Option<Vec<GraphQLError>>) {
        if errors.is_some() {
            self.state.errors = errors;
        }
    }

    fn replace<F>(&mut self, transition: F) -> Result<()>
    where
        F: FnOnce(SessionState) -> Result<SessionState>,
    {
        let current = self.state.clone();
        self.state = transition(current)?;
        Ok(())
    }
}
