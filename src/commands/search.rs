use crate::cli::SearchArgs;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::print_session;
use crate::state::Session;

/// Load the repository, then replace its issue list with the search results.
pub async fn run(client: &GitHubClient, config: &Config, args: SearchArgs) -> Result<()> {
    let path = config.resolve_path(args.path.as_deref());
    let scope = config.resolve_scope(args.scope);
    let mut session = Session::new(client, path, scope);

    session.load().await?;
    if session.state().issues().is_none() {
        // Nothing to search within; show why.
        print_session(session.state());
        return Ok(());
    }

    session.set_query(args.query);
    session.search(args.cursor.as_deref()).await?;

    print_session(session.state());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::types::SearchScope;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn unresolved_repository_reports_errors_without_searching() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(json!({ "variables": { "repository": "missing" } })))
            .with_status(200)
            .with_body(
                json!({
                    "data": {
                        "organization": {
                            "name": "Facebook",
                            "url": "https://github.com/facebook",
                            "repository": null
                        }
                    },
                    "errors": [{ "message": "Could not resolve to a Repository with the name 'facebook/missing'." }]
                })
                .to_string(),
            )
            .create_async()
            .await;
        let search = server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(json!({ "variables": { "query": "hooks" } })))
            .expect(0)
            .create_async()
            .await;

        let client = GitHubClient::new(ClientConfig {
            endpoint: format!("{}/graphql", server.url()),
            token: Some("t".to_string()),
        })
        .unwrap();
        let args = SearchArgs {
            query: "hooks".to_string(),
            path: Some("facebook/missing".to_string()),
            scope: Some(SearchScope::Global),
            cursor: None,
        };

        run(&client, &Config::default(), args).await.unwrap();
        search.assert_async().await;
    }
}
