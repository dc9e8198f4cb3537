use tracing::debug;

use crate::cli::BrowseArgs;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, print_session};
use crate::state::Session;

use super::confirm;

pub async fn run(client: &GitHubClient, config: &Config, args: BrowseArgs) -> Result<()> {
    let path = config.resolve_path(args.path.as_deref());
    let mut session = Session::new(client, path, config.resolve_scope(None));

    session.fetch(args.cursor).await?;

    if args.all {
        loop {
            match session.fetch_more().await {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    print_session(session.state());
                    return Err(e);
                }
            }
        }
        print_session(session.state());
        return Ok(());
    }

    print_session(session.state());

    if args.no_prompt || output::is_json_output() {
        return Ok(());
    }

    while session.state().has_more() && confirm("Load more?")? {
        debug!(cursor = ?session.state().next_cursor(), "loading more issues");
        if !session.fetch_more().await? {
            break;
        }
        print_session(session.state());
    }

    Ok(())
}
