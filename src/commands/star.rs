use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, print_session};
use crate::state::{RenderState, Session};

pub async fn run(
    client: &GitHubClient,
    config: &Config,
    path: Option<String>,
    star: bool,
) -> Result<()> {
    let path = config.resolve_path(path.as_deref());
    let mut session = Session::new(client, path.as_str(), config.resolve_scope(None));

    session.load().await?;
    if session.state().organization.is_some() {
        session.toggle_star(star).await?;
    }

    let state = session.into_state();
    match state.render_state() {
        RenderState::Loaded(organization) if !output::is_json_output() => {
            let (verb, count) = organization
                .repository
                .as_ref()
                .map(|r| {
                    let verb = if r.viewer_has_starred { "Starred" } else { "Unstarred" };
                    (verb, r.stargazers.total_count)
                })
                .unwrap_or(("Could not find", 0));
            output::print_message(&format!("{verb} {path} ({count} stars)"));
        }
        _ => print_session(&state),
    }

    Ok(())
}
