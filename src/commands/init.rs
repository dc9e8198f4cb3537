use std::io::{self, Write};

use crate::config::{Config, DEFAULT_PATH, TOKEN_ENV};
use crate::error::Result;
use crate::repo_path::RepoPath;
use crate::types::SearchScope;

use super::confirm;

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists()
        && !confirm(&format!(
            "Config file already exists at {}. Overwrite?",
            config_path.display()
        ))?
    {
        println!("Aborted.");
        return Ok(());
    }

    println!("gh-issues Configuration");
    println!("=======================\n");

    let token = prompt(&format!(
        "GitHub token (https://github.com/settings/tokens) [optional, {TOKEN_ENV} also works]: "
    ))?;

    let default_path = prompt(&format!("Default repository [{DEFAULT_PATH}]: "))?;
    if !default_path.is_empty() {
        // Validate before saving.
        default_path.parse::<RepoPath>()?;
    }

    let global = prompt("Search all of GitHub instead of the repository? [y/N] ")?;
    let search_scope = if global.eq_ignore_ascii_case("y") {
        SearchScope::Global
    } else {
        SearchScope::Repository
    };

    let config = Config {
        token: Some(token).filter(|t| !t.is_empty()),
        default_path: Some(default_path).filter(|p| !p.is_empty()),
        search_scope: Some(search_scope),
        endpoint: None,
    };

    let saved = config.save()?;

    println!("\nConfig saved to {}", saved.display());
    println!("You can now use 'gh-issues' commands!");

    Ok(())
}
