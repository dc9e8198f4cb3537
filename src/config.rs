use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::client::{ClientConfig, DEFAULT_ENDPOINT};
use crate::error::{GitHubError, Result};
use crate::types::SearchScope;

pub const DEFAULT_PATH: &str = "facebook/react";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_scope: Option<SearchScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| GitHubError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| GitHubError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GitHubError::ConfigWrite {
                path: config_path.clone(),
                source: e,
            })?;
        }

        std::fs::write(&config_path, toml::to_string(self)?).map_err(|e| {
            GitHubError::ConfigWrite {
                path: config_path.clone(),
                source: e,
            }
        })?;

        Ok(config_path)
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "gh-issues")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(GitHubError::NoConfigDir)
    }

    /// Get token with env var taking precedence over config file
    pub fn token(&self) -> Option<String> {
        self.resolve_token(std::env::var(TOKEN_ENV).ok())
    }

    fn resolve_token(&self, from_env: Option<String>) -> Option<String> {
        from_env
            .filter(|t| !t.is_empty())
            .or_else(|| self.token.clone())
    }

    /// Get repository path, preferring explicit argument over default
    pub fn resolve_path(&self, explicit: Option<&str>) -> String {
        explicit
            .map(String::from)
            .or_else(|| self.default_path.clone())
            .unwrap_or_else(|| DEFAULT_PATH.to_string())
    }

    pub fn resolve_scope(&self, explicit: Option<SearchScope>) -> SearchScope {
        explicit.or(self.search_scope).unwrap_or_default()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token: self.token(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
token = "ghp_file"
default_path = "rust-lang/rust"
search_scope = "global"
endpoint = "https://github.example.com/api/graphql"
"#,
        )
        .unwrap();

        assert_eq!(config.token.as_deref(), Some("ghp_file"));
        assert_eq!(config.resolve_path(None), "rust-lang/rust");
        assert_eq!(config.resolve_scope(None), SearchScope::Global);
        assert_eq!(
            config.client_config().endpoint,
            "https://github.example.com/api/graphql"
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.resolve_path(None), DEFAULT_PATH);
        assert_eq!(config.resolve_scope(None), SearchScope::Repository);
        assert_eq!(config.client_config().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn explicit_arguments_win() {
        let config = Config::parse("default_path = \"a/b\"\nsearch_scope = \"global\"").unwrap();
        assert_eq!(config.resolve_path(Some("c/d")), "c/d");
        assert_eq!(
            config.resolve_scope(Some(SearchScope::Repository)),
            SearchScope::Repository
        );
    }

    #[test]
    fn env_token_takes_precedence() {
        let config = Config::parse("token = \"from-file\"").unwrap();
        assert_eq!(
            config.resolve_token(Some("from-env".to_string())).as_deref(),
            Some("from-env")
        );
        assert_eq!(config.resolve_token(None).as_deref(), Some("from-file"));
        assert_eq!(
            config.resolve_token(Some(String::new())).as_deref(),
            Some("from-file")
        );
    }

    #[test]
    fn saved_form_parses_back() {
        let config = Config {
            token: Some("ghp_x".to_string()),
            default_path: Some("facebook/react".to_string()),
            search_scope: Some(SearchScope::Global),
            endpoint: None,
        };
        let text = toml::to_string(&config).unwrap();
        assert!(!text.contains("endpoint"));
        assert!(text.contains("search_scope = \"global\""));

        let parsed = Config::parse(&text).unwrap();
        assert_eq!(parsed.resolve_scope(None), SearchScope::Global);
        assert_eq!(parsed.token.as_deref(), Some("ghp_x"));
    }

    #[test]
    fn rejects_unknown_scope() {
        assert!(Config::parse("search_scope = \"everywhere\"").is_err());
    }
}
