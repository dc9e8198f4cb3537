use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::types::SearchScope;

#[derive(Parser)]
#[command(name = "gh-issues")]
#[command(about = "Browse and search the open issues of a GitHub repository", version)]
#[command(after_help = "EXAMPLES:
    gh-issues browse facebook/react       Page through open issues
    gh-issues browse --all                Fetch every page of the default repository
    gh-issues search \"hooks\"              Search issues of the default repository
    gh-issues star rust-lang/rust         Star a repository")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress informational messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse open issues of a repository, page by page
    #[command(
        alias = "b",
        after_help = "EXAMPLES:
    gh-issues browse
    gh-issues browse facebook/react --all
    gh-issues browse facebook/react --cursor Y3Vyc29yOnYyOpHOAAAAAQ=="
    )]
    Browse(BrowseArgs),
    /// Search issues by free text
    #[command(
        alias = "s",
        after_help = "EXAMPLES:
    gh-issues search \"memory leak\"
    gh-issues search \"label:bug\" --path facebook/react
    gh-issues search \"is:open author:octocat\" --scope global"
    )]
    Search(SearchArgs),
    /// Star a repository
    #[command(after_help = "EXAMPLES:
    gh-issues star facebook/react")]
    Star {
        /// Repository as <organization>/<repository> (uses default if not specified)
        path: Option<String>,
    },
    /// Remove your star from a repository
    #[command(after_help = "EXAMPLES:
    gh-issues unstar facebook/react")]
    Unstar {
        /// Repository as <organization>/<repository> (uses default if not specified)
        path: Option<String>,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    gh-issues completions bash > ~/.bash_completion.d/gh-issues
    gh-issues completions zsh > ~/.zfunc/_gh-issues")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args)]
pub struct BrowseArgs {
    /// Repository as <organization>/<repository> (uses default if not specified)
    pub path: Option<String>,

    /// Start from this pagination cursor instead of the first page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Fetch every remaining page without prompting
    #[arg(long, conflicts_with = "no_prompt")]
    pub all: bool,

    /// Show only the first page and never prompt for more
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search text (may be empty)
    pub query: String,

    /// Repository as <organization>/<repository> (uses default if not specified)
    #[arg(long, short)]
    pub path: Option<String>,

    /// Where to search (defaults to config, then repository)
    #[arg(long, value_enum)]
    pub scope: Option<SearchScope>,

    /// Continue a previous search from this cursor
    #[arg(long)]
    pub cursor: Option<String>,
}
