pub mod browse;
pub mod init;
pub mod search;
pub mod star;

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::Result;

/// Ask a yes/no question on the terminal. Non-interactive stdin answers no.
pub(crate) fn confirm(question: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Ok(false);
    }

    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
