use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::state::{RenderState, SessionState};
use crate::types::{Issue, Organization};

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Print a message (skipped in quiet mode, or prints simple object in JSON mode)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

pub fn print_session(state: &SessionState) {
    print_item(state, |s| print!("{}", render_session(s)));
}

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl IssueRow {
    fn new(position: usize, issue: &Issue) -> Self {
        let title = match issue.repository_name() {
            Some(repo) => format!("[{repo}] {}", issue.title),
            None => issue.title.clone(),
        };

        Self {
            position,
            title: truncate(&title, 60),
            created: issue
                .created_at
                .as_deref()
                .map(format_date_only)
                .unwrap_or_default(),
            url: issue.url.clone(),
        }
    }
}

/// Render a snapshot as the read-only organization → repository → issues tree.
pub fn render_session(state: &SessionState) -> String {
    let mut out = String::new();

    if let Some(failure) = &state.failure {
        out.push_str(&format!("{} {failure}\n", "Request failed:".red().bold()));
    }

    match state.render_state() {
        RenderState::Empty => out.push_str("No information yet ...\n"),
        RenderState::Errors(errors) => {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            out.push_str(&format!(
                "{} {}\n",
                "Something went wrong:".red().bold(),
                messages.join(" ")
            ));
        }
        RenderState::Loaded(organization) => {
            render_organization(&mut out, organization);
            if state.has_more() {
                out.push_str(&format!("{}\n", "More issues available".dimmed()));
            }
        }
    }

    out
}

fn render_organization(out: &mut String, organization: &Organization) {
    out.push_str(&format!(
        "{} {} ({})\n",
        "Issues from Organization:".bold(),
        organization.name.as_deref().unwrap_or("-"),
        organization.url
    ));

    let Some(repository) = &organization.repository else {
        return;
    };

    let star = if repository.viewer_has_starred {
        "★".yellow().to_string()
    } else {
        "☆".to_string()
    };
    out.push_str(&format!(
        "{} {} ({}) {star} {}\n",
        "In Repository:".bold(),
        repository.name,
        repository.url,
        repository.stargazers.total_count
    ));

    let issues = &repository.issues;
    if issues.edges.is_empty() {
        out.push_str("No issues.\n");
        return;
    }

    let rows: Vec<IssueRow> = issues
        .issues()
        .enumerate()
        .map(|(i, issue)| IssueRow::new(i + 1, issue))
        .collect();
    out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    out.push('\n');
    out.push_str(&format!(
        "Showing {} of {} issues\n",
        issues.edges.len(),
        issues.total_count
    ));
}

/// Format a date string as date only
pub fn format_date_only(iso: &str) -> String {
    use chrono::{DateTime, Utc};

    if let Ok(dt) = iso.parse::<DateTime<Utc>>() {
        dt.format("%Y-%m-%d").to_string()
    } else {
        iso.split('T').next().unwrap_or(iso).to_string()
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
