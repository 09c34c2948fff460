use std::io::IsTerminal;

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::github::types::{PrWithRepo, PullRequest};

/// Narrowest the Title column is squeezed to when fitting the terminal
const MIN_TITLE_WIDTH: usize = 10;

/// Check if stdout is a TTY (for auto-detecting color support)
fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Rendering options shared by both table layouts
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStyle {
    pub use_colors: bool,
    /// Total width to fit into; `None` never truncates
    pub max_width: Option<usize>,
}

impl TableStyle {
    /// Style for the current stdout
    pub fn detect() -> Self {
        Self {
            use_colors: should_use_colors(),
            max_width: get_terminal_width(),
        }
    }
}

/// Creation time in local time, e.g. "Mon, 2 Jan 2006 15:04:05 +0000"
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).to_rfc2822()
}

/// Elapsed time keeping only the two most significant units, e.g. "25days 3h".
///
/// humantime has no week unit, so three weeks reads "21days" rather than
/// "3 weeks".
pub fn format_open_time(age: chrono::Duration) -> String {
    let secs = u64::try_from(age.num_seconds()).unwrap_or(0);
    let full = humantime::format_duration(std::time::Duration::from_secs(secs)).to_string();
    full.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

/// Table of open PRs for a single repository
pub fn format_pr_table(prs: &[PullRequest], now: DateTime<Utc>, style: TableStyle) -> String {
    let headers = ["ID", "Author", "Title", "Created At", "Open Time"];
    let rows = prs.iter().map(|pr| pr_cells(pr, now)).collect();
    render_table(&headers, rows, 2, style)
}

/// Table of PRs gathered across an organization, tagged with repo names
pub fn format_repo_pr_table(prs: &[PrWithRepo], now: DateTime<Utc>, style: TableStyle) -> String {
    let headers = ["Repo", "ID", "Author", "Title", "Created At", "Open Time"];
    let rows = prs
        .iter()
        .map(|tagged| {
            let mut cells = vec![tagged.repo.clone()];
            cells.extend(pr_cells(&tagged.pr, now));
            cells
        })
        .collect();
    render_table(&headers, rows, 3, style)
}

fn pr_cells(pr: &PullRequest, now: DateTime<Utc>) -> Vec<String> {
    vec![
        pr.number.to_string(),
        pr.author.clone(),
        pr.title.clone(),
        format_created_at(pr.created_at),
        format_open_time(pr.age_at(now)),
    ]
}

/// Truncate to a display width, accounting for wide characters
fn truncate_title(title: &str, max_width: usize) -> String {
    if title.width() <= max_width {
        return title.to_string();
    }

    let (budget, suffix) = if max_width > 3 {
        (max_width - 3, "...")
    } else {
        (max_width, "")
    };

    let mut out = String::new();
    let mut used = 0;
    for ch in title.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(suffix);
    out
}

/// Render a bordered table. `title_col` is the column shrunk first when the
/// table is wider than `style.max_width`.
fn render_table(
    headers: &[&str],
    mut rows: Vec<Vec<String>>,
    title_col: usize,
    style: TableStyle,
) -> String {
    let headers: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    if let Some(max_width) = style.max_width {
        // "| " + cells joined by " | " + " |"
        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len() + 1;
        if total > max_width {
            let others = total - widths[title_col];
            let target = max_width.saturating_sub(others).max(MIN_TITLE_WIDTH);
            if target < widths[title_col] {
                widths[title_col] = target;
                for row in &mut rows {
                    row[title_col] = truncate_title(&row[title_col], target);
                }
            }
        }
    }

    let border = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut lines = vec![border.clone()];
    lines.push(render_row(&headers, &widths, style.use_colors));
    lines.push(border.clone());
    for row in &rows {
        lines.push(render_row(row, &widths, false));
    }
    if !rows.is_empty() {
        lines.push(border);
    }
    lines.join("\n")
}

fn render_row(cells: &[String], widths: &[usize], bold: bool) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padded = format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width())));
            if bold {
                padded.bold().to_string()
            } else {
                padded
            }
        })
        .collect();
    format!("| {} |", rendered.join(" | "))
}
