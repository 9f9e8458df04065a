//! Terminal output for the `jfit` front end

use colored::*;
use crossterm::terminal::size;
use jfit_assess::AssessmentReport;
use jfit_core::{CombinedResult, CompletionHandle};

/// Display the startup banner with the run timestamp and backend state
pub fn display_banner(handle: &CompletionHandle) {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(67, terminal_width.saturating_sub(4)).max(40);
    let inner = banner_width - 2;

    let boxed = |text: &str| {
        let pad = inner.saturating_sub(text.chars().count() + 2);
        format!("│  {}{}│", text, " ".repeat(pad))
    };

    let title = "Journal Fit Checker";
    let timestamp = format!(
        "Current time: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let backend = format!("Scope backend: {}", handle.describe());

    println!();
    println!("{}", format!("┌{}┐", "─".repeat(inner)).blue());
    println!("{}", boxed(title).blue().bold());
    println!("{}", boxed(&timestamp).blue());
    println!("{}", boxed(&backend).blue());
    println!("{}", format!("└{}┘", "─".repeat(inner)).blue());
    println!();
}

/// Heading for the scope section; names the backend the way the report shows it
pub fn scope_title(handle: &CompletionHandle) -> String {
    match handle.service() {
        Some(service) => format!("Scope Analysis ({})", service.provider_name()),
        None => "Scope Analysis (not configured)".to_string(),
    }
}

/// Print both halves of an assessment as levelled status lines
pub fn print_report(result: &CombinedResult, handle: &CompletionHandle) {
    println!("{}", "Analysis Results".bold().underline());
    println!();
    println!(
        "{}",
        AssessmentReport::from_result(result).render(&scope_title(handle))
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_title_reflects_handle_state() {
        let handle = CompletionHandle::unconfigured("ANTHROPIC_API_KEY is not set");
        assert_eq!(scope_title(&handle), "Scope Analysis (not configured)");

        let handle = jfit_claude::ClaudeClient::handle_from_config(Ok(Some(
            jfit_claude::ClaudeConfig::new("sk-test".to_string()),
        )));
        assert_eq!(scope_title(&handle), "Scope Analysis (Claude AI)");
    }
}
