//! Report model: maps an assessment to labelled, levelled status lines

use colored::*;
use jfit_core::{CombinedResult, FitCategory, FormatCheckResult, WordCountStatus};
use serde::Serialize;

pub const MISSING_INPUT_MESSAGE: &str =
    "Please paste content into all Journal and Manuscript fields.";

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    fn icon(&self) -> &'static str {
        match self {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "💡",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusLine {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Render with an icon and the level's color
    pub fn render(&self) -> String {
        let text = match self.level {
            StatusLevel::Success => self.text.green(),
            StatusLevel::Info => self.text.cyan(),
            StatusLevel::Warning => self.text.yellow(),
            StatusLevel::Error => self.text.red(),
        };
        format!("{} {}", self.level.icon(), text)
    }
}

/// Everything the terminal front end prints for one assessment
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub fit_status: StatusLine,
    pub justification: String,
    pub formatting: Vec<StatusLine>,
}

impl AssessmentReport {
    pub fn from_result(result: &CombinedResult) -> Self {
        Self {
            fit_status: StatusLine::new(
                fit_level(result.fit.category),
                format!("Assessment: {}", result.fit.category),
            ),
            justification: result.fit.justification.clone(),
            formatting: formatting_lines(&result.format),
        }
    }

    pub fn render(&self, scope_title: &str) -> String {
        let mut out = Vec::new();
        out.push(scope_title.bold().to_string());
        out.push(self.fit_status.render());
        out.push(format!("{} {}", "Justification:".bold(), self.justification));
        out.push(String::new());
        out.push("Formatting Checks (Basic)".bold().to_string());
        out.extend(self.formatting.iter().map(StatusLine::render));
        out.join("\n")
    }
}

pub fn fit_level(category: FitCategory) -> StatusLevel {
    match category {
        FitCategory::High => StatusLevel::Success,
        FitCategory::Medium => StatusLevel::Info,
        FitCategory::Low | FitCategory::NoFit => StatusLevel::Warning,
        FitCategory::Unknown | FitCategory::Error => StatusLevel::Error,
    }
}

pub fn word_count_level(status: &WordCountStatus) -> StatusLevel {
    match status {
        WordCountStatus::Ok => StatusLevel::Success,
        WordCountStatus::Exceeded { .. } => StatusLevel::Warning,
        WordCountStatus::Invalid { .. } => StatusLevel::Error,
    }
}

fn formatting_lines(format: &FormatCheckResult) -> Vec<StatusLine> {
    let mut lines = vec![StatusLine::new(
        word_count_level(&format.word_count_status),
        format!(
            "Word Count: {} ({})",
            format.word_count, format.word_count_status
        ),
    )];

    let found = format.sections_found.join(", ");
    if format.sections_missing.is_empty() {
        let text = if found.is_empty() {
            "Required Sections: none configured".to_string()
        } else {
            format!("Required Sections: All found ({})", found)
        };
        lines.push(StatusLine::new(StatusLevel::Success, text));
    } else {
        lines.push(StatusLine::new(
            StatusLevel::Warning,
            format!(
                "Required Sections Missing: {}",
                format.sections_missing.join(", ")
            ),
        ));
        if !found.is_empty() {
            lines.push(StatusLine::new(
                StatusLevel::Info,
                format!("Sections Found: {}", found),
            ));
        }
    }

    lines
}

/// Status shown when validation rejects the input
pub fn missing_input_line() -> StatusLine {
    StatusLine::new(StatusLevel::Error, MISSING_INPUT_MESSAGE)
}
