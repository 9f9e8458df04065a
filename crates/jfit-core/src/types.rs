//! Domain types shared across the journal fit checker

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw inputs for one assessment, exactly as they came from the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub journal_scope: String,
    pub abstract_text: String,
    pub full_text: String,
    /// Unparsed word limit; parsing problems surface in the format result
    pub max_word_count: String,
    /// Comma-separated section keywords
    pub required_sections: String,
}

impl AssessmentInput {
    /// Required text fields paired with their display names, in form order
    pub fn required_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("journal scope", self.journal_scope.as_str()),
            ("abstract", self.abstract_text.as_str()),
            ("full text", self.full_text.as_str()),
        ]
    }
}

/// Scope-fit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitCategory {
    #[serde(rename = "High Fit")]
    High,
    #[serde(rename = "Medium Fit")]
    Medium,
    #[serde(rename = "Low Fit")]
    Low,
    #[serde(rename = "No Fit")]
    NoFit,
    /// Reply could not be mapped to a canonical label
    Unknown,
    /// No reply could be obtained
    Error,
}

impl FitCategory {
    /// The four labels a backend may answer with, in match priority order
    pub const CANONICAL: [FitCategory; 4] = [
        FitCategory::High,
        FitCategory::Medium,
        FitCategory::Low,
        FitCategory::NoFit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FitCategory::High => "High Fit",
            FitCategory::Medium => "Medium Fit",
            FitCategory::Low => "Low Fit",
            FitCategory::NoFit => "No Fit",
            FitCategory::Unknown => "Unknown",
            FitCategory::Error => "Error",
        }
    }

    /// Exact match against the canonical labels only
    pub fn from_label(label: &str) -> Option<FitCategory> {
        Self::CANONICAL
            .iter()
            .copied()
            .find(|category| category.label() == label)
    }

    pub fn is_canonical(&self) -> bool {
        Self::CANONICAL.contains(self)
    }
}

impl fmt::Display for FitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of the scope classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitAssessment {
    pub category: FitCategory,
    /// Never empty
    pub justification: String,
}

impl FitAssessment {
    pub fn new(category: FitCategory, justification: impl Into<String>) -> Self {
        Self {
            category,
            justification: justification.into(),
        }
    }

    pub fn error(justification: impl Into<String>) -> Self {
        Self::new(FitCategory::Error, justification)
    }
}

/// Word-count verdict against the configured limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCountStatus {
    Ok,
    /// `limit` is the canonical decimal form, so limits beyond `i64` survive
    Exceeded { limit: String },
    Invalid { reason: String },
}

impl WordCountStatus {
    pub fn exceeded(limit: impl ToString) -> Self {
        WordCountStatus::Exceeded {
            limit: limit.to_string(),
        }
    }
}

impl fmt::Display for WordCountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCountStatus::Ok => write!(f, "OK"),
            WordCountStatus::Exceeded { limit } => write!(f, "Exceeded ({})", limit),
            WordCountStatus::Invalid { reason } => write!(f, "Invalid ({})", reason),
        }
    }
}

/// Result of the deterministic formatting checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCheckResult {
    pub word_count: usize,
    pub word_count_status: WordCountStatus,
    pub sections_found: Vec<String>,
    pub sections_missing: Vec<String>,
}

/// Everything handed to the presentation layer for one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedResult {
    pub fit: FitAssessment,
    pub format: FormatCheckResult,
}
