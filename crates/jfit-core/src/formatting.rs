//! Rule-based formatting checks: word count and required sections

use std::num::IntErrorKind;

use regex::Regex;

use crate::types::{FormatCheckResult, WordCountStatus};

const NON_NUMERIC_LIMIT: &str = "non-numeric max word count";

/// Deterministic formatting checker for manuscript text
pub struct FormatRuleEngine {
    word_pattern: Regex,
}

impl FormatRuleEngine {
    /// Create a new rule engine
    pub fn new() -> Self {
        Self {
            word_pattern: Regex::new(r"\w+").expect("word pattern is a valid regex"),
        }
    }

    /// Run every formatting check over the full text
    pub fn check_formatting(
        &self,
        full_text: &str,
        max_word_count_raw: &str,
        required_sections_raw: &str,
    ) -> FormatCheckResult {
        let word_count = self.word_count(full_text);
        let word_count_status = word_count_status(word_count, max_word_count_raw);

        let text_lower = full_text.to_lowercase();
        let mut sections_found = Vec::new();
        let mut sections_missing = Vec::new();

        for keyword in parse_required_sections(required_sections_raw) {
            let display = capitalize(&keyword);
            if contains_whole_word(&text_lower, &keyword) {
                sections_found.push(display);
            } else {
                sections_missing.push(display);
            }
        }

        FormatCheckResult {
            word_count,
            word_count_status,
            sections_found,
            sections_missing,
        }
    }

    /// Count maximal runs of word characters. Hyphenated words count once per part.
    pub fn word_count(&self, text: &str) -> usize {
        self.word_pattern.find_iter(text).count()
    }
}

impl Default for FormatRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper for one-off checks
pub fn check_formatting(
    full_text: &str,
    max_word_count_raw: &str,
    required_sections_raw: &str,
) -> FormatCheckResult {
    FormatRuleEngine::new().check_formatting(full_text, max_word_count_raw, required_sections_raw)
}

fn word_count_status(word_count: usize, max_word_count_raw: &str) -> WordCountStatus {
    let raw = max_word_count_raw.trim();
    match raw.parse::<i64>() {
        Ok(limit) if i64::try_from(word_count).map_or(true, |count| count > limit) => {
            WordCountStatus::exceeded(limit)
        }
        Ok(_) => WordCountStatus::Ok,
        // Out-of-range integers are still limits: above i64 no count can exceed
        // them, below i64 every count does.
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => WordCountStatus::Ok,
            IntErrorKind::NegOverflow => WordCountStatus::exceeded(canonical_negative(raw)),
            _ => WordCountStatus::Invalid {
                reason: NON_NUMERIC_LIMIT.to_string(),
            },
        },
    }
}

// Only reached for digit strings that overflowed `i64`, so the digits are non-zero.
fn canonical_negative(raw: &str) -> String {
    let digits = raw.trim_start_matches('-').trim_start_matches('0');
    format!("-{}", digits)
}

/// Split, trim, drop empties and lower-case. Input order and duplicates are kept.
pub fn parse_required_sections(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .map(str::to_lowercase)
        .collect()
}

// Anywhere in the body counts, not just headings.
fn contains_whole_word(text_lower: &str, keyword: &str) -> bool {
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .map(|pattern| pattern.is_match(text_lower))
        .unwrap_or(false)
}

fn capitalize(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
