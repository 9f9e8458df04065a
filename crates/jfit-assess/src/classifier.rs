//! Scope-fit classifier that asks a completion service to judge an abstract

use jfit_core::{CompletionHandle, CompletionRequest, FitAssessment, FitCategory};
use tracing::{debug, warn};

/// Reply-length cap sent with every classification request
pub const DEFAULT_MAX_REPLY_TOKENS: u32 = 150;

const EMPTY_REPLY: &str = "The assessment service returned an empty reply.";

/// Classifies how well an abstract fits a journal's scope
pub struct FitClassifier<'a> {
    handle: &'a CompletionHandle,
    max_tokens: u32,
}

impl<'a> FitClassifier<'a> {
    /// Create a new classifier over the process-wide completion handle
    pub fn new(handle: &'a CompletionHandle) -> Self {
        Self {
            handle,
            max_tokens: DEFAULT_MAX_REPLY_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Classify the abstract against the journal scope.
    ///
    /// Never fails: an unconfigured handle or a failed call comes back as
    /// `FitCategory::Error` with the reason in the justification.
    pub async fn classify_fit(&self, abstract_text: &str, journal_scope: &str) -> FitAssessment {
        let service = match self.handle {
            CompletionHandle::Configured(service) => service,
            CompletionHandle::Unconfigured { reason } => {
                warn!("scope classification skipped: client not initialized ({})", reason);
                return FitAssessment::error(format!("API client not initialized: {}", reason));
            }
        };

        let request = CompletionRequest {
            model_id: service.model_id().to_string(),
            max_tokens: self.max_tokens,
            prompt: build_fit_prompt(abstract_text, journal_scope),
        };

        match service.complete(&request).await {
            Ok(result) => {
                debug!(model = %result.model_id, "scope classification reply received");
                parse_fit_reply(&result.text)
            }
            Err(e) => {
                warn!("scope classification call failed: {}", e);
                FitAssessment::error(format!("Could not get assessment from AI: {}", e))
            }
        }
    }
}

/// Build the classification prompt with both texts embedded verbatim
pub fn build_fit_prompt(abstract_text: &str, journal_scope: &str) -> String {
    format!(
        "Analyze the fit between the following journal scope and paper abstract.\n\
        Focus on whether the abstract's topic, research area, and potential contribution align with the journal's stated aims.\n\
        Provide a concise assessment categorized as 'High Fit', 'Medium Fit', 'Low Fit', or 'No Fit'.\n\
        Follow this with a brief 1-2 sentence justification.\n\
        \n\
        **Journal Scope:**\n\
        {}\n\
        \n\
        **Paper Abstract:**\n\
        {}\n\
        \n\
        **Assessment:**\n",
        journal_scope, abstract_text
    )
}

/// Parse a free-form reply into a category and justification.
///
/// Tries, in order: a label on the first line, a label prefix on a single-line
/// reply, then falls back to `Unknown` with the whole reply as justification.
pub fn parse_fit_reply(reply: &str) -> FitAssessment {
    let reply = reply.trim();
    if reply.is_empty() {
        return FitAssessment::new(FitCategory::Unknown, EMPTY_REPLY);
    }

    if let Some((category_line, rest)) = reply.split_once('\n') {
        let category = FitCategory::from_label(&clean_category_line(category_line))
            .unwrap_or(FitCategory::Unknown);
        return FitAssessment::new(category, non_empty_or(rest.trim(), reply));
    }

    for category in FitCategory::CANONICAL {
        if let Some(rest) = reply.strip_prefix(category.label()) {
            let justification = rest.trim().trim_start_matches(':').trim();
            return FitAssessment::new(category, non_empty_or(justification, reply));
        }
    }

    FitAssessment::new(FitCategory::Unknown, reply)
}

fn clean_category_line(line: &str) -> String {
    line.replace(['*', '_'], "")
        .replace("Assessment:", "")
        .trim()
        .to_string()
}

fn non_empty_or<'s>(text: &'s str, fallback: &'s str) -> &'s str {
    if text.is_empty() { fallback } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_on_first_line() {
        let parsed = parse_fit_reply(
            "High Fit\nThe abstract aligns closely with the journal's stated aims.",
        );
        assert_eq!(parsed.category, FitCategory::High);
        assert_eq!(
            parsed.justification,
            "The abstract aligns closely with the journal's stated aims."
        );
    }

    #[test]
    fn test_markdown_and_assessment_label_are_stripped() {
        let parsed = parse_fit_reply("**Assessment:** Low Fit\r\nOnly tangential overlap.\nSecond line.");
        assert_eq!(parsed.category, FitCategory::Low);
        assert_eq!(parsed.justification, "Only tangential overlap.\nSecond line.");

        let parsed = parse_fit_reply("__No Fit__\nDifferent field entirely.");
        assert_eq!(parsed.category, FitCategory::NoFit);
    }

    #[test]
    fn test_unrecognised_first_line_is_unknown_but_keeps_remainder() {
        let parsed = parse_fit_reply("Fit: high\nClearly within scope.");
        assert_eq!(parsed.category, FitCategory::Unknown);
        assert_eq!(parsed.justification, "Clearly within scope.");

        let parsed = parse_fit_reply("High Fit, mostly\nClearly within scope.");
        assert_eq!(parsed.category, FitCategory::Unknown);
    }

    #[test]
    fn test_single_line_prefix_match() {
        let parsed = parse_fit_reply("Medium Fit: partially overlaps with the scope.");
        assert_eq!(parsed.category, FitCategory::Medium);
        assert_eq!(parsed.justification, "partially overlaps with the scope.");

        let parsed = parse_fit_reply("No Fit  ::  unrelated discipline");
        assert_eq!(parsed.category, FitCategory::NoFit);
        assert_eq!(parsed.justification, "unrelated discipline");
    }

    #[test]
    fn test_bare_label_keeps_reply_as_justification() {
        let parsed = parse_fit_reply("  Low Fit  ");
        assert_eq!(parsed.category, FitCategory::Low);
        assert_eq!(parsed.justification, "Low Fit");
    }

    #[test]
    fn test_unrecognised_single_line_is_unknown() {
        let parsed = parse_fit_reply("Somewhat relevant topic");
        assert_eq!(parsed.category, FitCategory::Unknown);
        assert_eq!(parsed.justification, "Somewhat relevant topic");

        // Emphasis is only stripped from a first line, not from single-line replies.
        let parsed = parse_fit_reply("**High Fit** strong match");
        assert_eq!(parsed.category, FitCategory::Unknown);
    }

    #[test]
    fn test_empty_reply_has_fallback_justification() {
        let parsed = parse_fit_reply("   \n  ");
        assert_eq!(parsed.category, FitCategory::Unknown);
        assert!(!parsed.justification.is_empty());
    }

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let prompt = build_fit_prompt("We study *graphene* ribbons.", "Materials science, 2D materials");
        assert!(prompt.contains("We study *graphene* ribbons."));
        assert!(prompt.contains("Materials science, 2D materials"));
        for label in ["'High Fit'", "'Medium Fit'", "'Low Fit'", "'No Fit'"] {
            assert!(prompt.contains(label));
        }
        let scope_at = prompt.find("**Journal Scope:**").unwrap();
        let abstract_at = prompt.find("**Paper Abstract:**").unwrap();
        assert!(scope_at < abstract_at);
    }
}
