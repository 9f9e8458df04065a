//! Assessment orchestration: validate, run both checks, combine

use jfit_core::{
    AssessmentInput, CombinedResult, CompletionHandle, Error, FormatRuleEngine, Result,
};
use tracing::info;

use crate::classifier::FitClassifier;

/// Runs one complete assessment per call. Holds no per-request state.
pub struct AssessmentOrchestrator<'a> {
    classifier: FitClassifier<'a>,
    rules: FormatRuleEngine,
}

impl<'a> AssessmentOrchestrator<'a> {
    pub fn new(handle: &'a CompletionHandle) -> Self {
        Self::with_classifier(FitClassifier::new(handle))
    }

    pub fn with_classifier(classifier: FitClassifier<'a>) -> Self {
        Self {
            classifier,
            rules: FormatRuleEngine::new(),
        }
    }

    /// Reject input whose scope, abstract or full text is blank
    pub fn validate(input: &AssessmentInput) -> Result<()> {
        for (field, value) in input.required_fields() {
            if value.trim().is_empty() {
                return Err(Error::MissingField(field.to_string()));
            }
        }
        Ok(())
    }

    /// Validate, then run the formatting rules and the scope classifier.
    ///
    /// Both results are always returned together; a classifier `Error` does
    /// not suppress the formatting result.
    pub async fn assess(&self, input: &AssessmentInput) -> Result<CombinedResult> {
        Self::validate(input)?;

        let format = self.rules.check_formatting(
            &input.full_text,
            &input.max_word_count,
            &input.required_sections,
        );

        let fit = self
            .classifier
            .classify_fit(&input.abstract_text, &input.journal_scope)
            .await;

        info!(
            category = %fit.category,
            word_count = format.word_count,
            word_count_status = %format.word_count_status,
            sections_missing = format.sections_missing.len(),
            "assessment complete"
        );

        Ok(CombinedResult { fit, format })
    }
}
