//! Assessment layer for the journal fit checker
//!
//! Combines the completion-backed scope classifier with the formatting rule
//! engine, and maps the combined result onto levelled status lines for display.

mod classifier;
mod orchestrator;
mod report;


pub use classifier::{build_fit_prompt, parse_fit_reply, FitClassifier, DEFAULT_MAX_REPLY_TOKENS};
pub use orchestrator::AssessmentOrchestrator;
pub use report::{
    fit_level, missing_input_line, word_count_level, AssessmentReport, StatusLevel, StatusLine,
    MISSING_INPUT_MESSAGE,
};

// Re-export core types
pub use jfit_core::{Error, Result};
