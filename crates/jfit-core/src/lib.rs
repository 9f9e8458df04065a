//! Core traits and types for the journal fit checker
//!
//! This crate defines the completion-service seam, the domain types that flow
//! between the classifier, the formatting rules and the presentation layer,
//! and the deterministic formatting rule engine itself.

pub mod completion;
pub mod error;
pub mod formatting;
pub mod types;


pub use completion::{CompletionHandle, CompletionRequest, CompletionResult, CompletionService};
pub use error::{Error, Result};
pub use formatting::{check_formatting, parse_required_sections, FormatRuleEngine};
pub use types::*;
