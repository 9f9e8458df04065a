//! Claude integration for the journal fit checker
//!
//! This crate provides the Anthropic Messages API implementation of the
//! `CompletionService` trait, plus the environment lookup that decides whether
//! the process starts with a configured or an unconfigured completion handle.

mod client;
mod config;


pub use client::ClaudeClient;
pub use config::ClaudeConfig;

// Re-export core types for convenience
pub use jfit_core::{
    CompletionHandle, CompletionRequest, CompletionResult, CompletionService, Error, Result,
};
