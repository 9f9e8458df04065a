mod config;
mod input;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

use config::AppConfig;
use input::InputSources;
use jfit_assess::{missing_input_line, AssessmentOrchestrator, FitClassifier};
use jfit_claude::ClaudeClient;
use jfit_core::Error;

#[derive(Parser)]
#[command(name = "jfit")]
#[command(about = "Check a manuscript against a journal's scope and basic formatting rules", long_about = None)]
struct Cli {
    /// File holding the journal's scope description ('-' for stdin)
    #[arg(long, value_name = "FILE")]
    scope: PathBuf,

    /// File holding the manuscript abstract ('-' for stdin)
    #[arg(long = "abstract", value_name = "FILE")]
    abstract_text: PathBuf,

    /// File holding the manuscript full text ('-' for stdin)
    #[arg(long, value_name = "FILE")]
    full_text: PathBuf,

    /// Maximum word count (overrides JFIT_MAX_WORD_COUNT)
    #[arg(long, value_name = "N")]
    max_words: Option<String>,

    /// Comma-separated required section keywords (overrides JFIT_REQUIRED_SECTIONS)
    #[arg(long, value_name = "LIST")]
    sections: Option<String>,

    /// Print the combined result as JSON instead of status lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    logging::init_tracing(&config.log_level);
    debug!(config = %config.summary(), "configuration loaded");

    // Built once; read-only for the rest of the run
    let handle = ClaudeClient::handle_from_env();

    let sources = InputSources {
        scope: cli.scope,
        abstract_text: cli.abstract_text,
        full_text: cli.full_text,
    };
    let input = input::load_input(
        &sources,
        cli.max_words.as_deref().unwrap_or(&config.max_word_count),
        cli.sections.as_deref().unwrap_or(&config.required_sections),
    )?;

    let classifier = FitClassifier::new(&handle).with_max_tokens(config.max_reply_tokens);
    let orchestrator = AssessmentOrchestrator::with_classifier(classifier);

    if !cli.json {
        ui::display_banner(&handle);
    }

    match orchestrator.assess(&input).await {
        Ok(result) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                ui::print_report(&result, &handle);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::MissingField(field)) => {
            warn!(field = %field, "assessment rejected: missing required field");
            eprintln!("{}", missing_input_line().render());
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}
