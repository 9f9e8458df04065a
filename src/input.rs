//! Loads the form fields from files (or stdin) into an `AssessmentInput`

use anyhow::{bail, Context, Result};
use jfit_core::AssessmentInput;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where each text field comes from; `-` means standard input
#[derive(Debug, Clone)]
pub struct InputSources {
    pub scope: PathBuf,
    pub abstract_text: PathBuf,
    pub full_text: PathBuf,
}

impl InputSources {
    fn paths(&self) -> [(&'static str, &Path); 3] {
        [
            ("journal scope", self.scope.as_path()),
            ("abstract", self.abstract_text.as_path()),
            ("full text", self.full_text.as_path()),
        ]
    }
}

/// Read every text field and combine it with the formatting settings
pub fn load_input(
    sources: &InputSources,
    max_word_count: &str,
    required_sections: &str,
) -> Result<AssessmentInput> {
    let stdin_fields = sources.paths().into_iter().filter(|(_, path)| is_stdin(path)).count();
    if stdin_fields > 1 {
        bail!("only one input can be read from stdin ('-')");
    }

    let [scope, abstract_text, full_text] = sources
        .paths()
        .map(|(field, path)| read_source(path).with_context(|| format!("reading {}", field)));

    Ok(AssessmentInput {
        journal_scope: scope?,
        abstract_text: abstract_text?,
        full_text: full_text?,
        max_word_count: max_word_count.to_string(),
        required_sections: required_sections.to_string(),
    })
}

/// Read a whole text source; `-` reads standard input
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
