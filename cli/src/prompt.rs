//! Terminal prompts.

use std::io;

use dialoguer::{Confirm, Input};

/// Source of interactive answers for the generate flow.
pub trait Prompter {
    /// Ask for a line of text. Blank answers become `None`.
    fn text(&self, prompt: &str) -> io::Result<Option<String>>;

    /// Ask a yes/no question. Defaults to no.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Prompts on the attached terminal with `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&self, prompt: &str) -> io::Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(non_blank(&answer))
    }

    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!("prompt failed: {}", e);
                false
            }
        }
    }
}

/// Trim an answer, mapping blank input to `None`.
pub fn non_blank(answer: &str) -> Option<String> {
    let answer = answer.trim();
    (!answer.is_empty()).then(|| answer.to_string())
}
