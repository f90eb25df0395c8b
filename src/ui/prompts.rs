//! Interactive prompts.

use console::Term;
use dialoguer::{Confirm, Input};

use crate::error::{OutfitterError, Result};

use super::{Prompt, PromptResult, PromptType};

/// Convert dialoguer errors to OutfitterError.
///
/// An interrupted read (Ctrl-C or Esc during a prompt) becomes
/// [`OutfitterError::Cancelled`] so the top level can exit with the
/// cancellation code while leaving saved progress on disk.
fn map_dialoguer_err(e: dialoguer::Error) -> OutfitterError {
    let io_err: std::io::Error = e.into();
    if io_err.kind() == std::io::ErrorKind::Interrupted {
        OutfitterError::Cancelled
    } else {
        OutfitterError::Io(io_err)
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_ref()
        .map(|s| s.to_lowercase() == "true" || s == "y" || s == "yes")
        .unwrap_or(true);

    let result = Confirm::new()
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let input = Input::<String>::new().with_prompt(&prompt.question);

    let result: String = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_on(term).map_err(map_dialoguer_err)?
    };

    Ok(PromptResult::String(result.trim().to_string()))
}

/// Block until the operator presses Enter.
pub fn pause_user(message: &str, term: &Term) -> Result<()> {
    Input::<String>::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_read_maps_to_cancelled() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "read interrupted");
        let err = map_dialoguer_err(dialoguer::Error::IO(io_err));
        assert!(err.is_cancelled());
    }

    #[test]
    fn other_io_errors_stay_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err = map_dialoguer_err(dialoguer::Error::IO(io_err));
        assert!(matches!(err, OutfitterError::Io(_)));
    }
}
