//! Non-interactive UI for CI/headless environments.
//!
//! Prompts resolve from `OUTFITTER_PROMPT_<KEY>` environment variables, then
//! the prompt's default; with neither, prompting is a hard error since the
//! wizard cannot block on a terminal that is not there.

use std::collections::HashMap;

use crate::error::{OutfitterError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("OUTFITTER_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn resolve(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("OUTFITTER_PROMPT_{}", prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .cloned()
            .or_else(|| prompt.default.clone())
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_step(&mut self, current: u32, total: u32, title: &str) {
        println!("\n[{}/{}] {}", current, total, title);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let value = self
            .resolve(prompt)
            .ok_or_else(|| OutfitterError::NonInteractive {
                prompt: prompt.key.clone(),
            })?;

        match prompt.prompt_type {
            PromptType::Confirm => {
                let val = matches!(value.as_str(), "true" | "yes" | "y" | "1");
                Ok(PromptResult::Bool(val))
            }
            PromptType::Input => Ok(PromptResult::String(value)),
        }
    }

    fn pause(&mut self, _message: &str) -> Result<()> {
        // Nothing to wait for without an operator.
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
