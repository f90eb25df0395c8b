//! The `reset` command: discard saved progress.

use std::path::{Path, PathBuf};

use crate::cli::args::ResetArgs;
use crate::error::Result;
use crate::state::ProgressStore;
use crate::ui::{Prompt, UserInterface};

use super::{Command, CommandResult};

/// Clears the saved wizard progress after confirmation.
pub struct ResetCommand {
    project_dir: PathBuf,
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(project_dir: &Path, args: ResetArgs) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = ProgressStore::new(&self.project_dir);

        if !store.exists() {
            ui.message("No saved progress to clear.");
            return Ok(CommandResult::success());
        }

        if !self.args.force {
            let confirmed = ui
                .prompt(
                    &Prompt::confirm("reset", "Discard saved setup progress?").with_default("no"),
                )?
                .as_bool()
                .unwrap_or(false);
            if !confirmed {
                ui.message("Keeping saved progress.");
                return Ok(CommandResult::success());
            }
        }

        store.clear();
        ui.success("Saved progress cleared.");
        Ok(CommandResult::success())
    }
}
