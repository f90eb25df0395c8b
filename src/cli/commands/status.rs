//! The `status` command: show saved progress without mutating it.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::state::ProgressStore;
use crate::ui::UserInterface;
use crate::wizard::TOTAL_STEPS;

use super::{Command, CommandResult};

/// Shows the saved wizard progress.
pub struct StatusCommand {
    project_dir: PathBuf,
    #[allow(dead_code)]
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_dir: &Path, args: StatusArgs) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = ProgressStore::new(&self.project_dir);

        let Some(state) = store.load() else {
            ui.message("No setup in progress.");
            return Ok(CommandResult::success());
        };

        ui.show_header("Setup in progress");
        if !state.project_name.is_empty() {
            ui.message(&format!("Project: {}", state.project_name));
        }
        ui.message(&format!(
            "Next step: {} of {}",
            state.current_step.min(TOTAL_STEPS),
            TOTAL_STEPS
        ));
        if !state.completed_services.is_empty() {
            ui.message(&format!(
                "Completed: {}",
                state.completed_services.join(", ")
            ));
        }
        if let Some(saved_at) = state.saved_at {
            ui.message(&format!(
                "Last saved: {}",
                saved_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        ui.message("");
        ui.message("Run `outfitter` to continue.");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WizardState;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn reports_absence_of_progress() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let cmd = StatusCommand::new(temp.path(), StatusArgs {});
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No setup in progress"));
    }

    #[test]
    fn reports_saved_progress_fields() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());

        let mut state = WizardState::new();
        state.project_name = "my-cool-app".into();
        state.current_step = 3;
        state.complete_service("github");
        state.complete_service("vercel");
        state.touch();
        store.try_save(&state).unwrap();

        let mut ui = MockUI::new();
        let cmd = StatusCommand::new(temp.path(), StatusArgs {});
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("my-cool-app"));
        assert!(ui.has_message("Next step: 3 of 6"));
        assert!(ui.has_message("github, vercel"));
        assert!(ui.has_message("Last saved:"));

        // Status never mutates saved progress.
        assert!(store.exists());
    }
}
