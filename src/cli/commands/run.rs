//! The `run` command: the wizard itself.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::wizard::{Wizard, WizardOptions};

use super::{Command, CommandResult};

/// Runs the interactive setup wizard.
pub struct RunCommand {
    project_dir: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_dir: &Path, args: RunArgs) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let options = WizardOptions {
            deploy_domain: self.args.deploy_domain.clone(),
        };

        let mut wizard = Wizard::new(&self.project_dir, options, ui);
        wizard.run()?;

        Ok(CommandResult::success())
    }
}
