//! Step 1: fork the template repository on GitHub.

use crate::error::Result;
use crate::state::WizardState;
use crate::ui::Prompt;
use crate::validate::is_valid_repo_url;

use super::{prompt_validated, StepContext, StepHandler};

/// Upstream template repository the operator forks.
pub const TEMPLATE_REPO_URL: &str = "https://github.com/outfitter-cli/saas-template";

/// Guided GitHub fork; captures the forked repository URL.
pub struct GithubStep;

impl StepHandler for GithubStep {
    fn tag(&self) -> &'static str {
        "github"
    }

    fn title(&self) -> &'static str {
        "GitHub Repository"
    }

    fn run(&self, ctx: &mut StepContext<'_>, state: &mut WizardState) -> Result<()> {
        let project = state.project_name.clone();

        ctx.ui
            .message("We'll guide you through forking the template repository.");
        ctx.ui.message("");
        ctx.ui
            .message(&format!("1. Open this URL in your browser: {}", TEMPLATE_REPO_URL));
        ctx.ui
            .message("2. Click the 'Fork' button in the top-right corner");
        ctx.ui.message(&format!(
            "3. Important: change the repository name to: {}",
            project
        ));
        ctx.ui.message("4. Click 'Create fork' and wait for it to complete");

        ctx.ui.pause("Press Enter when you've completed the fork")?;

        let repo_url = prompt_validated(
            ctx.ui,
            &Prompt::input("repo_url", "Enter your forked repository URL"),
            "Invalid repository URL or name doesn't match project name",
            |raw| {
                let trimmed = raw.trim();
                is_valid_repo_url(trimmed, &project).then(|| trimmed.to_string())
            },
        )?;

        state.set_secret("github_repo_url", &repo_url);
        state.complete_service(self.tag());
        ctx.ui
            .success(&format!("GitHub repository configured: {}", repo_url));

        Ok(())
    }
}
