//! The resumable step sequencer.
//!
//! [`Wizard`] drives the ordered step flow: load persisted progress, decide
//! resume-or-restart, collect the project name, execute each step through
//! its [`steps::StepHandler`], persisting after every one, and finally
//! assemble the env documents and clear the progress store.
//!
//! State is threaded explicitly: every handler and persistence call receives
//! the [`WizardState`] it operates on.

pub mod steps;

pub use steps::{StepContext, StepHandler, TOTAL_STEPS};

use std::path::PathBuf;

use crate::envfile;
use crate::error::Result;
use crate::state::{ProgressStore, WizardState};
use crate::ui::{Prompt, UserInterface};
use crate::validate::normalize_project_name;

use steps::handler_for;

/// Default domain suffix for derived deployment URLs.
///
/// The app URL and webhook endpoints are derived as
/// `https://<project>.<domain>`; Vercel's default is assumed unless the
/// operator overrides it with `--deploy-domain`.
pub const DEFAULT_DEPLOY_DOMAIN: &str = "vercel.app";

/// Session options for a wizard run.
#[derive(Debug, Clone)]
pub struct WizardOptions {
    /// Domain suffix used to derive the deployment and webhook URLs.
    pub deploy_domain: String,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            deploy_domain: DEFAULT_DEPLOY_DOMAIN.to_string(),
        }
    }
}

/// Interactive setup coordinator.
pub struct Wizard<'a> {
    store: ProgressStore,
    dir: PathBuf,
    options: WizardOptions,
    ui: &'a mut dyn UserInterface,
}

impl<'a> Wizard<'a> {
    /// Create a wizard rooted at the given project directory.
    pub fn new(
        dir: impl Into<PathBuf>,
        options: WizardOptions,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        let dir = dir.into();
        Self {
            store: ProgressStore::new(&dir),
            dir,
            options,
            ui,
        }
    }

    /// Run the wizard to completion.
    ///
    /// Returns the final accumulated state. Cancellation during any prompt
    /// propagates out with the last-saved state still on disk.
    pub fn run(&mut self) -> Result<WizardState> {
        self.show_banner();

        let mut state = self.startup_state()?;

        if state.project_name.is_empty() {
            self.collect_project_name(&mut state)?;
        }

        while state.current_step <= TOTAL_STEPS {
            let Some(handler) = handler_for(state.current_step) else {
                break;
            };

            tracing::debug!(step = state.current_step, tag = handler.tag(), "running step");
            self.ui
                .show_step(state.current_step, TOTAL_STEPS, handler.title());

            let mut ctx = StepContext {
                ui: &mut *self.ui,
                options: &self.options,
                dir: &self.dir,
            };
            handler.run(&mut ctx, &mut state)?;

            state.advance();
            state.touch();
            self.store.save(&state);

            debug_assert!(state.current_step <= TOTAL_STEPS + 1);
        }

        self.finish(&state)?;
        Ok(state)
    }

    fn show_banner(&mut self) {
        self.ui.show_header("Outfitter · guided infrastructure setup");
        for (i, handler) in steps::handlers().iter().enumerate() {
            self.ui
                .message(&format!("  {}. {}", i + 1, handler.title()));
        }
        self.ui
            .message("\nProgress is saved automatically, so you can resume if interrupted.");
    }

    /// Load persisted state and decide between resume and restart.
    fn startup_state(&mut self) -> Result<WizardState> {
        let saved = self.store.load();

        let Some(saved) = saved.filter(|s| s.has_progress()) else {
            // Nothing meaningful to resume; start clean.
            self.store.clear();
            return Ok(WizardState::new());
        };

        self.ui.warning(&format!(
            "Found previous setup in progress (step {} of {})",
            saved.current_step.min(TOTAL_STEPS),
            TOTAL_STEPS
        ));
        if !saved.project_name.is_empty() {
            self.ui.message(&format!("Project: {}", saved.project_name));
        }
        if !saved.completed_services.is_empty() {
            self.ui.message(&format!(
                "Completed: {}",
                saved.completed_services.join(", ")
            ));
        }

        let resume = self
            .ui
            .prompt(&Prompt::confirm("resume", "Resume previous setup?").with_default("yes"))?
            .as_bool()
            .unwrap_or(true);

        if resume {
            self.ui.message(&format!(
                "Resuming from step {}",
                saved.current_step.min(TOTAL_STEPS)
            ));
            Ok(saved)
        } else {
            self.ui.message("Starting fresh setup...");
            self.store.clear();
            Ok(WizardState::new())
        }
    }

    /// Block until a valid kebab-case project name is entered, then persist.
    fn collect_project_name(&mut self, state: &mut WizardState) -> Result<()> {
        self.ui.message("Let's start by choosing a project name!");
        self.ui.message("");
        self.ui.message("Project name format (kebab-case):");
        self.ui
            .message("  - lowercase letters, numbers, and hyphens only");
        self.ui
            .message("  - examples: open-idealista, my-awesome-app, startup-mvp");
        self.ui
            .message("  - this becomes your repository and hosting project name");

        let prompt = Prompt::input("project_name", "Enter your project name (kebab-case)");
        loop {
            let raw = self.ui.prompt(&prompt)?.as_string();
            if let Some(name) = normalize_project_name(&raw) {
                self.ui.success(&format!("Project name: {}", name));
                state.project_name = name;
                break;
            }
            self.ui.error(
                "Please enter a valid project name in kebab-case format (e.g. 'open-idealista')",
            );
        }

        state.touch();
        self.store.save(state);
        Ok(())
    }

    /// Terminal transition: render both env documents, then clear progress.
    ///
    /// The store is cleared only after both documents are written, so a
    /// failed assembly leaves the state resumable.
    fn finish(&mut self, state: &WizardState) -> Result<()> {
        self.ui.message("");
        self.ui
            .message("Generating environment files for local development and deployment...");
        envfile::write_env_files(state, &self.dir)?;
        self.ui.success(&format!(
            "{} file generated for local development",
            envfile::LOCAL_ENV_FILE
        ));

        self.show_summary(state);
        self.store.clear();
        Ok(())
    }

    fn show_summary(&mut self, state: &WizardState) {
        self.ui.show_header("Setup complete!");
        self.ui
            .message(&format!("Project name: {}", state.project_name));
        self.ui.message("");

        if let Some(repo_url) = state.secret("github_repo_url") {
            self.ui
                .success(&format!("GitHub repository: {}", repo_url));
        }
        if let Some(record) = state.services.get("vercel") {
            self.ui.success(&format!("Vercel project: {}", record.url));
            self.ui.success("Blob storage: configured automatically");
        }
        if state.service_completed("neon") {
            self.ui.success("Neon database: integrated through Vercel");
        }
        if let Some(record) = state.services.get("polar") {
            self.ui.success(&format!("Polar billing: {}", record.url));
        }
        if state.service_completed("clerk") {
            self.ui.success("Clerk authentication: application created");
        }
        if state.service_completed("vercel-env") {
            self.ui
                .success("Vercel environment variables: all variables configured");
        }

        self.ui.message("");
        self.ui.message("Next steps:");
        if let Some(repo_url) = state.secret("github_repo_url") {
            self.ui
                .message(&format!("  1. Clone your repository: git clone {}.git", repo_url));
        }
        self.ui.message(&format!(
            "  2. Copy {} and {} into the checkout",
            envfile::LOCAL_ENV_FILE,
            envfile::PROD_ENV_FILE
        ));
        self.ui
            .message("  3. Start the local database: docker-compose up -d postgres");
        self.ui
            .message("  4. Install dependencies and run: npm install && npm run dev");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    /// Configure responses for a complete six-step run.
    fn configure_full_run(ui: &mut MockUI, project: &str) {
        ui.set_prompt_response("project_name", project);
        ui.set_prompt_response(
            "repo_url",
            &format!("https://github.com/alice/{}", project),
        );
        ui.set_prompt_response(
            "vercel_dashboard_url",
            &format!("https://vercel.com/alice/{}", project),
        );
        ui.set_prompt_response("polar_sandbox", "yes");
        ui.set_prompt_response("polar_org_slug", "alice-org");
        ui.set_prompt_response("polar_pro_product_id", "prod_pro");
        ui.set_prompt_response("polar_business_product_id", "prod_biz");
        ui.set_prompt_response("polar_access_token", "polar_oat_token");
        ui.set_prompt_response("polar_webhook_secret", "polar_whs");
        ui.set_prompt_response("clerk_publishable_key", "pk_test_pub");
        ui.set_prompt_response("clerk_secret_key", "sk_test_sec");
        ui.set_prompt_response("clerk_webhook_secret", "whsec_hook");
    }

    #[test]
    fn fresh_run_completes_all_steps_and_clears_store() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        configure_full_run(&mut ui, "my-cool-app");

        let state = Wizard::new(temp.path(), WizardOptions::default(), &mut ui)
            .run()
            .unwrap();

        assert_eq!(state.current_step, TOTAL_STEPS + 1);
        assert_eq!(
            state.completed_services,
            ["github", "vercel", "neon", "polar", "clerk", "vercel-env"]
        );
        assert!(temp.path().join(envfile::LOCAL_ENV_FILE).exists());
        assert!(temp.path().join(envfile::PROD_ENV_FILE).exists());
        assert!(
            !ProgressStore::new(temp.path()).exists(),
            "progress should be cleared after completion"
        );

        // Every step heading was shown in order.
        let shown: Vec<u32> = ui.steps().iter().map(|(c, _, _)| *c).collect();
        assert_eq!(shown, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn project_name_is_normalized_and_reprompted() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        configure_full_run(&mut ui, "my-cool-app");
        ui.queue_prompt_responses("project_name", vec!["!!!", "My Cool App!!"]);

        let state = Wizard::new(temp.path(), WizardOptions::default(), &mut ui)
            .run()
            .unwrap();

        assert_eq!(state.project_name, "my-cool-app");
        assert!(ui.has_error("kebab-case"));
    }

    #[test]
    fn resume_accepted_skips_completed_steps() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());

        // Steps 1-4 already done in a previous invocation.
        let mut saved = WizardState::new();
        saved.project_name = "my-cool-app".into();
        saved.current_step = 5;
        for tag in ["github", "vercel", "neon", "polar"] {
            saved.complete_service(tag);
        }
        saved.set_secret("github_repo_url", "https://github.com/alice/my-cool-app");
        store.try_save(&saved).unwrap();

        let mut ui = MockUI::new();
        ui.set_prompt_response("resume", "yes");
        ui.set_prompt_response("clerk_publishable_key", "pk_test_pub");
        ui.set_prompt_response("clerk_secret_key", "sk_test_sec");
        ui.set_prompt_response("clerk_webhook_secret", "whsec_hook");

        let state = Wizard::new(temp.path(), WizardOptions::default(), &mut ui)
            .run()
            .unwrap();

        assert_eq!(state.current_step, TOTAL_STEPS + 1);
        assert!(!ui.prompts_shown().contains(&"repo_url".to_string()));
        assert!(!ui.prompts_shown().contains(&"project_name".to_string()));
        assert!(state.service_completed("clerk"));
        assert!(!store.exists());
    }

    #[test]
    fn resume_rejected_restarts_from_step_one() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());

        let mut saved = WizardState::new();
        saved.project_name = "old-project".into();
        saved.current_step = 3;
        saved.complete_service("github");
        saved.complete_service("vercel");
        store.try_save(&saved).unwrap();

        let mut ui = MockUI::new();
        configure_full_run(&mut ui, "fresh-app");
        ui.set_prompt_response("resume", "no");

        let state = Wizard::new(temp.path(), WizardOptions::default(), &mut ui)
            .run()
            .unwrap();

        assert_eq!(state.project_name, "fresh-app");
        assert!(ui.prompts_shown().contains(&"repo_url".to_string()));
        assert_eq!(state.completed_services.len(), 6);
    }

    #[test]
    fn prompt_failure_mid_flow_leaves_saved_progress() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        // Only enough responses for step 1; step 2's prompt then fails the
        // way an interrupted session would.
        ui.set_prompt_response("project_name", "my-cool-app");
        ui.set_prompt_response("repo_url", "https://github.com/alice/my-cool-app");

        let result = Wizard::new(temp.path(), WizardOptions::default(), &mut ui).run();
        assert!(result.is_err());

        let saved = ProgressStore::new(temp.path())
            .load()
            .expect("progress from step 1 should remain on disk");
        assert_eq!(saved.current_step, 2);
        assert!(saved.service_completed("github"));
    }

    #[test]
    fn failed_assembly_keeps_store_resumable() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        configure_full_run(&mut ui, "my-cool-app");

        // A directory squatting on the .env path makes the local render
        // unwritable while everything else works.
        std::fs::create_dir(temp.path().join(envfile::LOCAL_ENV_FILE)).unwrap();

        let result = Wizard::new(temp.path(), WizardOptions::default(), &mut ui).run();
        assert!(result.is_err());

        let saved = ProgressStore::new(temp.path())
            .load()
            .expect("store must not be cleared when assembly fails");
        assert_eq!(saved.current_step, TOTAL_STEPS + 1);
    }

    #[test]
    fn saved_state_round_trips_between_every_step() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());
        let mut ui = MockUI::new();
        configure_full_run(&mut ui, "my-cool-app");

        Wizard::new(temp.path(), WizardOptions::default(), &mut ui)
            .run()
            .unwrap();

        // After completion the store is gone; a second run starts fresh and
        // prompts for the project name again.
        assert!(store.load().is_none());
        let mut ui2 = MockUI::new();
        configure_full_run(&mut ui2, "second-app");
        let state = Wizard::new(temp.path(), WizardOptions::default(), &mut ui2)
            .run()
            .unwrap();
        assert_eq!(state.project_name, "second-app");
    }
}
