//! The provisioning steps, in flow order.
//!
//! Each step implements [`StepHandler`]: present instructions, collect
//! validated input (re-prompting until it validates), and record the
//! results on [`WizardState`]. How many fields a step captures is the
//! step's own concern; the sequencer only cares about completion.

mod clerk;
mod deploy_env;
mod github;
mod neon;
mod polar;
mod vercel;

pub use clerk::ClerkStep;
pub use deploy_env::DeployEnvStep;
pub use github::{GithubStep, TEMPLATE_REPO_URL};
pub use neon::NeonStep;
pub use polar::PolarStep;
pub use vercel::VercelStep;

use std::path::Path;

use crate::error::Result;
use crate::state::WizardState;
use crate::ui::{Prompt, UserInterface};

use super::WizardOptions;

/// Number of steps in the flow.
pub const TOTAL_STEPS: u32 = 6;

/// Everything a step needs besides the state itself.
pub struct StepContext<'a> {
    /// Presentation collaborator; receives already-validated data only.
    pub ui: &'a mut dyn UserInterface,
    /// Session options (deploy domain and friends).
    pub options: &'a WizardOptions,
    /// Directory the wizard is provisioning (env files land here).
    pub dir: &'a Path,
}

/// A single unit of the sequential wizard flow.
pub trait StepHandler: Sync {
    /// Tag appended to `completed_services` when the step finishes.
    fn tag(&self) -> &'static str;

    /// Human-readable step title.
    fn title(&self) -> &'static str;

    /// Execute the step against the accumulated state.
    fn run(&self, ctx: &mut StepContext<'_>, state: &mut WizardState) -> Result<()>;
}

/// Step registry in flow order.
pub fn handlers() -> [&'static dyn StepHandler; TOTAL_STEPS as usize] {
    [
        &GithubStep,
        &VercelStep,
        &NeonStep,
        &PolarStep,
        &ClerkStep,
        &DeployEnvStep,
    ]
}

/// Look up the handler for a 1-indexed step number.
pub fn handler_for(step: u32) -> Option<&'static dyn StepHandler> {
    let index = step.checked_sub(1)? as usize;
    handlers().get(index).copied()
}

/// Prompt until `accept` produces a value, showing `error` on each reject.
///
/// The human is the retry loop: there is no attempt limit.
pub(crate) fn prompt_validated(
    ui: &mut dyn UserInterface,
    prompt: &Prompt,
    error: &str,
    accept: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    loop {
        let raw = ui.prompt(prompt)?.as_string();
        if let Some(value) = accept(&raw) {
            return Ok(value);
        }
        ui.error(error);
    }
}

/// Prompt until a non-empty value is entered.
pub(crate) fn prompt_nonempty(
    ui: &mut dyn UserInterface,
    prompt: &Prompt,
    error: &str,
) -> Result<String> {
    prompt_validated(ui, prompt, error, |raw| {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
