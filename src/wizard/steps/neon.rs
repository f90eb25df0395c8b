//! Step 3: integrate the Neon database through Vercel.

use crate::error::Result;
use crate::state::WizardState;

use super::{StepContext, StepHandler};

/// Guided Neon integration; acknowledgement only, no fields captured.
pub struct NeonStep;

impl StepHandler for NeonStep {
    fn tag(&self) -> &'static str {
        "neon"
    }

    fn title(&self) -> &'static str {
        "Neon Database"
    }

    fn run(&self, ctx: &mut StepContext<'_>, state: &mut WizardState) -> Result<()> {
        let project = state.project_name.clone();

        ctx.ui
            .message("We'll set up your Neon database through Vercel's project dashboard.");
        ctx.ui.message("");
        ctx.ui.message(&format!(
            "1. In your Vercel dashboard, go to your project: {}",
            project
        ));
        ctx.ui
            .message("2. Open the 'Storage' tab and click 'Create Database'");
        ctx.ui.message("3. Select 'Neon'");
        ctx.ui
            .message("4. Create a new Neon account or link an existing one");
        ctx.ui.message(
            "5. Vercel automatically adds the POSTGRES_URL to your project",
        );

        ctx.ui.pause("Press Enter when you've created the Neon database")?;

        state.complete_service(self.tag());
        ctx.ui
            .success("Neon database configured - environment variables added automatically");

        Ok(())
    }
}
