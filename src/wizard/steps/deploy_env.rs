//! Step 6: push environment variables to the hosting project.

use crate::envfile;
use crate::error::Result;
use crate::state::WizardState;

use super::{StepContext, StepHandler};

/// Writes `.env.prod` and walks the operator through copying it to Vercel.
pub struct DeployEnvStep;

impl StepHandler for DeployEnvStep {
    fn tag(&self) -> &'static str {
        "vercel-env"
    }

    fn title(&self) -> &'static str {
        "Vercel Environment Variables"
    }

    fn run(&self, ctx: &mut StepContext<'_>, state: &mut WizardState) -> Result<()> {
        let project = state.project_name.clone();

        ctx.ui.message(
            "We'll generate a .env.prod file with all your environment variables.",
        );
        ctx.ui
            .message("You can then copy and paste them into your Vercel project settings.");

        envfile::write_production_env(state, ctx.dir)?;
        ctx.ui
            .success(&format!("{} file generated", envfile::PROD_ENV_FILE));

        ctx.ui.message("");
        ctx.ui.message("Add the variables to Vercel:");
        ctx.ui.message(&format!(
            "1. Go to https://vercel.com and open your project: {}",
            project
        ));
        ctx.ui
            .message("2. Open 'Settings' > 'Environment Variables'");
        ctx.ui.message(&format!(
            "3. For each line in {}, add the name and value with \
             Environment: Production, Preview, Development",
            envfile::PROD_ENV_FILE
        ));
        ctx.ui.message(
            "POSTGRES_URL and BLOB_READ_WRITE_TOKEN are already set by Vercel - \
             skip them if they exist",
        );

        ctx.ui
            .pause("Press Enter when you've added all environment variables to Vercel")?;

        state.complete_service(self.tag());
        ctx.ui.success("Vercel environment variables configured!");
        ctx.ui.success("Your deployment should now work correctly!");

        Ok(())
    }
}
