//! Step 2: create the Vercel project and Blob storage.

use crate::error::Result;
use crate::state::{ServiceRecord, WizardState};
use crate::ui::Prompt;

use super::{prompt_validated, StepContext, StepHandler};

/// Guided Vercel project import; derives the deployment URL.
pub struct VercelStep;

impl StepHandler for VercelStep {
    fn tag(&self) -> &'static str {
        "vercel"
    }

    fn title(&self) -> &'static str {
        "Vercel Project"
    }

    fn run(&self, ctx: &mut StepContext<'_>, state: &mut WizardState) -> Result<()> {
        let project = state.project_name.clone();

        ctx.ui
            .message("We'll guide you through creating your Vercel project.");
        ctx.ui.message("");
        ctx.ui.message("1. Go to: https://vercel.com/new");
        ctx.ui
            .message("2. Click 'Import Git Repository' and connect GitHub if needed");
        ctx.ui.message(&format!(
            "3. Find your repository '{}' and click 'Import'",
            project
        ));
        ctx.ui.message(&format!(
            "4. Set the project name to '{}' and leave other settings as default",
            project
        ));
        ctx.ui.message("5. Click 'Deploy'");
        ctx.ui.warning(
            "The first deployment will fail with 'POSTGRES_URL environment variable \
             is not set' - this is normal; the database comes later",
        );

        ctx.ui
            .pause("Press Enter when the deployment has finished (even if failed)")?;

        ctx.ui
            .message("Now we need your Vercel project dashboard URL:");
        ctx.ui
            .message("Copy it from your browser address bar on the project page.");

        prompt_validated(
            ctx.ui,
            &Prompt::input(
                "vercel_dashboard_url",
                "Enter your Vercel project dashboard URL",
            ),
            "Please enter a valid Vercel dashboard URL containing your project name",
            |raw| {
                let trimmed = raw.trim();
                (trimmed.starts_with("https://vercel.com/") && trimmed.contains(project.as_str()))
                    .then(|| trimmed.to_string())
            },
        )?;

        let project_url = format!("https://{}.{}", project, ctx.options.deploy_domain);
        ctx.ui.message(&format!(
            "Your app URL will be: {} (after successful redeploy)",
            project_url
        ));

        ctx.ui.message("");
        ctx.ui.message("Set up Blob storage:");
        ctx.ui
            .message("1. In your project dashboard, open the 'Storage' tab");
        ctx.ui
            .message("2. Click 'Create Database' and select 'Blob'");
        ctx.ui
            .message(&format!("3. Name it '{}-blob' and click 'Create'", project));
        ctx.ui.message(
            "4. Vercel automatically adds the BLOB_READ_WRITE_TOKEN to your project",
        );

        ctx.ui.pause("Press Enter when you've created the Blob storage")?;

        let mut record = ServiceRecord {
            name: "Vercel Project".into(),
            url: project_url.clone(),
            ..Default::default()
        };
        record
            .credentials
            .insert("project_url".into(), project_url.clone());
        state.insert_service(self.tag(), record);
        state.complete_service(self.tag());

        ctx.ui
            .success(&format!("Vercel project configured: {}", project_url));
        ctx.ui
            .success("Blob storage configured - environment variables added automatically");

        Ok(())
    }
}
