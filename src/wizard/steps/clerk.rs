//! Step 5: create the Clerk authentication application.

use crate::error::Result;
use crate::state::WizardState;
use crate::ui::Prompt;
use crate::validate::has_known_prefix;

use super::{prompt_validated, StepContext, StepHandler};

const PUBLISHABLE_PREFIXES: [&str; 2] = ["pk_test_", "pk_live_"];
const SECRET_PREFIXES: [&str; 2] = ["sk_test_", "sk_live_"];
const WEBHOOK_PREFIXES: [&str; 1] = ["whsec_"];

/// Guided Clerk application setup; captures the three Clerk secrets.
pub struct ClerkStep;

impl ClerkStep {
    fn prompt_prefixed(
        ctx: &mut StepContext<'_>,
        key: &str,
        question: &str,
        prefixes: &'static [&'static str],
        error: &str,
    ) -> Result<String> {
        prompt_validated(ctx.ui, &Prompt::input(key, question), error, |raw| {
            let trimmed = raw.trim();
            has_known_prefix(trimmed, prefixes).then(|| trimmed.to_string())
        })
    }
}

impl StepHandler for ClerkStep {
    fn tag(&self) -> &'static str {
        "clerk"
    }

    fn title(&self) -> &'static str {
        "Clerk Authentication"
    }

    fn run(&self, ctx: &mut StepContext<'_>, state: &mut WizardState) -> Result<()> {
        let project = state.project_name.clone();

        ctx.ui
            .message("We'll guide you through creating your Clerk authentication app.");
        ctx.ui.message("");
        ctx.ui.message("1. Go to: https://dashboard.clerk.com");
        ctx.ui.message(&format!(
            "2. Click 'Add application' and name it: {}",
            project
        ));
        ctx.ui.message("3. Choose 'Next.js' as your framework");
        ctx.ui
            .message("4. Click 'Create application' and copy both API keys");

        ctx.ui.pause("Press Enter when you've created the Clerk application")?;

        let publishable_key = Self::prompt_prefixed(
            ctx,
            "clerk_publishable_key",
            "Enter Clerk Publishable Key (pk_test_...)",
            &PUBLISHABLE_PREFIXES,
            "Invalid publishable key format",
        )?;

        let secret_key = Self::prompt_prefixed(
            ctx,
            "clerk_secret_key",
            "Enter Clerk Secret Key (sk_test_...)",
            &SECRET_PREFIXES,
            "Invalid secret key format",
        )?;

        state.set_secret("clerk_publishable_key", &publishable_key);
        state.set_secret("clerk_secret_key", &secret_key);

        let fallback_app_url = format!("https://your-app.{}", ctx.options.deploy_domain);
        let app_url = state
            .service_credential("vercel", "project_url")
            .unwrap_or(fallback_app_url.as_str())
            .to_string();

        ctx.ui.message("");
        ctx.ui
            .message("Set up the user-sync webhook (Webhooks > Add Endpoint):");
        ctx.ui
            .message(&format!("Endpoint URL: {}/api/clerk/webhook", app_url));
        ctx.ui
            .message("Events: user.created, user.updated, user.deleted");
        ctx.ui
            .message("Then copy the Signing Secret (starts with 'whsec_')");

        let webhook_secret = Self::prompt_prefixed(
            ctx,
            "clerk_webhook_secret",
            "Enter Clerk Webhook Signing Secret",
            &WEBHOOK_PREFIXES,
            "Invalid webhook secret format. Secret should start with 'whsec_'",
        )?;
        state.set_secret("clerk_webhook_secret", &webhook_secret);

        state.complete_service(self.tag());

        ctx.ui.success("Clerk authentication configured!");
        ctx.ui.success("Webhook configured for user synchronization!");
        ctx.ui.message("");
        ctx.ui.message(
            "Optional, after deployment: enable Google OAuth under \
             'User & Authentication > Social Connections'",
        );

        Ok(())
    }
}
