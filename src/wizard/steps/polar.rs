//! Step 4: set up Polar billing.
//!
//! The heaviest step of the flow: environment choice, organization slug,
//! two product ids, the API token, and the webhook signing secret, plus the
//! derived billing webhook endpoint.

use crate::error::Result;
use crate::state::{ServiceRecord, WizardState};
use crate::ui::Prompt;
use crate::validate::has_known_prefix;

use super::{prompt_nonempty, prompt_validated, StepContext, StepHandler};

/// Required prefix for Polar API tokens.
const TOKEN_PREFIXES: [&str; 1] = ["polar_oat_"];

/// Guided Polar organization, products, token, and webhook setup.
pub struct PolarStep;

impl StepHandler for PolarStep {
    fn tag(&self) -> &'static str {
        "polar"
    }

    fn title(&self) -> &'static str {
        "Polar Billing"
    }

    fn run(&self, ctx: &mut StepContext<'_>, state: &mut WizardState) -> Result<()> {
        let project = state.project_name.clone();

        ctx.ui
            .message("We'll guide you through setting up Polar billing products.");

        let sandbox = ctx
            .ui
            .prompt(
                &Prompt::confirm("polar_sandbox", "Use sandbox environment for testing?")
                    .with_default("yes"),
            )?
            .as_bool()
            .unwrap_or(true);

        let (environment, dashboard_url) = if sandbox {
            ("sandbox", "https://sandbox.polar.sh/dashboard")
        } else {
            ("production", "https://polar.sh/dashboard")
        };

        ctx.ui.message("");
        ctx.ui
            .message("Create a Polar organization (if you don't have one):");
        ctx.ui.message(&format!("1. Go to: {}", dashboard_url));
        ctx.ui.message(&format!(
            "2. Click 'Create Organization' and name it: {}-org",
            project
        ));
        ctx.ui
            .message("3. An existing organization works just as well");

        ctx.ui.pause("Press Enter when you have an organization ready")?;

        ctx.ui.message("");
        ctx.ui.message("Create two subscription products:");
        ctx.ui
            .message("Pro Plan - $20.00 USD per month, professional features");

        ctx.ui.pause("Press Enter when you've created the Pro Plan")?;

        ctx.ui
            .message("Business Plan - $200.00 USD per month, premium features and support");

        ctx.ui.pause("Press Enter when you've created the Business Plan")?;

        let org_slug = prompt_nonempty(
            ctx.ui,
            &Prompt::input(
                "polar_org_slug",
                "Enter your organization slug (from the URL)",
            ),
            "Please enter your organization slug",
        )?;

        ctx.ui.message("");
        ctx.ui
            .message("Copy each Product ID from the product's page or URL:");

        let pro_product_id = prompt_nonempty(
            ctx.ui,
            &Prompt::input("polar_pro_product_id", "Enter Pro Plan Product ID"),
            "Please enter the Pro Plan Product ID",
        )?;

        let business_product_id = prompt_nonempty(
            ctx.ui,
            &Prompt::input("polar_business_product_id", "Enter Business Plan Product ID"),
            "Please enter the Business Plan Product ID",
        )?;

        let org_dashboard_url = format!("{}/{}", dashboard_url, org_slug);
        let billing_webhook_url = format!(
            "https://{}.{}/api/billing/webhook",
            project, ctx.options.deploy_domain
        );

        let mut record = ServiceRecord {
            name: "Polar Billing".into(),
            url: org_dashboard_url.clone(),
            ..Default::default()
        };
        record
            .credentials
            .insert("organization_slug".into(), org_slug.clone());
        record
            .credentials
            .insert("pro_product_id".into(), pro_product_id);
        record
            .credentials
            .insert("business_product_id".into(), business_product_id);
        record
            .credentials
            .insert("environment".into(), environment.into());
        record
            .credentials
            .insert("dashboard_url".into(), org_dashboard_url.clone());
        record.webhook_urls.push(billing_webhook_url.clone());
        state.insert_service(self.tag(), record);
        state.complete_service(self.tag());

        ctx.ui.message("");
        ctx.ui
            .message("Create a Polar API token (Settings > API Tokens > Create Token):");
        ctx.ui.message(&format!("Name it: {}-api", project));
        ctx.ui.message(
            "Scopes: products read/write, checkouts write, subscriptions read/write",
        );

        let token = prompt_validated(
            ctx.ui,
            &Prompt::input("polar_access_token", "Enter your Polar API token"),
            "Invalid token format. Token should start with 'polar_oat_'",
            |raw| {
                let trimmed = raw.trim();
                has_known_prefix(trimmed, &TOKEN_PREFIXES).then(|| trimmed.to_string())
            },
        )?;
        state.set_secret("polar_access_token", &token);

        ctx.ui.message("");
        ctx.ui
            .message("Set up the billing webhook (Webhooks > Add Endpoint):");
        ctx.ui
            .message(&format!("Endpoint URL: {}", billing_webhook_url));
        ctx.ui.message(
            "Events: subscription.created, subscription.updated, subscription.canceled",
        );
        ctx.ui
            .message("Then copy the endpoint's Signing Secret");

        let webhook_secret = prompt_nonempty(
            ctx.ui,
            &Prompt::input("polar_webhook_secret", "Enter Polar Webhook Signing Secret"),
            "Please enter the webhook signing secret",
        )?;
        state.set_secret("polar_webhook_secret", &webhook_secret);

        ctx.ui
            .success(&format!("Polar billing configured: {}", org_dashboard_url));
        ctx.ui
            .success("Pro Plan ($20/month) and Business Plan ($200/month) products created");
        ctx.ui.success("API token configured for billing operations");
        ctx.ui.success("Webhook configured for billing events");

        Ok(())
    }
}
