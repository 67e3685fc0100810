use serde_json::json;
use taskboard_domain::Registration;
use taskboard_workflow::{AccountPage, LandingPage};

use crate::context::CliContext;
use crate::output;

pub async fn handle_login(ctx: &CliContext, email: &str, password: &str) -> anyhow::Result<()> {
    let page = LandingPage::new(ctx.page.clone());
    let submission = page.login(email, password).await;
    output::output_submission(ctx, submission, json!({"signed_in": email}))
}

pub async fn handle_register(
    ctx: &CliContext,
    name: String,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    let page = LandingPage::new(ctx.page.clone());
    page.open_register();
    let registration = Registration::new(name, email, password);
    let submission = page.register(&registration).await;
    output::output_submission(ctx, submission, json!({"registered": registration.email}))
}

pub async fn handle_forgot_password(ctx: &CliContext, email: &str) -> anyhow::Result<()> {
    let page = LandingPage::new(ctx.page.clone());
    page.open_forgot_password();
    let submission = page.forgot_password(email).await;
    output::output_submission(ctx, submission, json!({"temporary_password_sent_to": email}))
}

pub async fn handle_logout(ctx: &CliContext) -> anyhow::Result<()> {
    let page = AccountPage::new(ctx.page.clone());
    let submission = page.logout().await;
    output::output_submission(
        ctx,
        submission,
        json!({"signed_out": true, "credential_file": ctx.credential_file}),
    )
}
