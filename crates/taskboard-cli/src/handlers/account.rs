use serde_json::json;
use taskboard_domain::PasswordChange;
use taskboard_workflow::{AccountPage, ModalId};

use super::require_session;
use crate::cli::AccountAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: AccountAction) -> anyhow::Result<()> {
    let page = AccountPage::new(ctx.page.clone());
    match action {
        AccountAction::Show => {
            output::require_loaded(ctx, page.load().await);
            output::output_success(page.profile())
        }
        AccountAction::Rename { name } => {
            require_session(ctx);
            page.open(ModalId::ChangeName);
            let submission = page.change_name(&name).await;
            output::output_submission(ctx, submission, json!({"name": name}))
        }
        AccountAction::Email { email } => {
            require_session(ctx);
            page.open(ModalId::ChangeEmail);
            let submission = page.change_email(&email).await;
            output::output_submission(ctx, submission, json!({"email": email}))
        }
        AccountAction::Password { old, new, repeat } => {
            require_session(ctx);
            page.open(ModalId::ChangePassword);
            page.fill_password_form(PasswordChange::new(old, new, repeat));
            let submission = page.change_password().await;
            output::output_submission(ctx, submission, json!({"password_changed": true}))
        }
    }
}
