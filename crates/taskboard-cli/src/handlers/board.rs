use serde_json::json;
use taskboard_domain::NewTask;
use taskboard_workflow::BoardPage;

use super::require_session;
use crate::cli::{BoardAction, BoardUpdateArgs};
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Show { id } => {
            let page = loaded_page(ctx, id).await;
            output::output_success(json!({
                "board": page.lookup(),
                "form": page.form(),
                "columns": page.columns(),
            }))
        }
        BoardAction::Update(args) => handle_update(ctx, args).await,
        BoardAction::Delete { id } => {
            let page = loaded_page(ctx, id).await;
            let submission = page.delete_board().await;
            output::output_submission(ctx, submission, json!({"deleted": id}))
        }
        BoardAction::AddTask {
            id,
            title,
            description,
        } => {
            require_session(ctx);
            let page = BoardPage::new(ctx.page.clone(), id);
            page.open_task_form();
            page.fill_task_form(NewTask::new(title, description));
            let task = page.task_form();
            let submission = page.create_task().await;
            output::output_submission(ctx, submission, json!({"board_id": id, "task": task}))
        }
    }
}

async fn loaded_page(ctx: &CliContext, id: i32) -> BoardPage {
    let page = BoardPage::new(ctx.page.clone(), id);
    output::require_loaded(ctx, page.load().await);
    page
}

async fn handle_update(ctx: &CliContext, args: BoardUpdateArgs) -> anyhow::Result<()> {
    let page = loaded_page(ctx, args.id).await;
    page.edit_form(|form| {
        if let Some(title) = args.title {
            form.title = title;
        }
        if let Some(description) = args.description {
            form.description = description;
        }
    });
    let submission = page.update_board().await;
    output::output_submission(ctx, submission, page.form())
}
