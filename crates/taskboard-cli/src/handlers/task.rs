use serde_json::json;
use taskboard_domain::TaskStatus;
use taskboard_workflow::TaskPage;

use crate::cli::{TaskAction, TaskRef, TaskSaveArgs};
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Show(task) => {
            let page = loaded_page(ctx, &task).await;
            output::output_success(page.view())
        }
        TaskAction::Save(args) => handle_save(ctx, args).await,
        TaskAction::Delete(task) => {
            let page = loaded_page(ctx, &task).await;
            let submission = page.delete_task().await;
            output::output_submission(
                ctx,
                submission,
                json!({"deleted": task.id, "board_id": task.board_id}),
            )
        }
    }
}

async fn loaded_page(ctx: &CliContext, task: &TaskRef) -> TaskPage {
    let page = TaskPage::new(ctx.page.clone(), task.board_id, task.id);
    output::require_loaded(ctx, page.load().await);
    page
}

async fn handle_save(ctx: &CliContext, args: TaskSaveArgs) -> anyhow::Result<()> {
    let page = loaded_page(ctx, &args.task).await;
    let status = args.status.map(TaskStatus::from);
    page.edit(|draft| {
        if let Some(title) = args.title {
            draft.title = title;
        }
        if let Some(description) = args.description {
            draft.description = description;
        }
        if let Some(status) = status {
            draft.status = status;
        }
    });
    let submission = page.save().await;
    output::output_submission(ctx, submission, page.view())
}
