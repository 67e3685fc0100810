use serde_json::json;
use taskboard_domain::BoardDraft;
use taskboard_workflow::BoardsPage;

use super::require_session;
use crate::cli::BoardsAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: BoardsAction) -> anyhow::Result<()> {
    let page = BoardsPage::new(ctx.page.clone());
    match action {
        BoardsAction::List => {
            output::require_loaded(ctx, page.load().await);
            output::output_list(page.summaries())
        }
        BoardsAction::Create { title, description } => {
            require_session(ctx);
            page.fill_form(BoardDraft::new(title.clone(), description.clone()));
            let submission = page.create_board().await;
            output::output_submission(
                ctx,
                submission,
                json!({"title": title, "description": description}),
            )
        }
    }
}
