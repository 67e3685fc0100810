pub mod account;
pub mod board;
pub mod boards;
pub mod session;
pub mod task;

use taskboard_workflow::PageLoad;

use crate::context::CliContext;
use crate::output;

/// Session gate for commands that submit without loading a page first.
pub fn require_session(ctx: &CliContext) {
    if ctx.page.session().require().is_none() {
        output::require_loaded(ctx, PageLoad::Redirected);
    }
}
