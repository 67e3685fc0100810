use parking_lot::Mutex;
use taskboard_core::Location;
use taskboard_domain::{Board, BoardDraft, BoardSummary};

use crate::context::PageContext;
use crate::feedback::{block, report_failure, BackendMessage, GENERIC_FAILURE, SERVICE_UNAVAILABLE};
use crate::in_flight::InFlight;
use crate::outcome::{PageLoad, Submission};

#[derive(Debug, Default)]
struct BoardsState {
    boards: Vec<Board>,
    form: BoardDraft,
}

/// The board list with its create-board form.
pub struct BoardsPage {
    ctx: PageContext,
    state: Mutex<BoardsState>,
    in_flight: InFlight<()>,
}

impl BoardsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            state: Mutex::new(BoardsState::default()),
            in_flight: InFlight::new(),
        }
    }

    pub async fn load(&self) -> PageLoad {
        if self.ctx.session().require().is_none() {
            return PageLoad::Redirected;
        }
        match self.ctx.api.list_boards().await {
            Ok(boards) => {
                tracing::debug!("Loaded {} boards", boards.len());
                self.state.lock().boards = boards;
                PageLoad::Ready
            }
            Err(e) if e.is_auth_rejected() => {
                report_failure(self.ctx.host(), &e, SERVICE_UNAVAILABLE, BackendMessage::Ignored);
                PageLoad::Redirected
            }
            Err(e) => {
                report_failure(self.ctx.host(), &e, SERVICE_UNAVAILABLE, BackendMessage::Ignored);
                PageLoad::Unavailable
            }
        }
    }

    pub fn boards(&self) -> Vec<Board> {
        self.state.lock().boards.clone()
    }

    pub fn summaries(&self) -> Vec<BoardSummary> {
        self.state.lock().boards.iter().map(Board::summary).collect()
    }

    pub fn form(&self) -> BoardDraft {
        self.state.lock().form.clone()
    }

    pub fn fill_form(&self, draft: BoardDraft) {
        self.state.lock().form = draft;
    }

    /// Submit the create-board form. A failed request empties the form.
    pub async fn create_board(&self) -> Submission {
        let draft = self.form();
        if let Err(violation) = draft.validate() {
            return block(self.ctx.host(), violation);
        }
        let Some(_token) = self.in_flight.begin(()) else {
            return Submission::Ignored;
        };

        match self.ctx.api.create_board(&draft).await {
            Ok(()) => {
                self.ctx.host().navigate(Location::Boards);
                Submission::Completed
            }
            Err(e) => {
                self.state.lock().form.clear();
                report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored)
            }
        }
    }
}
