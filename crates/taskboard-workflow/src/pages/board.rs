use parking_lot::Mutex;
use serde::Serialize;
use taskboard_core::{Editable, Location};
use taskboard_domain::{group_by_status, Board, BoardDraft, BoardId, NewTask, StatusColumn};

use crate::context::PageContext;
use crate::feedback::{block, report_failure, BackendMessage, GENERIC_FAILURE, SERVICE_UNAVAILABLE};
use crate::in_flight::InFlight;
use crate::modal::{ModalController, ModalId};
use crate::outcome::{PageLoad, Submission};

pub const BOARD_NOT_FOUND: &str = "Board not found.";
pub const BOARD_UNAVAILABLE: &str = "Can't fetch board's parameters.";
pub const CONFIRM_DELETE_BOARD: &str = "Are you sure that you want to delete this board?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardAction {
    Update,
    Delete,
    CreateTask,
}

/// Result of looking the page's board up in the user's board list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "board", rename_all = "snake_case")]
pub enum BoardLookup {
    Pending,
    Found(Board),
    NotFound,
    Unavailable,
}

#[derive(Debug)]
struct BoardState {
    lookup: BoardLookup,
    form: BoardDraft,
    columns: Vec<StatusColumn>,
    task_form: NewTask,
}

/// One board: its edit form, its status columns and the create-task form.
pub struct BoardPage {
    ctx: PageContext,
    board_id: BoardId,
    state: Mutex<BoardState>,
    modals: ModalController,
    in_flight: InFlight<BoardAction>,
}

impl BoardPage {
    pub fn new(ctx: PageContext, board_id: BoardId) -> Self {
        Self {
            ctx,
            board_id,
            state: Mutex::new(BoardState {
                lookup: BoardLookup::Pending,
                form: BoardDraft::default(),
                columns: group_by_status(Vec::new()),
                task_form: NewTask::default(),
            }),
            modals: ModalController::new(),
            in_flight: InFlight::new(),
        }
    }

    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    pub fn location(&self) -> Location {
        Location::Board {
            board_id: self.board_id,
        }
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    /// Fetch the board's fields and its tasks. A board missing from the
    /// list leaves the form blank and refuses update and delete; a failed
    /// list fetch leaves the form blank but allows both.
    pub async fn load(&self) -> PageLoad {
        if self.ctx.session().require().is_none() {
            return PageLoad::Redirected;
        }

        let lookup = match self.ctx.api.find_board(self.board_id).await {
            Ok(Some(board)) => BoardLookup::Found(board),
            Ok(None) => {
                tracing::warn!("Board {} is not among the user's boards", self.board_id);
                self.ctx.host().alert(BOARD_NOT_FOUND);
                BoardLookup::NotFound
            }
            Err(e) if e.is_auth_rejected() => {
                report_failure(self.ctx.host(), &e, BOARD_UNAVAILABLE, BackendMessage::Ignored);
                return PageLoad::Redirected;
            }
            Err(e) => {
                report_failure(self.ctx.host(), &e, BOARD_UNAVAILABLE, BackendMessage::Ignored);
                BoardLookup::Unavailable
            }
        };
        {
            let mut state = self.state.lock();
            state.form = match &lookup {
                BoardLookup::Found(board) => BoardDraft::from_entity(board),
                _ => BoardDraft::default(),
            };
            state.lookup = lookup;
        }

        match self.ctx.api.list_tasks(self.board_id).await {
            Ok(tasks) => {
                self.state.lock().columns = group_by_status(tasks);
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

    pub fn lookup(&self) -> BoardLookup {
        self.state.lock().lookup.clone()
    }

    pub fn form(&self) -> BoardDraft {
        self.state.lock().form.clone()
    }

    pub fn edit_form<F: FnOnce(&mut BoardDraft)>(&self, f: F) {
        f(&mut self.state.lock().form);
    }

    pub fn columns(&self) -> Vec<StatusColumn> {
        self.state.lock().columns.clone()
    }

    /// Only a board known to be missing is refused. When the list could not
    /// be fetched the backend still gets to decide.
    fn refuse_if_not_found(&self) -> Option<Submission> {
        let missing = self.state.lock().lookup == BoardLookup::NotFound;
        missing.then(|| block(self.ctx.host(), BOARD_NOT_FOUND))
    }

    /// Save the edit form. On success the form keeps what was saved.
    pub async fn update_board(&self) -> Submission {
        if let Some(refused) = self.refuse_if_not_found() {
            return refused;
        }
        let draft = self.form();
        if let Err(violation) = draft.validate() {
            return block(self.ctx.host(), violation);
        }
        let Some(_token) = self.in_flight.begin(BoardAction::Update) else {
            return Submission::Ignored;
        };

        match self.ctx.api.update_board(self.board_id, &draft).await {
            Ok(()) => {
                if let BoardLookup::Found(board) = &mut self.state.lock().lookup {
                    draft.apply_to(board);
                }
                Submission::Completed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored),
        }
    }

    pub async fn delete_board(&self) -> Submission {
        if let Some(refused) = self.refuse_if_not_found() {
            return refused;
        }
        if !self.ctx.host().confirm(CONFIRM_DELETE_BOARD) {
            return Submission::Cancelled;
        }
        let Some(_token) = self.in_flight.begin(BoardAction::Delete) else {
            return Submission::Ignored;
        };

        match self.ctx.api.delete_board(self.board_id).await {
            Ok(()) => {
                self.ctx.host().navigate(Location::Boards);
                Submission::Completed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored),
        }
    }

    pub fn open_task_form(&self) {
        self.modals.open(ModalId::CreateTask);
    }

    /// Close the create-task form and drop what was typed.
    pub fn close_task_form(&self) {
        self.modals.close(ModalId::CreateTask);
        self.state.lock().task_form.clear();
    }

    pub fn task_form(&self) -> NewTask {
        self.state.lock().task_form.clone()
    }

    pub fn fill_task_form(&self, task: NewTask) {
        self.state.lock().task_form = task;
    }

    /// Submit the create-task form. Success reloads this board page; a
    /// failed request clears and closes the form.
    pub async fn create_task(&self) -> Submission {
        let task = self.task_form();
        if let Err(violation) = task.validate() {
            return block(self.ctx.host(), violation);
        }
        let Some(_token) = self.in_flight.begin(BoardAction::CreateTask) else {
            return Submission::Ignored;
        };

        match self.ctx.api.create_task(self.board_id, &task).await {
            Ok(()) => {
                self.close_task_form();
                self.ctx.host().navigate(self.location());
                Submission::Completed
            }
            Err(e) => {
                self.close_task_form();
                report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored)
            }
        }
    }
}
