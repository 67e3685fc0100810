use parking_lot::Mutex;
use serde::Serialize;
use taskboard_core::{Editable, Location};
use taskboard_domain::{BoardId, DirtyTracker, Task, TaskDraft, TaskId, TaskStatus};

use crate::context::PageContext;
use crate::feedback::{block, report_failure, BackendMessage, GENERIC_FAILURE, SERVICE_UNAVAILABLE};
use crate::in_flight::InFlight;
use crate::outcome::{PageLoad, Submission};

pub const CONFIRM_DELETE_TASK: &str = "Are you sure that you want to delete this task?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TaskAction {
    Save,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    pub status_id: i32,
    pub label: &'static str,
    pub selected: bool,
}

/// What the task page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub id: TaskId,
    pub board_id: BoardId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub status_options: Vec<StatusOption>,
    pub created: String,
    pub can_save: bool,
    pub back_link: String,
}

#[derive(Debug, Default)]
struct TaskState {
    task: Option<Task>,
    editor: Option<DirtyTracker<TaskDraft>>,
}

/// One task with its edit form.
pub struct TaskPage {
    ctx: PageContext,
    board_id: BoardId,
    task_id: TaskId,
    state: Mutex<TaskState>,
    in_flight: InFlight<TaskAction>,
}

impl TaskPage {
    pub fn new(ctx: PageContext, board_id: BoardId, task_id: TaskId) -> Self {
        Self {
            ctx,
            board_id,
            task_id,
            state: Mutex::new(TaskState::default()),
            in_flight: InFlight::new(),
        }
    }

    pub fn back_link(&self) -> Location {
        Location::Board {
            board_id: self.board_id,
        }
    }

    pub async fn load(&self) -> PageLoad {
        if self.ctx.session().require().is_none() {
            return PageLoad::Redirected;
        }
        match self.ctx.api.get_task(self.board_id, self.task_id).await {
            Ok(task) => {
                let mut state = self.state.lock();
                state.editor = Some(DirtyTracker::from_entity(&task));
                state.task = Some(task);
                PageLoad::Ready
            }
            Err(e) => {
                report_failure(self.ctx.host(), &e, SERVICE_UNAVAILABLE, BackendMessage::Ignored);
                if e.is_auth_rejected() {
                    PageLoad::Redirected
                } else {
                    PageLoad::Unavailable
                }
            }
        }
    }

    pub fn task(&self) -> Option<Task> {
        self.state.lock().task.clone()
    }

    /// The form as currently edited, with the loaded task's metadata.
    pub fn view(&self) -> Option<TaskView> {
        let state = self.state.lock();
        let task = state.task.as_ref()?;
        let editor = state.editor.as_ref()?;
        let draft = editor.current();

        Some(TaskView {
            id: task.id,
            board_id: task.board_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            status_options: status_options(draft.status),
            created: task.created_label(),
            can_save: editor.is_dirty(),
            back_link: self.back_link().path(),
        })
    }

    /// Change the form. Returns whether save is enabled afterwards.
    pub fn edit<F: FnOnce(&mut TaskDraft)>(&self, f: F) -> bool {
        match self.state.lock().editor.as_mut() {
            Some(editor) => editor.edit(f),
            None => false,
        }
    }

    pub fn can_save(&self) -> bool {
        self.state
            .lock()
            .editor
            .as_ref()
            .is_some_and(DirtyTracker::is_dirty)
    }

    /// Save the form. Nothing happens while it matches the last saved state.
    pub async fn save(&self) -> Submission {
        let draft = {
            let state = self.state.lock();
            match state.editor.as_ref() {
                Some(editor) if editor.is_dirty() => editor.current().clone(),
                _ => return Submission::Ignored,
            }
        };
        if let Err(violation) = draft.validate() {
            return block(self.ctx.host(), violation);
        }
        let Some(_token) = self.in_flight.begin(TaskAction::Save) else {
            return Submission::Ignored;
        };

        match self
            .ctx
            .api
            .update_task(self.board_id, self.task_id, &draft)
            .await
        {
            Ok(()) => {
                let mut state = self.state.lock();
                if let Some(task) = state.task.as_mut() {
                    draft.clone().apply_to(task);
                }
                if let Some(editor) = state.editor.as_mut() {
                    editor.commit_to(draft);
                }
                Submission::Completed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored),
        }
    }

    pub async fn delete_task(&self) -> Submission {
        if !self.ctx.host().confirm(CONFIRM_DELETE_TASK) {
            return Submission::Cancelled;
        }
        let Some(_token) = self.in_flight.begin(TaskAction::Delete) else {
            return Submission::Ignored;
        };

        match self.ctx.api.delete_task(self.board_id, self.task_id).await {
            Ok(()) => {
                self.ctx.host().navigate(self.back_link());
                Submission::Completed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored),
        }
    }
}

fn status_options(selected: TaskStatus) -> Vec<StatusOption> {
    TaskStatus::ALL
        .iter()
        .map(|&status| StatusOption {
            status_id: status.id(),
            label: status.label(),
            selected: status == selected,
        })
        .collect()
}
