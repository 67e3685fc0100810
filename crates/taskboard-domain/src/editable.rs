use crate::{Board, BoardDraft, Task, TaskDraft};
use taskboard_core::Editable;

impl Editable<Board> for BoardDraft {
    fn from_entity(board: &Board) -> Self {
        Self {
            title: board.title.clone(),
            description: board.description.clone(),
        }
    }

    fn apply_to(self, board: &mut Board) {
        board.title = self.title;
        board.description = self.description;
    }
}

impl Editable<Task> for TaskDraft {
    fn from_entity(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
        }
    }

    fn apply_to(self, task: &mut Task) {
        task.title = self.title;
        task.description = self.description;
        task.status = self.status;
    }
}

/// Keeps the last saved state of a form next to the edited one so callers
/// can tell whether there is anything to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyTracker<D> {
    original: D,
    current: D,
}

impl<D: Clone + PartialEq> DirtyTracker<D> {
    pub fn new(original: D) -> Self {
        Self {
            current: original.clone(),
            original,
        }
    }

    pub fn from_entity<T>(entity: &T) -> Self
    where
        D: Editable<T>,
    {
        Self::new(D::from_entity(entity))
    }

    pub fn current(&self) -> &D {
        &self.current
    }

    /// Apply `f` to the edited state. Returns whether the form is dirty afterwards.
    pub fn edit<F: FnOnce(&mut D)>(&mut self, f: F) -> bool {
        f(&mut self.current);
        self.is_dirty()
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    /// Mark `saved` as the saved state. Edits made since it was submitted
    /// stay in the form and keep it dirty.
    pub fn commit_to(&mut self, saved: D) {
        self.original = saved;
    }
}
