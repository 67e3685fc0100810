use serde::Serialize;

use crate::{Task, TaskStatus};

/// One column of the board page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

impl StatusColumn {
    pub fn label(&self) -> &'static str {
        self.status.label()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Split tasks into the four status columns. Every column is present even
/// when empty, and tasks keep the order the backend returned them in.
pub fn group_by_status(tasks: Vec<Task>) -> Vec<StatusColumn> {
    let mut columns: Vec<StatusColumn> = TaskStatus::ALL
        .iter()
        .map(|&status| StatusColumn {
            status,
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        if let Some(column) = columns.iter_mut().find(|c| c.status == task.status) {
            column.tasks.push(task);
        }
    }

    columns
}
