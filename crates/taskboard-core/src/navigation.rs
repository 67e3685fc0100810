use std::fmt;

/// Page surfaces rendered by the view server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Unauthenticated landing page (login, registration).
    Landing,
    Boards,
    Board { board_id: i32 },
    Task { board_id: i32, task_id: i32 },
    Account,
}

impl Location {
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Boards => "/boards".to_string(),
            Self::Board { board_id } => format!("/board/{}", board_id),
            Self::Task { board_id, task_id } => format!("/show_task/{}/{}", board_id, task_id),
            Self::Account => "/account".to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
