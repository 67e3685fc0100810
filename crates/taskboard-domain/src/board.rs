use serde::{Deserialize, Serialize};
use taskboard_core::Location;

use crate::validation::{check_title_and_description, FieldRule, FieldViolation};

pub type BoardId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub description: String,
    /// Unix seconds.
    #[serde(default)]
    pub creation_time: i64,
}

impl Board {
    pub fn location(&self) -> Location {
        Location::Board { board_id: self.id }
    }

    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            link: self.location().path(),
        }
    }
}

/// Navigable entry on the board list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub id: BoardId,
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Title and description as entered in the board form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDraft {
    pub title: String,
    pub description: String,
}

impl BoardDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldViolation> {
        check_title_and_description(
            FieldRule::BOARD_TITLE,
            &self.title,
            FieldRule::BOARD_DESCRIPTION,
            &self.description,
        )
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}
