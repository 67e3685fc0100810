//! Length rules for board and task fields.
//!
//! Lengths are counted in Unicode scalar values. Every rule requires a
//! non-empty value.

use std::fmt;
use taskboard_core::TaskboardError;
use thiserror::Error;

pub const BOARD_TITLE_MAX: usize = 25;
pub const BOARD_DESCRIPTION_MAX: usize = 200;
pub const TASK_TITLE_MAX: usize = 50;
pub const TASK_DESCRIPTION_MAX: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("Title"),
            Self::Description => f.write_str("Description"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldViolation {
    #[error("{field} couldn't be empty!")]
    Empty { field: Field },

    #[error("{field} couldn't be longer than {max} characters!")]
    TooLong { field: Field, max: usize },
}

impl From<FieldViolation> for TaskboardError {
    fn from(violation: FieldViolation) -> Self {
        TaskboardError::LocalValidation(violation.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub max_chars: usize,
}

impl FieldRule {
    pub const BOARD_TITLE: FieldRule = FieldRule::new(Field::Title, BOARD_TITLE_MAX);
    pub const BOARD_DESCRIPTION: FieldRule =
        FieldRule::new(Field::Description, BOARD_DESCRIPTION_MAX);
    pub const TASK_TITLE: FieldRule = FieldRule::new(Field::Title, TASK_TITLE_MAX);
    pub const TASK_DESCRIPTION: FieldRule =
        FieldRule::new(Field::Description, TASK_DESCRIPTION_MAX);

    pub const fn new(field: Field, max_chars: usize) -> Self {
        Self { field, max_chars }
    }

    pub fn check(&self, value: &str) -> Result<(), FieldViolation> {
        let len = value.chars().count();
        if len == 0 {
            Err(FieldViolation::Empty { field: self.field })
        } else if len > self.max_chars {
            Err(FieldViolation::TooLong {
                field: self.field,
                max: self.max_chars,
            })
        } else {
            Ok(())
        }
    }
}

/// Check a title/description pair. The description is checked first so the
/// user sees the same message order on every form.
pub fn check_title_and_description(
    title_rule: FieldRule,
    title: &str,
    description_rule: FieldRule,
    description: &str,
) -> Result<(), FieldViolation> {
    description_rule.check(description)?;
    title_rule.check(title)
}
