use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use taskboard_core::Location;

use crate::board::BoardId;
use crate::validation::{check_title_and_description, FieldRule, FieldViolation};

pub type TaskId = i32;

/// Task lifecycle. Serialized as the backend's integer `status_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
    OnHold,
}

impl TaskStatus {
    /// Column order on the board page.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::OnHold,
    ];

    pub fn id(self) -> i32 {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
            Self::OnHold => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::OnHold => "On Hold",
        }
    }
}

impl TryFrom<i32> for TaskStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ToDo),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Done),
            3 => Ok(Self::OnHold),
            other => Err(format!("unknown task status id {}", other)),
        }
    }
}

impl From<TaskStatus> for i32 {
    fn from(status: TaskStatus) -> Self {
        status.id()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub board_id: BoardId,
    pub title: String,
    pub description: String,
    #[serde(rename = "status_id")]
    pub status: TaskStatus,
    /// Unix seconds. Older backends call it `last_status_change_time`.
    #[serde(default, alias = "last_status_change_time")]
    pub creation_time: i64,
}

impl Task {
    pub fn location(&self) -> Location {
        Location::Task {
            board_id: self.board_id,
            task_id: self.id,
        }
    }

    /// Creation time in the user's local timezone, to the minute.
    pub fn created_label(&self) -> String {
        format_timestamp(self.creation_time, &Local).unwrap_or_default()
    }
}

/// Format Unix seconds as e.g. `March 5, 2024 at 3:07 PM` in `tz`.
pub fn format_timestamp<Tz>(secs: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let utc = DateTime::from_timestamp(secs, 0)?;
    Some(
        utc.with_timezone(tz)
            .format("%B %-d, %Y at %-I:%M %p")
            .to_string(),
    )
}

fn check_task_fields(title: &str, description: &str) -> Result<(), FieldViolation> {
    check_title_and_description(
        FieldRule::TASK_TITLE,
        title,
        FieldRule::TASK_DESCRIPTION,
        description,
    )
}

/// Fields of the create-task form. The backend assigns the initial status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldViolation> {
        check_task_fields(&self.title, &self.description)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// Editable fields of an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), FieldViolation> {
        check_task_fields(&self.title, &self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_status_ids_round_trip_through_json() {
        for status in TaskStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, status.id().to_string());
        }
        let parsed: TaskStatus = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, TaskStatus::OnHold);
        assert!(serde_json::from_str::<TaskStatus>("4").is_err());
    }

    #[test]
    fn test_status_labels() {
        let labels: Vec<_> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["To Do", "In Progress", "Done", "On Hold"]);
    }

    #[test]
    fn test_deserialize_task_with_either_timestamp_name() {
        let current = r#"{"id":3,"board_id":7,"title":"Write docs","description":"API","status_id":1,"creation_time":1709651220}"#;
        let task: Task = serde_json::from_str(current).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.creation_time, 1709651220);

        let legacy = r#"{"id":3,"board_id":7,"title":"Write docs","description":"API","status_id":2,"last_status_change_time":1700471100}"#;
        let task: Task = serde_json::from_str(legacy).unwrap();
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.creation_time, 1700471100);
        assert_eq!(
            task.location(),
            Location::Task {
                board_id: 7,
                task_id: 3
            }
        );
    }

    #[test]
    fn test_format_timestamp_to_the_minute() {
        assert_eq!(
            format_timestamp(1709651220, &Utc).as_deref(),
            Some("March 5, 2024 at 3:07 PM")
        );
        assert_eq!(
            format_timestamp(1700471100, &Utc).as_deref(),
            Some("November 20, 2023 at 9:05 AM")
        );
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_timestamp(1709651220, &plus_two).as_deref(),
            Some("March 5, 2024 at 5:07 PM")
        );
    }

    #[test]
    fn test_task_field_rules() {
        assert!(NewTask::new("t", "d").validate().is_ok());
        assert_eq!(
            NewTask::new("x".repeat(51), "d").validate(),
            Err(FieldViolation::TooLong {
                field: Field::Title,
                max: 50
            })
        );
        let draft = TaskDraft {
            title: "t".to_string(),
            description: String::new(),
            status: TaskStatus::Done,
        };
        assert_eq!(
            draft.validate(),
            Err(FieldViolation::Empty {
                field: Field::Description
            })
        );
        let long = TaskDraft {
            title: "t".to_string(),
            description: "d".repeat(2000),
            status: TaskStatus::ToDo,
        };
        assert!(long.validate().is_ok());
    }
}
