pub mod board;
pub mod column;
pub mod editable;
pub mod operations;
pub mod task;
pub mod user;
pub mod validation;

pub use board::{Board, BoardDraft, BoardId, BoardSummary};
pub use column::{group_by_status, StatusColumn};
pub use editable::DirtyTracker;
pub use operations::TaskboardApi;
pub use task::{format_timestamp, NewTask, Task, TaskDraft, TaskId, TaskStatus};
pub use user::{PasswordChange, PasswordViolation, Registration, UserProfile};
pub use validation::{Field, FieldRule, FieldViolation};
