use async_trait::async_trait;
use taskboard_core::TaskboardResult;

use crate::{
    Board, BoardDraft, BoardId, NewTask, PasswordChange, Registration, Task, TaskDraft, TaskId,
    UserProfile,
};

/// Every call the backend offers.
/// The gateway implements this; pages depend only on the trait.
#[async_trait]
pub trait TaskboardApi: Send + Sync {
    // Session
    async fn login(&self, email: &str, password: &str) -> TaskboardResult<()>;
    async fn register(&self, registration: &Registration) -> TaskboardResult<()>;
    async fn forgot_password(&self, email: &str) -> TaskboardResult<()>;
    async fn logout(&self) -> TaskboardResult<()>;

    // Account
    async fn get_user(&self) -> TaskboardResult<UserProfile>;
    async fn change_username(&self, new_name: &str) -> TaskboardResult<()>;
    async fn change_email(&self, new_email: &str) -> TaskboardResult<()>;
    async fn change_password(&self, change: &PasswordChange) -> TaskboardResult<()>;

    // Boards
    async fn list_boards(&self) -> TaskboardResult<Vec<Board>>;
    async fn create_board(&self, draft: &BoardDraft) -> TaskboardResult<()>;
    async fn update_board(&self, board_id: BoardId, draft: &BoardDraft) -> TaskboardResult<()>;
    async fn delete_board(&self, board_id: BoardId) -> TaskboardResult<()>;

    // Tasks
    async fn list_tasks(&self, board_id: BoardId) -> TaskboardResult<Vec<Task>>;
    async fn get_task(&self, board_id: BoardId, task_id: TaskId) -> TaskboardResult<Task>;
    async fn create_task(&self, board_id: BoardId, task: &NewTask) -> TaskboardResult<()>;
    async fn update_task(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        draft: &TaskDraft,
    ) -> TaskboardResult<()>;
    async fn delete_task(&self, board_id: BoardId, task_id: TaskId) -> TaskboardResult<()>;

    /// There is no fetch-by-id endpoint for boards, so this filters the list.
    async fn find_board(&self, board_id: BoardId) -> TaskboardResult<Option<Board>> {
        let boards = self.list_boards().await?;
        Ok(boards.into_iter().find(|b| b.id == board_id))
    }
}
