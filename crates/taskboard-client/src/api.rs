use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{
    Board, BoardDraft, BoardId, NewTask, PasswordChange, Registration, Task, TaskDraft, TaskId,
    TaskboardApi, UserProfile,
};

use crate::gateway::{CallOptions, Gateway};
use crate::traits::HttpMethod;

/// Header naming the board for task reads.
pub const BOARD_ID_HEADER: &str = "BoardId";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ChangeUsernameRequest<'a> {
    new_name: &'a str,
}

#[derive(Serialize)]
struct ChangeEmailRequest<'a> {
    new_email: &'a str,
}

#[derive(Serialize)]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct BoardRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<BoardId>,
    title: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct DeleteBoardRequest {
    id: BoardId,
}

#[derive(Serialize)]
struct CreateTaskRequest<'a> {
    board_id: BoardId,
    title: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct ChangeTaskRequest<'a> {
    id: TaskId,
    board_id: BoardId,
    title: &'a str,
    description: &'a str,
    status_id: i32,
}

#[derive(Serialize)]
struct DeleteTaskRequest {
    id: TaskId,
    board_id: BoardId,
}

/// `/get_user` answers with the profile object; some deployments wrap it
/// in a one-element list.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileReply {
    One(UserProfile),
    Many(Vec<UserProfile>),
}

impl ProfileReply {
    fn into_profile(self) -> TaskboardResult<UserProfile> {
        match self {
            Self::One(profile) => Ok(profile),
            Self::Many(profiles) => profiles
                .into_iter()
                .next()
                .ok_or_else(|| TaskboardError::NotFound("user profile".to_string())),
        }
    }
}

impl Gateway {
    async fn send_json<T: Serialize + Sync>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &T,
    ) -> TaskboardResult<()> {
        self.call(method, path, CallOptions::new().json(body)?)
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl TaskboardApi for Gateway {
    async fn login(&self, email: &str, password: &str) -> TaskboardResult<()> {
        let options = CallOptions::new()
            .anonymous()
            .json(&LoginRequest { email, password })?;
        self.call(HttpMethod::Post, "/authorization", options).await?;
        tracing::info!("Signed in");
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> TaskboardResult<()> {
        let options = CallOptions::new().anonymous().json(registration)?;
        self.call(HttpMethod::Post, "/create_user", options).await?;
        tracing::info!("Registered a new account");
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> TaskboardResult<()> {
        let options = CallOptions::new().anonymous().json(&EmailRequest { email })?;
        self.call(HttpMethod::Put, "/forgot_password", options)
            .await
            .map(|_| ())
    }

    async fn logout(&self) -> TaskboardResult<()> {
        self.call(HttpMethod::Delete, "/logout", CallOptions::new())
            .await
            .map(|_| ())
    }

    async fn get_user(&self) -> TaskboardResult<UserProfile> {
        let reply = self
            .call(HttpMethod::Get, "/get_user", CallOptions::new())
            .await?;
        reply.decode::<ProfileReply>()?.into_profile()
    }

    async fn change_username(&self, new_name: &str) -> TaskboardResult<()> {
        self.send_json(
            HttpMethod::Put,
            "/change_username",
            &ChangeUsernameRequest { new_name },
        )
        .await?;
        tracing::info!("Changed user name");
        Ok(())
    }

    async fn change_email(&self, new_email: &str) -> TaskboardResult<()> {
        self.send_json(
            HttpMethod::Put,
            "/change_email",
            &ChangeEmailRequest { new_email },
        )
        .await?;
        tracing::info!("Changed email address");
        Ok(())
    }

    async fn change_password(&self, change: &PasswordChange) -> TaskboardResult<()> {
        let body = ChangePasswordRequest {
            old_password: &change.old_password,
            new_password: &change.new_password,
        };
        self.send_json(HttpMethod::Put, "/change_password", &body)
            .await?;
        tracing::info!("Changed password");
        Ok(())
    }

    async fn list_boards(&self) -> TaskboardResult<Vec<Board>> {
        self.call(HttpMethod::Get, "/user_boards", CallOptions::new())
            .await?
            .decode()
    }

    async fn create_board(&self, draft: &BoardDraft) -> TaskboardResult<()> {
        let body = BoardRequest {
            id: None,
            title: &draft.title,
            description: &draft.description,
        };
        self.send_json(HttpMethod::Post, "/create_board", &body)
            .await?;
        tracing::info!("Created board '{}'", draft.title);
        Ok(())
    }

    async fn update_board(&self, board_id: BoardId, draft: &BoardDraft) -> TaskboardResult<()> {
        let body = BoardRequest {
            id: Some(board_id),
            title: &draft.title,
            description: &draft.description,
        };
        self.send_json(HttpMethod::Put, "/change_board", &body)
            .await?;
        tracing::info!("Updated board {}", board_id);
        Ok(())
    }

    async fn delete_board(&self, board_id: BoardId) -> TaskboardResult<()> {
        self.send_json(
            HttpMethod::Delete,
            "/delete_board",
            &DeleteBoardRequest { id: board_id },
        )
        .await?;
        tracing::info!("Deleted board {}", board_id);
        Ok(())
    }

    /// Entries that do not decode, e.g. an unknown `status_id`, are left
    /// out so the rest of the board still shows.
    async fn list_tasks(&self, board_id: BoardId) -> TaskboardResult<Vec<Task>> {
        let options = CallOptions::new().header(BOARD_ID_HEADER, board_id);
        let entries: Vec<serde_json::Value> = self
            .call(HttpMethod::Get, "/board_tasks", options)
            .await?
            .decode()?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Task>(entry) {
                Ok(task) => Some(task),
                Err(e) => {
                    tracing::warn!("Skipping task on board {}: {}", board_id, e);
                    None
                }
            })
            .collect())
    }

    async fn get_task(&self, board_id: BoardId, task_id: TaskId) -> TaskboardResult<Task> {
        let options = CallOptions::new().header(BOARD_ID_HEADER, board_id);
        self.call(HttpMethod::Get, &format!("/task/{}", task_id), options)
            .await?
            .decode()
    }

    async fn create_task(&self, board_id: BoardId, task: &NewTask) -> TaskboardResult<()> {
        let body = CreateTaskRequest {
            board_id,
            title: &task.title,
            description: &task.description,
        };
        self.send_json(HttpMethod::Post, "/create_task", &body)
            .await?;
        tracing::info!("Created task '{}' on board {}", task.title, board_id);
        Ok(())
    }

    async fn update_task(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        draft: &TaskDraft,
    ) -> TaskboardResult<()> {
        let body = ChangeTaskRequest {
            id: task_id,
            board_id,
            title: &draft.title,
            description: &draft.description,
            status_id: draft.status.id(),
        };
        self.send_json(HttpMethod::Put, "/change_task", &body)
            .await?;
        tracing::info!("Updated task {} on board {}", task_id, board_id);
        Ok(())
    }

    async fn delete_task(&self, board_id: BoardId, task_id: TaskId) -> TaskboardResult<()> {
        self.send_json(
            HttpMethod::Delete,
            "/delete_task",
            &DeleteTaskRequest {
                id: task_id,
                board_id,
            },
        )
        .await?;
        tracing::info!("Deleted task {} on board {}", task_id, board_id);
        Ok(())
    }
}
