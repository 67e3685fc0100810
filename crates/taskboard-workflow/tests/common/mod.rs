#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use taskboard_client::testing::{RecordingHost, ScriptedTransport};
use taskboard_client::{CredentialStore, MemoryCredentialStore};
use taskboard_workflow::PageContext;

pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub host: Arc<RecordingHost>,
    pub credentials: Arc<MemoryCredentialStore>,
}

impl Harness {
    pub fn signed_in() -> Self {
        Self::with_credentials(MemoryCredentialStore::with_token("token"))
    }

    pub fn signed_out() -> Self {
        Self::with_credentials(MemoryCredentialStore::new())
    }

    fn with_credentials(credentials: MemoryCredentialStore) -> Self {
        Self {
            transport: Arc::new(ScriptedTransport::new()),
            host: Arc::new(RecordingHost::new()),
            credentials: Arc::new(credentials),
        }
    }

    pub fn ctx(&self) -> PageContext {
        PageContext::connect(
            self.transport.clone(),
            self.credentials.clone(),
            self.host.clone(),
        )
    }

    pub fn token(&self) -> Option<String> {
        self.credentials.load().map(|c| c.token().to_string())
    }
}

pub fn boards_json() -> Value {
    json!([
        {"id": 7, "title": "Sprint", "description": "Q1 goals", "creation_time": 1709651220},
        {"id": 8, "title": "Backlog", "description": "Later", "creation_time": 1709651220}
    ])
}

pub fn task_json(id: i32, board_id: i32, status_id: i32) -> Value {
    json!({
        "id": id,
        "board_id": board_id,
        "title": format!("Task {}", id),
        "description": "Details",
        "status_id": status_id,
        "creation_time": 1709651220
    })
}
