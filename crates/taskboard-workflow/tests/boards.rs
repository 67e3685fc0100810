mod common;

use async_trait::async_trait;
use common::{boards_json, task_json, Harness};
use serde_json::json;
use std::sync::Arc;
use taskboard_client::testing::RecordingHost;
use taskboard_client::{
    HttpRequest, HttpResponse, MemoryCredentialStore, Transport, TransportError,
};
use taskboard_core::Location;
use taskboard_domain::{BoardDraft, NewTask, TaskStatus};
use taskboard_workflow::pages::board::{BOARD_NOT_FOUND, BOARD_UNAVAILABLE, CONFIRM_DELETE_BOARD};
use taskboard_workflow::{
    BoardLookup, BoardPage, BoardsPage, ModalId, PageContext, PageLoad, Submission,
    GENERIC_FAILURE, SERVICE_UNAVAILABLE,
};
use tokio::sync::Notify;

#[tokio::test]
async fn test_board_list_summaries() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, boards_json());
    let page = BoardsPage::new(harness.ctx());

    assert_eq!(page.load().await, PageLoad::Ready);
    let links: Vec<String> = page.summaries().into_iter().map(|s| s.link).collect();
    assert_eq!(links, vec!["/board/7", "/board/8"]);
}

#[tokio::test]
async fn test_empty_board_list_is_not_an_error() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, json!([]));
    let page = BoardsPage::new(harness.ctx());
    assert_eq!(page.load().await, PageLoad::Ready);
    assert!(page.summaries().is_empty());
    assert!(harness.host.alerts().is_empty());
}

#[tokio::test]
async fn test_create_board_rules_never_reach_network() {
    let harness = Harness::signed_in();
    let page = BoardsPage::new(harness.ctx());

    for draft in [
        BoardDraft::new("", "Q1 goals"),
        BoardDraft::new("x".repeat(26), "Q1 goals"),
        BoardDraft::new("Sprint", ""),
        BoardDraft::new("Sprint", "d".repeat(201)),
    ] {
        page.fill_form(draft);
        assert_eq!(page.create_board().await, Submission::Blocked);
    }
    assert_eq!(harness.transport.request_count(), 0);
    assert_eq!(harness.host.alerts().len(), 4);
}

#[tokio::test]
async fn test_create_board_success_and_destructive_failure() {
    let harness = Harness::signed_in();
    harness.transport.push_status(200);
    harness.transport.push_status(500);
    let page = BoardsPage::new(harness.ctx());

    page.fill_form(BoardDraft::new("Sprint", "Q1 goals"));
    assert_eq!(page.create_board().await, Submission::Completed);
    assert_eq!(harness.host.navigations(), vec![Location::Boards]);

    page.fill_form(BoardDraft::new("Sprint", "Q1 goals"));
    assert_eq!(page.create_board().await, Submission::Failed);
    assert_eq!(page.form(), BoardDraft::default());
    assert_eq!(harness.host.alerts(), vec![GENERIC_FAILURE.to_string()]);
}

#[tokio::test]
async fn test_board_page_fills_form_from_list() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, boards_json());
    harness.transport.push_json(
        200,
        json!([task_json(1, 7, 0), task_json(2, 7, 1), task_json(3, 7, 1), task_json(4, 7, 2), task_json(5, 7, 3), task_json(6, 7, 0)]),
    );
    let page = BoardPage::new(harness.ctx(), 7);

    assert_eq!(page.load().await, PageLoad::Ready);
    assert_eq!(page.form(), BoardDraft::new("Sprint", "Q1 goals"));
    assert!(matches!(page.lookup(), BoardLookup::Found(b) if b.id == 7));

    let counts: Vec<usize> = page.columns().iter().map(|c| c.len()).collect();
    assert_eq!(counts, vec![2, 2, 1, 1]);
    assert_eq!(page.columns()[3].status, TaskStatus::OnHold);

    let requests = harness.transport.requests();
    assert_eq!(requests[1].path, "/board_tasks");
    assert_eq!(requests[1].header("BoardId"), Some("7"));
}

#[tokio::test]
async fn test_unknown_board_is_not_found_and_refuses_changes() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, boards_json());
    harness.transport.push_json(200, json!([]));
    let page = BoardPage::new(harness.ctx(), 99);

    assert_eq!(page.load().await, PageLoad::Ready);
    assert_eq!(page.lookup(), BoardLookup::NotFound);
    assert_eq!(page.form(), BoardDraft::default());
    assert_eq!(page.columns().len(), 4);

    page.edit_form(|f| *f = BoardDraft::new("Sprint", "Q1 goals"));
    assert_eq!(page.update_board().await, Submission::Blocked);
    assert_eq!(page.delete_board().await, Submission::Blocked);
    assert_eq!(harness.transport.request_count(), 2);
    assert_eq!(harness.host.alerts(), vec![BOARD_NOT_FOUND.to_string(); 3]);
}

#[tokio::test]
async fn test_failed_board_list_still_loads_tasks() {
    let harness = Harness::signed_in();
    harness.transport.push_status(500);
    harness
        .transport
        .push_json(200, json!([task_json(1, 7, 0), task_json(2, 7, 2)]));
    let page = BoardPage::new(harness.ctx(), 7);

    assert_eq!(page.load().await, PageLoad::Ready);
    assert_eq!(page.lookup(), BoardLookup::Unavailable);
    assert_eq!(page.form(), BoardDraft::default());
    let counts: Vec<usize> = page.columns().iter().map(|c| c.len()).collect();
    assert_eq!(counts, vec![1, 0, 1, 0]);
    assert_eq!(harness.host.alerts(), vec![BOARD_UNAVAILABLE.to_string()]);
    assert!(harness.token().is_some());
}

#[tokio::test]
async fn test_failed_board_list_still_allows_update_and_delete() {
    let harness = Harness::signed_in();
    harness.transport.push_status(500);
    harness.transport.push_json(200, json!([]));
    let page = BoardPage::new(harness.ctx(), 7);
    assert_eq!(page.load().await, PageLoad::Ready);

    harness.transport.push_status(200);
    page.edit_form(|f| *f = BoardDraft::new("Sprint", "Q1 goals"));
    assert_eq!(page.update_board().await, Submission::Completed);
    assert_eq!(page.form(), BoardDraft::new("Sprint", "Q1 goals"));

    harness.transport.push_status(200);
    assert_eq!(page.delete_board().await, Submission::Completed);
    assert_eq!(
        harness.transport.paths(),
        vec!["/user_boards", "/board_tasks", "/change_board", "/delete_board"]
    );
    assert_eq!(harness.host.alerts(), vec![BOARD_UNAVAILABLE.to_string()]);
    assert_eq!(harness.host.navigations(), vec![Location::Boards]);
}

#[tokio::test]
async fn test_failed_task_list_reports_out_of_service() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, boards_json());
    harness.transport.push_status(500);
    let page = BoardPage::new(harness.ctx(), 7);

    assert_eq!(page.load().await, PageLoad::Unavailable);
    assert!(matches!(page.lookup(), BoardLookup::Found(_)));
    assert_eq!(harness.host.alerts(), vec![SERVICE_UNAVAILABLE.to_string()]);
}

#[tokio::test]
async fn test_task_with_unknown_status_left_out_of_columns() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, boards_json());
    harness
        .transport
        .push_json(200, json!([task_json(1, 7, 0), task_json(2, 7, 4)]));
    let page = BoardPage::new(harness.ctx(), 7);

    assert_eq!(page.load().await, PageLoad::Ready);
    let counts: Vec<usize> = page.columns().iter().map(|c| c.len()).collect();
    assert_eq!(counts, vec![1, 0, 0, 0]);
    assert!(harness.host.alerts().is_empty());
}

async fn loaded_board_page(harness: &Harness) -> BoardPage {
    harness.transport.push_json(200, boards_json());
    harness.transport.push_json(200, json!([]));
    let page = BoardPage::new(harness.ctx(), 7);
    assert_eq!(page.load().await, PageLoad::Ready);
    page
}

#[tokio::test]
async fn test_update_board_keeps_saved_values_or_form_on_failure() {
    let harness = Harness::signed_in();
    let page = loaded_board_page(&harness).await;

    harness.transport.push_status(200);
    page.edit_form(|f| f.title = "Sprint 2".to_string());
    assert_eq!(page.update_board().await, Submission::Completed);
    assert_eq!(page.form().title, "Sprint 2");
    assert!(matches!(page.lookup(), BoardLookup::Found(b) if b.title == "Sprint 2"));

    harness.transport.push_status(500);
    page.edit_form(|f| f.description = "Q2 goals".to_string());
    assert_eq!(page.update_board().await, Submission::Failed);
    assert_eq!(page.form().description, "Q2 goals");
    assert_eq!(harness.host.alerts(), vec![GENERIC_FAILURE.to_string()]);
}

#[tokio::test]
async fn test_update_board_validates_description_first() {
    let harness = Harness::signed_in();
    let page = loaded_board_page(&harness).await;

    page.edit_form(|f| *f = BoardDraft::new("", ""));
    assert_eq!(page.update_board().await, Submission::Blocked);
    assert_eq!(
        harness.host.alerts(),
        vec!["Description couldn't be empty!".to_string()]
    );
    assert_eq!(harness.transport.request_count(), 2);
}

#[tokio::test]
async fn test_delete_board_needs_confirmation() {
    let harness = Harness::signed_in();
    let page = loaded_board_page(&harness).await;

    harness.host.answer_confirm(false);
    assert_eq!(page.delete_board().await, Submission::Cancelled);
    assert_eq!(harness.transport.request_count(), 2);

    harness.host.answer_confirm(true);
    harness.transport.push_status(200);
    assert_eq!(page.delete_board().await, Submission::Completed);
    assert_eq!(harness.host.navigations(), vec![Location::Boards]);
    assert!(harness
        .host
        .events()
        .contains(&taskboard_client::testing::HostEvent::Confirm(
            CONFIRM_DELETE_BOARD.to_string()
        )));
}

#[tokio::test]
async fn test_create_task_success_reloads_board() {
    let harness = Harness::signed_in();
    let page = loaded_board_page(&harness).await;
    harness.transport.push_status(200);

    page.open_task_form();
    page.fill_task_form(NewTask::new("Write docs", "API reference"));
    assert_eq!(page.create_task().await, Submission::Completed);
    assert_eq!(
        harness.host.navigations(),
        vec![Location::Board { board_id: 7 }]
    );
    assert_eq!(
        harness.transport.last_request().unwrap().body,
        Some(json!({"board_id": 7, "title": "Write docs", "description": "API reference"}))
    );
}

#[tokio::test]
async fn test_create_task_failure_clears_and_hides_form() {
    let harness = Harness::signed_in();
    let page = loaded_board_page(&harness).await;
    harness.transport.push_status(500);

    page.open_task_form();
    page.fill_task_form(NewTask::new("Write docs", "API reference"));
    assert_eq!(page.create_task().await, Submission::Failed);
    assert!(!page.modals().is_open(ModalId::CreateTask));
    assert_eq!(page.task_form(), NewTask::default());
}

#[tokio::test]
async fn test_create_task_rules_keep_form_open() {
    let harness = Harness::signed_in();
    let page = loaded_board_page(&harness).await;

    page.open_task_form();
    page.fill_task_form(NewTask::new("x".repeat(51), "API reference"));
    assert_eq!(page.create_task().await, Submission::Blocked);
    assert!(page.modals().is_open(ModalId::CreateTask));
    assert_eq!(
        harness.host.alerts(),
        vec!["Title couldn't be longer than 50 characters!".to_string()]
    );
}

/// Holds every request until released.
struct GatedTransport {
    gate: Notify,
    sent: parking_lot::Mutex<usize>,
}

#[async_trait]
impl Transport for GatedTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        *self.sent.lock() += 1;
        self.gate.notified().await;
        Ok(HttpResponse::new(200))
    }
}

#[tokio::test]
async fn test_duplicate_submission_ignored_while_first_in_flight() {
    let transport = Arc::new(GatedTransport {
        gate: Notify::new(),
        sent: parking_lot::Mutex::new(0),
    });
    let ctx = PageContext::connect(
        transport.clone(),
        Arc::new(MemoryCredentialStore::with_token("token")),
        Arc::new(RecordingHost::new()),
    );
    let page = Arc::new(BoardsPage::new(ctx));
    page.fill_form(BoardDraft::new("Sprint", "Q1 goals"));

    let first = tokio::spawn({
        let page = page.clone();
        async move { page.create_board().await }
    });
    while *transport.sent.lock() == 0 {
        tokio::task::yield_now().await;
    }

    assert_eq!(page.create_board().await, Submission::Ignored);
    transport.gate.notify_one();
    assert_eq!(first.await.unwrap(), Submission::Completed);
    assert_eq!(*transport.sent.lock(), 1);
}
