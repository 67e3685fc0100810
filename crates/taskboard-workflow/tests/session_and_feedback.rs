mod common;

use common::{boards_json, Harness};
use taskboard_client::testing::HostEvent;
use taskboard_core::Location;
use taskboard_workflow::{
    AccountPage, BoardPage, BoardsPage, LandingLoad, LandingPage, PageLoad, TaskPage,
    SERVICE_UNAVAILABLE,
};

#[tokio::test]
async fn test_gated_pages_without_credential_redirect_without_fetching() {
    let harness = Harness::signed_out();
    let ctx = harness.ctx();

    assert_eq!(BoardsPage::new(ctx.clone()).load().await, PageLoad::Redirected);
    assert_eq!(BoardPage::new(ctx.clone(), 7).load().await, PageLoad::Redirected);
    assert_eq!(TaskPage::new(ctx.clone(), 7, 3).load().await, PageLoad::Redirected);
    assert_eq!(AccountPage::new(ctx).load().await, PageLoad::Redirected);

    assert_eq!(harness.transport.request_count(), 0);
    assert_eq!(harness.host.navigations(), vec![Location::Landing; 4]);
}

#[tokio::test]
async fn test_rejected_session_on_first_fetch_redirects_and_drops_credential() {
    let harness = Harness::signed_in();
    harness.transport.push_status(401);

    let page = BoardsPage::new(harness.ctx());
    assert_eq!(page.load().await, PageLoad::Redirected);
    assert_eq!(harness.host.navigations(), vec![Location::Landing]);
    assert!(harness.host.alerts().is_empty());
    assert_eq!(harness.token(), None);
}

#[tokio::test]
async fn test_overlay_hidden_before_alert_on_transport_failure() {
    let harness = Harness::signed_in();
    harness.transport.push_failure("connection refused");

    let page = BoardsPage::new(harness.ctx());
    assert_eq!(page.load().await, PageLoad::Unavailable);
    assert_eq!(
        harness.host.events(),
        vec![
            HostEvent::OverlayShown,
            HostEvent::OverlayHidden,
            HostEvent::Alert(SERVICE_UNAVAILABLE.to_string()),
        ]
    );
}

#[tokio::test]
async fn test_overlay_hidden_before_navigation() {
    let harness = Harness::signed_in();
    harness.transport.push_json(200, boards_json());

    let page = LandingPage::new(harness.ctx());
    assert_eq!(page.load().await, LandingLoad::SignedIn);
    assert_eq!(
        harness.host.events(),
        vec![
            HostEvent::OverlayShown,
            HostEvent::OverlayHidden,
            HostEvent::Navigated(Location::Boards),
        ]
    );
}

#[tokio::test]
async fn test_rotated_cookie_replaces_credential() {
    let harness = Harness::signed_in();
    harness.transport.push(
        taskboard_client::HttpResponse::new(200)
            .with_json(&boards_json())
            .with_header("Set-Cookie", "x-auth=rotated; Max-Age=86400; Path=/"),
    );

    BoardsPage::new(harness.ctx()).load().await;
    assert_eq!(harness.token().as_deref(), Some("rotated"));
    assert_eq!(
        harness.transport.last_request().unwrap().header("Authorization"),
        Some("Bearer token")
    );
}
