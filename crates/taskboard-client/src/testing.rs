//! In-memory doubles for the host and the transport.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use taskboard_core::{Location, PageHost};

use crate::traits::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    OverlayShown,
    OverlayHidden,
    Alert(String),
    Confirm(String),
    Navigated(Location),
}

/// Host that records every interaction and answers confirmations with a
/// fixed value.
#[derive(Debug)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
    confirm_answer: Mutex<bool>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: Mutex::new(true),
        }
    }

    pub fn declining() -> Self {
        let host = Self::new();
        host.answer_confirm(false);
        host
    }

    pub fn answer_confirm(&self, answer: bool) {
        *self.confirm_answer.lock() = answer;
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                HostEvent::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<Location> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                HostEvent::Navigated(location) => Some(*location),
                _ => None,
            })
            .collect()
    }

    pub fn overlay_visible(&self) -> bool {
        let mut visible = false;
        for event in self.events.lock().iter() {
            match event {
                HostEvent::OverlayShown => visible = true,
                HostEvent::OverlayHidden => visible = false,
                _ => {}
            }
        }
        visible
    }

    fn record(&self, event: HostEvent) {
        self.events.lock().push(event);
    }
}

impl PageHost for RecordingHost {
    fn show_overlay(&self) {
        self.record(HostEvent::OverlayShown);
    }

    fn hide_overlay(&self) {
        self.record(HostEvent::OverlayHidden);
    }

    fn alert(&self, message: &str) {
        self.record(HostEvent::Alert(message.to_string()));
    }

    fn confirm(&self, question: &str) -> bool {
        self.record(HostEvent::Confirm(question.to_string()));
        *self.confirm_answer.lock()
    }

    fn navigate(&self, location: Location) {
        self.record(HostEvent::Navigated(location));
    }
}

/// Transport answering from a queue of canned responses. An exhausted queue
/// answers with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: HttpResponse) {
        self.replies.lock().push_back(Ok(response));
    }

    pub fn push_status(&self, status: u16) {
        self.push(HttpResponse::new(status));
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(HttpResponse::new(status).with_json(&body));
    }

    pub fn push_failure(&self, reason: impl Into<String>) {
        self.replies.lock().push_back(Err(reason.into()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests.lock().iter().map(|r| r.path.clone()).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        let next = self.replies.lock().pop_front();
        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(TransportError::Request(reason)),
            None => Err(TransportError::Request(
                "no scripted response left".to_string(),
            )),
        }
    }
}
