//! Headless fakes shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use futures::channel::oneshot;
use ruffo_chat::api::{ChatBackend, ChatError, ChatResult};
use ruffo_chat::controller::WidgetView;
use ruffo_chat::render::{RenderedMessage, SubmitIcon};
use ruffo_chat::types::{ChatRequest, ChatResponse, Role};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    ClearInput,
    FocusInput,
    Append(RenderedMessage),
    Replace(Vec<RenderedMessage>),
    ShowTyping,
    RemoveTyping,
    ControlsEnabled(bool),
    Icon(SubmitIcon),
    Scroll,
}

/// Keeps the visible state plus every call, in order.
pub struct RecordingView {
    pub events: RefCell<Vec<ViewEvent>>,
    pub messages: RefCell<Vec<RenderedMessage>>,
    pub typing: Cell<bool>,
    pub controls_enabled: Cell<bool>,
    pub icon: Cell<SubmitIcon>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            messages: RefCell::new(Vec::new()),
            typing: Cell::new(false),
            controls_enabled: Cell::new(true),
            icon: Cell::new(SubmitIcon::Send),
        }
    }

    fn record(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn messages(&self) -> Vec<(Role, String)> {
        self.messages
            .borrow()
            .iter()
            .map(|message| (message.role, message.text.clone()))
            .collect()
    }

    pub fn count(&self, event: &ViewEvent) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    pub fn assert_idle(&self) {
        assert!(!self.typing.get(), "typing indicator still shown");
        assert!(self.controls_enabled.get(), "controls still disabled");
        assert_eq!(self.icon.get(), SubmitIcon::Send);
        assert_eq!(
            self.events.borrow().last(),
            Some(&ViewEvent::FocusInput),
            "input not refocused last"
        );
    }
}

impl WidgetView for RecordingView {
    fn clear_input(&self) {
        self.record(ViewEvent::ClearInput);
    }

    fn focus_input(&self) {
        self.record(ViewEvent::FocusInput);
    }

    fn append_message(&self, message: RenderedMessage) {
        self.messages.borrow_mut().push(message.clone());
        self.record(ViewEvent::Append(message));
    }

    fn replace_messages(&self, messages: Vec<RenderedMessage>) {
        *self.messages.borrow_mut() = messages.clone();
        self.record(ViewEvent::Replace(messages));
    }

    fn show_typing(&self) {
        self.typing.set(true);
        self.record(ViewEvent::ShowTyping);
    }

    fn remove_typing(&self) {
        self.typing.set(false);
        self.record(ViewEvent::RemoveTyping);
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.controls_enabled.set(enabled);
        self.record(ViewEvent::ControlsEnabled(enabled));
    }

    fn set_submit_icon(&self, icon: SubmitIcon) {
        self.icon.set(icon);
        self.record(ViewEvent::Icon(icon));
    }

    fn scroll_to_bottom(&self) {
        self.record(ViewEvent::Scroll);
    }
}

/// Replays canned results and records every request it receives.
pub struct ScriptedBackend {
    replies: RefCell<VecDeque<ChatResult<ChatResponse>>>,
    pub requests: RefCell<Vec<ChatRequest>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<ChatResult<ChatResponse>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
            gate: RefCell::new(None),
        }
    }

    /// The first request waits until `gate` fires.
    pub fn gated(self, gate: oneshot::Receiver<()>) -> Self {
        self.gate.replace(Some(gate));
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ChatBackend for ScriptedBackend {
    async fn chat(&self, request: &ChatRequest) -> ChatResult<ChatResponse> {
        self.requests.borrow_mut().push(request.clone());
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("no scripted reply left")
    }
}

pub fn reply(thread_id: &str, response: &str) -> ChatResult<ChatResponse> {
    Ok(ChatResponse {
        thread_id: thread_id.to_string(),
        response: response.to_string(),
    })
}

pub fn status_failure(code: u16) -> ChatResult<ChatResponse> {
    let status = reqwest::StatusCode::from_u16(code).expect("valid status code");
    Err(ChatError::Status(status))
}

pub fn malformed_body() -> ChatResult<ChatResponse> {
    let err = serde_json::from_str::<ChatResponse>("<html>oops</html>")
        .expect_err("html is not a chat response");
    Err(ChatError::Decode(err))
}
