//! Conversation lifecycle for one widget instance.
//!
//! `ChatController` owns the thread identifier and the loading flag. It talks to the
//! page only through [`WidgetView`] and to the server only through [`ChatBackend`], so
//! it can be driven headlessly.

use crate::api::ChatBackend;
use crate::render::{FALLBACK_REPLY, GREETING, RenderedMessage, SubmitIcon};
use crate::types::{ChatRequest, Role};
use std::cell::{Cell, RefCell};
use tracing::{debug, error, info};

const PREVIEW_CHARS: usize = 50;

/// Render target for the widget.
pub trait WidgetView {
    fn clear_input(&self);
    fn focus_input(&self);
    fn append_message(&self, message: RenderedMessage);
    fn replace_messages(&self, messages: Vec<RenderedMessage>);
    fn show_typing(&self);
    fn remove_typing(&self);
    fn set_controls_enabled(&self, enabled: bool);
    fn set_submit_icon(&self, icon: SubmitIcon);
    /// Deferred; implementations must not scroll synchronously.
    fn scroll_to_bottom(&self);
}

/// What a key press in the text field should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    /// Let the field insert a literal newline.
    InsertNewline,
    Ignore,
}

impl KeyAction {
    pub fn classify(is_enter: bool, shift: bool) -> Self {
        match (is_enter, shift) {
            (true, false) => KeyAction::Submit,
            (true, true) => KeyAction::InsertNewline,
            (false, _) => KeyAction::Ignore,
        }
    }
}

pub struct ChatController<B, V> {
    backend: B,
    view: V,
    thread_id: RefCell<Option<String>>,
    loading: Cell<bool>,
}

impl<B: ChatBackend, V: WidgetView> ChatController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            thread_id: RefCell::new(None),
            loading: Cell::new(false),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn thread_id(&self) -> Option<String> {
        self.thread_id.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn init(&self) {
        self.view.focus_input();
        self.view.scroll_to_bottom();
        info!("🐕 Ruffo Chat initialized!");
    }

    /// Returns `false` when the submission was dropped.
    pub async fn submit(&self, raw: &str) -> bool {
        let message = raw.trim();
        if message.is_empty() || self.loading.get() {
            return false;
        }

        self.view.clear_input();
        self.render(message, Role::User);
        self.send(message).await;
        true
    }

    pub async fn send(&self, message: &str) {
        let mut loading = LoadingGuard::engage(self);

        let request = ChatRequest {
            message: message.to_string(),
            thread_id: self.thread_id(),
        };
        debug!(
            thread_id = request.thread_id.as_deref().unwrap_or("-"),
            message = %preview(message),
            "Sending chat request"
        );

        let outcome = self.backend.chat(&request).await;
        loading.settle();

        match outcome {
            Ok(reply) => {
                info!(
                    thread_id = %reply.thread_id,
                    response_length = reply.response.len(),
                    "Chat response received"
                );
                *self.thread_id.borrow_mut() = Some(reply.thread_id);
                self.render(&reply.response, Role::Assistant);
            }
            Err(err) => {
                error!(error = %err, "Error sending message");
                self.render(FALLBACK_REPLY, Role::Assistant);
            }
        }
    }

    pub fn render(&self, text: &str, role: Role) {
        self.view.append_message(RenderedMessage::new(text, role));
        self.view.scroll_to_bottom();
    }

    pub fn reset(&self) {
        *self.thread_id.borrow_mut() = None;
        self.view
            .replace_messages(vec![RenderedMessage::new(GREETING, Role::Assistant)]);
        info!("Chat cleared");
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        self.view.set_controls_enabled(!loading);
        self.view.set_submit_icon(if loading {
            SubmitIcon::Spinner
        } else {
            SubmitIcon::Send
        });
    }
}

/// Holds the loading state for one request and releases it on every exit path,
/// including a dropped future.
struct LoadingGuard<'a, B: ChatBackend, V: WidgetView> {
    controller: &'a ChatController<B, V>,
    typing: bool,
}

impl<'a, B: ChatBackend, V: WidgetView> LoadingGuard<'a, B, V> {
    fn engage(controller: &'a ChatController<B, V>) -> Self {
        controller.set_loading(true);
        controller.view.show_typing();
        controller.view.scroll_to_bottom();
        Self {
            controller,
            typing: true,
        }
    }

    /// The request has an outcome; take the typing row down before it is rendered.
    fn settle(&mut self) {
        if std::mem::take(&mut self.typing) {
            self.controller.view.remove_typing();
        }
    }
}

impl<B: ChatBackend, V: WidgetView> Drop for LoadingGuard<'_, B, V> {
    fn drop(&mut self) {
        self.settle();
        self.controller.set_loading(false);
        self.controller.view.focus_input();
    }
}

fn preview(message: &str) -> String {
    message.chars().take(PREVIEW_CHARS).collect()
}
