use crate::api::HttpChatBackend;
use crate::config::WidgetConfig;
use crate::controller::{ChatController, KeyAction, WidgetView};
use crate::render::{ASSISTANT_AVATAR, GREETING, RenderedMessage, SubmitIcon};
use crate::theme::WIDGET_CSS;
use crate::types::Role;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{info, warn};

pub const MESSAGES_ID: &str = "messages";
pub const FORM_ID: &str = "chat-form";
pub const INPUT_ID: &str = "message-input";
pub const SEND_BUTTON_ID: &str = "send-button";
pub const LOADING_ID: &str = "loading";

const SCROLL_SCRIPT: &str = r#"
requestAnimationFrame(() => {
    const list = document.getElementById("messages");
    if (list) { list.scrollTop = list.scrollHeight; }
});
"#;

const FOCUS_SCRIPT: &str = r#"document.getElementById("message-input")?.focus();"#;

/// Installs `window.clearChat()` for the developer console.
const DEBUG_HOOK_SCRIPT: &str = r#"
window.clearChat = () => { dioxus.send(true); };
await new Promise(() => {});
"#;

type WidgetController = ChatController<HttpChatBackend, SignalView>;

/// `WidgetView` over the signals `ChatWidget` renders from.
#[derive(Clone, Copy)]
struct SignalView {
    messages: Signal<Vec<RenderedMessage>>,
    input: Signal<String>,
    typing: Signal<bool>,
    controls_enabled: Signal<bool>,
    submit_icon: Signal<SubmitIcon>,
    focus_requests: Signal<u64>,
    scroll_requests: Signal<u64>,
}

impl WidgetView for SignalView {
    fn clear_input(&self) {
        let mut input = self.input;
        input.set(String::new());
    }

    fn focus_input(&self) {
        let mut requests = self.focus_requests;
        requests.with_mut(|count| *count += 1);
    }

    fn append_message(&self, message: RenderedMessage) {
        let mut messages = self.messages;
        messages.with_mut(|list| list.push(message));
    }

    fn replace_messages(&self, replacement: Vec<RenderedMessage>) {
        let mut messages = self.messages;
        messages.set(replacement);
    }

    fn show_typing(&self) {
        let mut typing = self.typing;
        typing.set(true);
    }

    fn remove_typing(&self) {
        let mut typing = self.typing;
        typing.set(false);
    }

    fn set_controls_enabled(&self, enabled: bool) {
        let mut controls_enabled = self.controls_enabled;
        controls_enabled.set(enabled);
    }

    fn set_submit_icon(&self, icon: SubmitIcon) {
        let mut submit_icon = self.submit_icon;
        submit_icon.set(icon);
    }

    // Picked up by an effect after the next render.
    fn scroll_to_bottom(&self) {
        let mut requests = self.scroll_requests;
        requests.with_mut(|count| *count += 1);
    }
}

#[component]
pub fn App() -> Element {
    let config = try_use_context::<WidgetConfig>().unwrap_or_default();
    rsx! {
        style { dangerous_inner_html: WIDGET_CSS }
        ChatWidget { api_base: config.api_base }
    }
}

#[component]
fn ChatWidget(api_base: String) -> Element {
    let messages = use_signal(|| vec![RenderedMessage::new(GREETING, Role::Assistant)]);
    let mut input = use_signal(String::new);
    let typing = use_signal(|| false);
    let controls_enabled = use_signal(|| true);
    let submit_icon = use_signal(SubmitIcon::default);
    let focus_requests = use_signal(|| 0u64);
    let scroll_requests = use_signal(|| 0u64);

    let controller: Rc<WidgetController> = use_hook(|| {
        let view = SignalView {
            messages,
            input,
            typing,
            controls_enabled,
            submit_icon,
            focus_requests,
            scroll_requests,
        };
        Rc::new(ChatController::new(HttpChatBackend::new(&api_base), view))
    });

    use_effect({
        let controller = controller.clone();
        move || controller.init()
    });

    use_effect(move || {
        if focus_requests() > 0 {
            document::eval(FOCUS_SCRIPT);
        }
    });

    use_effect(move || {
        if scroll_requests() > 0 {
            document::eval(SCROLL_SCRIPT);
        }
    });

    let hook_controller = controller.clone();
    use_future(move || {
        let controller = hook_controller.clone();
        async move {
            let mut hook = document::eval(DEBUG_HOOK_SCRIPT);
            while hook.recv::<bool>().await.is_ok() {
                controller.reset();
            }
        }
    });

    let probe_controller = controller.clone();
    use_future(move || {
        let controller = probe_controller.clone();
        async move {
            match controller.backend().health().await {
                Ok(health) => info!(status = %health.status, agent = %health.agent, "Chat API reachable"),
                Err(err) => warn!(error = %err, "Chat API health check failed"),
            }
        }
    });

    let submit = {
        let controller = controller.clone();
        move |text: String| {
            let controller = controller.clone();
            spawn(async move {
                controller.submit(&text).await;
            });
        }
    };
    let submit_on_enter = submit.clone();

    let messages_snapshot = messages();
    let enabled = controls_enabled();

    rsx! {
        div { class: "chat-container",
            div { class: "chat-header",
                div { class: "header-avatar", "{ASSISTANT_AVATAR}" }
                div { class: "header-info",
                    h1 { "Ruffo" }
                    p { "El perro más rockero de Animalicha" }
                }
            }
            div { id: MESSAGES_ID, class: "messages",
                for (i, message) in messages_snapshot.into_iter().enumerate() {
                    MessageBubble { key: "{i}", message }
                }
                if typing() {
                    TypingIndicator {}
                }
            }
            form { id: FORM_ID, class: "input-form",
                onsubmit: move |ev: FormEvent| {
                    ev.prevent_default();
                    submit(input());
                },
                textarea {
                    id: INPUT_ID, rows: "1", placeholder: "Escribe tu mensaje...",
                    value: "{input}", oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        let action = KeyAction::classify(ev.key() == Key::Enter, ev.modifiers().shift());
                        if action == KeyAction::Submit {
                            ev.prevent_default();
                            submit_on_enter(input());
                        }
                    },
                    disabled: !enabled, autofocus: true,
                }
                button {
                    id: SEND_BUTTON_ID, class: "send-button", r#type: "submit",
                    disabled: !enabled,
                    dangerous_inner_html: submit_icon().markup(),
                }
            }
            div { id: LOADING_ID, class: "loading-overlay", hidden: true,
                div { class: "loading-spinner" }
            }
        }
    }
}

#[component]
fn MessageBubble(message: RenderedMessage) -> Element {
    rsx! {
        div { class: format_args!("message {}", message.role.as_str()),
            div { class: "message-avatar", "{message.avatar()}" }
            div { class: "message-bubble", dangerous_inner_html: "{message.body_html}" }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message assistant typing",
            div { class: "message-avatar", "{ASSISTANT_AVATAR}" }
            div { class: "message-bubble",
                div { class: "typing-indicator",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
