//! Markup produced for the message list.
//!
//! Message bodies are plain text: they are escaped and only line breaks survive.
//! No markdown, no link detection.

use crate::types::Role;

pub const ASSISTANT_AVATAR: &str = "🐕";
pub const USER_AVATAR: &str = "👤";

pub const GREETING: &str = "¡Guau, guau! 🐾 Soy Ruffo, el perro más rockero de Animalicha 🤘\n\
¿En qué te puedo ayudar hoy, humano-amigo?";

pub const FALLBACK_REPLY: &str = "🐕 ¡Guau! Tuve un problema técnico. ¿Puedes intentar de nuevo?";

const SEND_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M2.01 21L23 12 2.01 3 2 10l15 2-15 2z"/></svg>"#;
const SPINNER_ICON: &str =
    r#"<div class="loading-spinner" style="width:20px;height:20px;border-width:2px;"></div>"#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitIcon {
    #[default]
    Send,
    Spinner,
}

impl SubmitIcon {
    pub fn markup(self) -> &'static str {
        match self {
            SubmitIcon::Send => SEND_ICON,
            SubmitIcon::Spinner => SPINNER_ICON,
        }
    }
}

/// A message bubble ready to be appended to the list.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedMessage {
    pub role: Role,
    pub text: String,
    pub body_html: String,
}

impl RenderedMessage {
    pub fn new(text: &str, role: Role) -> Self {
        Self {
            role,
            text: text.to_string(),
            body_html: format_body(text),
        }
    }

    pub fn avatar(&self) -> &'static str {
        avatar_for(self.role)
    }
}

pub fn avatar_for(role: Role) -> &'static str {
    match role {
        Role::Assistant => ASSISTANT_AVATAR,
        Role::User => USER_AVATAR,
    }
}

/// Escapes markup-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escaped text with `\n` turned into `<br>`.
pub fn format_body(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}
