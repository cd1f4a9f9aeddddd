//! Client side of the Ruffo chat API.
//!
//! `ChatBackend` is the seam the controller talks to; `HttpChatBackend` is the
//! reqwest implementation used by the app.

use crate::config::WidgetConfig;
use crate::types::{ChatRequest, ChatResponse, HealthStatus};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

pub const CHAT_PATH: &str = "/api/chat";
pub const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat endpoint returned {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Remote chat endpoint. Futures are not `Send`: the widget runs on the UI thread.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn chat(&self, request: &ChatRequest) -> ChatResult<ChatResponse>;
}

#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    client: Client,
    chat_url: String,
    health_url: String,
}

impl HttpChatBackend {
    pub fn new(api_base: &str) -> Self {
        let base = api_base.trim_end_matches('/');
        Self {
            client: Client::new(),
            chat_url: format!("{base}{CHAT_PATH}"),
            health_url: format!("{base}{HEALTH_PATH}"),
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(&config.api_base)
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    pub async fn health(&self) -> ChatResult<HealthStatus> {
        let response = self.client.get(&self.health_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn chat(&self, request: &ChatRequest) -> ChatResult<ChatResponse> {
        let response = self.client.post(&self.chat_url).json(request).send().await?;
        let status = response.status();
        // Error bodies are never inspected.
        if !status.is_success() {
            return Err(ChatError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
