// src/services/chat_client.rs
// DOCUMENTATION: Enhanced group chat client
// PURPOSE: Send/fetch messages and keep a renderer fed through polling

use crate::config::Config;
use crate::errors::{ClientError, ErrorObserver};
use crate::models::{
    EditMessageRequest, MessageList, MessageType, OnlineMembersResponse, SearchFilter,
    SearchResults, SendMessageRequest, TypingStatusRequest,
};
use crate::ports::MessageRenderer;
use crate::services::{spawn_interval, ApiClient, TaskSlot};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

/// Tunables for chat polling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatSettings {
    /// Time between message list refreshes (default 5 s)
    pub poll_interval: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
        }
    }
}

impl ChatSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            poll_interval: config.chat_poll_interval(),
        }
    }
}

struct Shared {
    group_id: i64,
    api: ApiClient,
    renderer: Arc<dyn MessageRenderer>,
    on_error: Option<ErrorObserver>,
}

impl Shared {
    fn path(&self, suffix: &str) -> String {
        format!("/api/groups/{}/chat/{}", self.group_id, suffix)
    }

    fn messages_path(&self) -> String {
        self.path("enhanced")
    }

    async fn fetch(&self) -> Result<MessageList, ClientError> {
        self.api
            .get_json(&self.messages_path(), &[], "Failed to get messages")
            .await
    }

    async fn poll_once(&self) {
        match self.fetch().await {
            Ok(list) => {
                log::debug!(
                    "Group {}: rendering {} messages",
                    self.group_id,
                    list.messages.len()
                );
                self.renderer.render(&list.messages);
            }
            Err(e) => {
                log::error!("Error updating messages: {}", e);
                if let Some(observer) = &self.on_error {
                    observer(&e);
                }
            }
        }
    }
}

/// Chat client for one group
pub struct ChatClient {
    shared: Arc<Shared>,
    settings: ChatSettings,
    updates: TaskSlot,
}

impl ChatClient {
    pub fn new(group_id: i64, api: ApiClient, renderer: Arc<dyn MessageRenderer>) -> Self {
        Self {
            shared: Arc::new(Shared {
                group_id,
                api,
                renderer,
                on_error: None,
            }),
            settings: ChatSettings::default(),
            updates: TaskSlot::default(),
        }
    }

    pub fn with_settings(mut self, settings: ChatSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Receive failures that the polling loop swallows
    pub fn with_error_observer(mut self, observer: ErrorObserver) -> Self {
        match Arc::get_mut(&mut self.shared) {
            Some(shared) => shared.on_error = Some(observer),
            None => log::warn!("Error observer ignored: chat updates already running"),
        }
        self
    }

    /// Post a message, optionally as a reply
    pub async fn send_message(
        &self,
        message: &str,
        message_type: MessageType,
        reply_to_message_id: Option<i64>,
    ) -> Result<Value, ClientError> {
        let request = SendMessageRequest {
            message: message.to_string(),
            message_type,
            reply_to_message_id,
        };
        request.validate()?;

        self.shared
            .api
            .send_json(
                Method::POST,
                &self.shared.messages_path(),
                Some(&request),
                "Failed to send message",
            )
            .await
    }

    pub async fn get_messages(&self) -> Result<MessageList, ClientError> {
        self.shared.fetch().await
    }

    pub async fn mark_message_as_read(&self, message_id: i64) -> Result<Value, ClientError> {
        let path = self.shared.path(&format!("messages/{}/read", message_id));
        self.shared
            .api
            .send_json::<Value, _>(Method::POST, &path, None, "Failed to mark message as read")
            .await
    }

    /// Replace the text of one of the user's own messages
    pub async fn edit_message(&self, message_id: i64, message: &str) -> Result<Value, ClientError> {
        let request = EditMessageRequest {
            message: message.to_string(),
        };
        request.validate()?;

        let path = self.shared.path(&format!("messages/{}/edit", message_id));
        self.shared
            .api
            .send_json(Method::PUT, &path, Some(&request), "Failed to edit message")
            .await
    }

    /// Remove one of the user's own messages
    pub async fn delete_message(&self, message_id: i64) -> Result<Value, ClientError> {
        let path = self.shared.path(&format!("messages/{}/delete", message_id));
        self.shared
            .api
            .send_json::<Value, _>(Method::DELETE, &path, None, "Failed to delete message")
            .await
    }

    pub async fn set_typing(&self, is_typing: bool) -> Result<Value, ClientError> {
        self.shared
            .api
            .send_json(
                Method::POST,
                &self.shared.path("typing"),
                Some(&TypingStatusRequest { is_typing }),
                "Failed to update typing status",
            )
            .await
    }

    pub async fn online_members(&self) -> Result<OnlineMembersResponse, ClientError> {
        self.shared
            .api
            .get_json(
                &self.shared.path("online-members"),
                &[],
                "Failed to fetch online members",
            )
            .await
    }

    /// Full-text search over the group's messages, newest first
    pub async fn search_messages(
        &self,
        query: &str,
        filter: &SearchFilter,
    ) -> Result<SearchResults, ClientError> {
        if query.trim().is_empty() {
            return Err(ClientError::InvalidInput("search query is required".to_string()));
        }

        let mut params = vec![("q", query.to_string())];
        if let Some(message_type) = &filter.message_type {
            let value = serde_json::to_value(message_type)?;
            if let Some(name) = value.as_str() {
                params.push(("type", name.to_string()));
            }
        }
        if let Some(limit) = filter.limit {
            params.push(("limit", limit.to_string()));
        }

        self.shared
            .api
            .get_json(&self.shared.path("search"), &params, "Failed to search messages")
            .await
    }

    /// Start redelivering the message list to the renderer
    /// DOCUMENTATION: Replaces any running loop. Errors never stop it. A zero
    /// poll interval fails with InvalidInput and starts nothing.
    pub fn start_message_updates(&self) -> Result<(), ClientError> {
        let shared = self.shared.clone();
        let task = spawn_interval(
            "chat-updates",
            self.settings.poll_interval,
            move || {
                let shared = shared.clone();
                async move { shared.poll_once().await }
            },
        )?;
        self.updates.replace(task);
        log::info!(
            "Group {}: chat updates every {:?}",
            self.shared.group_id,
            self.settings.poll_interval
        );
        Ok(())
    }

    /// Cancel the pending poll. Safe to call repeatedly.
    pub fn stop_message_updates(&self) {
        if self.updates.clear() {
            log::info!("Group {}: chat updates stopped", self.shared.group_id);
        }
    }

    pub fn is_updating(&self) -> bool {
        self.updates.is_active()
    }
}
