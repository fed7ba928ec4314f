// src/models/chat.rs
// DOCUMENTATION: Data structures for enhanced group chat
// PURPOSE: Request bodies and response envelopes for the chat endpoints

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// A chat message as returned by the backend
/// DOCUMENTATION: Never interpreted here, only forwarded to the renderer
pub type ChatMessage = Value;

/// Kind of message being sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    Location,
    Recommendation,
    /// Any type the backend knows that this crate does not
    #[serde(untagged)]
    Other(String),
}

/// Body of POST /chat/enhanced
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1))]
    pub message: String,
    pub message_type: MessageType,
    /// Serialized as null when absent
    pub reply_to_message_id: Option<i64>,
}

/// Envelope of GET /chat/enhanced
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MessageList {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Envelope of GET /chat/search
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<ChatMessage>,
    /// Echo of the search query
    #[serde(default)]
    pub query: String,
    #[serde(default, alias = "total")]
    pub total_found: usize,
}

/// Narrowing of a message search
/// DOCUMENTATION: `None` fields are left to the backend (all types, 20 hits)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub message_type: Option<MessageType>,
    pub limit: Option<u32>,
}

/// Body of PUT /chat/messages/{id}/edit
#[derive(Debug, Clone, Serialize, Validate)]
pub struct EditMessageRequest {
    #[validate(length(min = 1))]
    pub message: String,
}

/// Body of POST /chat/typing
#[derive(Debug, Clone, Serialize)]
pub struct TypingStatusRequest {
    pub is_typing: bool,
}

/// One entry of GET /chat/online-members
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OnlineMember {
    pub user_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_seen: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_online: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OnlineMembersResponse {
    #[serde(default)]
    pub online_members: Vec<OnlineMember>,
    #[serde(default)]
    pub total_online: usize,
}
