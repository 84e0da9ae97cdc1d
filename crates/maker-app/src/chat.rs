//! Community chat pass-through.
//!
//! Chat is owned end to end by the external realtime service; this module
//! only maps its message envelope onto [`ChatMessage`] and keeps the panel's
//! in-memory transcript. No business logic lives here.

use crate::AppError;
use async_trait::async_trait;
use maker_auth::User;
use maker_commerce::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Envelope kind carrying chat text.
const CHAT_KIND: &str = "chat";

/// How much history the panel pulls on connect.
const RECENT_LIMIT: usize = 50;

/// A chat message as the panel renders it. Ephemeral; never persisted by
/// this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub user_id: UserId,
    pub user_name: String,
    pub message: String,
    /// Millisecond timestamp from the realtime service.
    pub timestamp: i64,
}

/// The realtime service's message envelope, consumed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeEnvelope {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: UserId,
    pub timestamp: i64,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub metadata: Value,
}

impl RealtimeEnvelope {
    /// Map a chat envelope onto a [`ChatMessage`]; other kinds map to none.
    pub fn to_chat_message(&self) -> Option<ChatMessage> {
        if self.kind != CHAT_KIND {
            return None;
        }
        Some(ChatMessage {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            user_name: display_name(&self.metadata),
            message: self
                .data
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            timestamp: self.timestamp,
        })
    }
}

/// A presence entry from the realtime service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEntry {
    pub user_id: UserId,
    #[serde(default)]
    pub metadata: Value,
}

impl PresenceEntry {
    /// Map a presence entry onto a displayable [`User`].
    pub fn to_user(&self) -> User {
        let email = self
            .metadata
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or_default();
        User::new(self.user_id.clone(), email).with_display_name(display_name(&self.metadata))
    }
}

fn display_name(metadata: &Value) -> String {
    metadata
        .get("displayName")
        .and_then(Value::as_str)
        .unwrap_or("Anonymous")
        .to_string()
}

/// The external realtime channel, consumed at its interface boundary only.
#[async_trait]
pub trait RealtimeClient: Send + Sync {
    /// Join a channel with presence metadata.
    async fn subscribe(
        &self,
        channel: &str,
        user_id: &UserId,
        metadata: Value,
    ) -> Result<(), AppError>;

    /// Fetch the most recent messages on a channel.
    async fn recent(&self, channel: &str, limit: usize)
        -> Result<Vec<RealtimeEnvelope>, AppError>;

    /// Publish an envelope to a channel.
    async fn publish(
        &self,
        channel: &str,
        kind: &str,
        data: Value,
        user_id: &UserId,
        metadata: Value,
    ) -> Result<(), AppError>;

    /// Leave the channel.
    async fn unsubscribe(&self, channel: &str) -> Result<(), AppError>;
}

/// The community chat panel.
///
/// Holds the transcript and the presence list; the realtime transport pushes
/// inbound envelopes through [`ChatPanel::apply_envelope`] and presence
/// changes through [`ChatPanel::apply_presence`].
pub struct ChatPanel {
    channel: String,
    user: User,
    messages: Vec<ChatMessage>,
    online: Vec<User>,
}

impl ChatPanel {
    /// Join the channel and pull recent history.
    pub async fn connect(
        client: &dyn RealtimeClient,
        channel: impl Into<String>,
        user: User,
    ) -> Result<Self, AppError> {
        let channel = channel.into();
        client
            .subscribe(&channel, &user.id, presence_metadata(&user))
            .await?;

        let messages = client
            .recent(&channel, RECENT_LIMIT)
            .await?
            .iter()
            .filter_map(RealtimeEnvelope::to_chat_message)
            .collect();

        Ok(Self {
            channel,
            user,
            messages,
            online: Vec::new(),
        })
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Who is currently present.
    pub fn online(&self) -> &[User] {
        &self.online
    }

    /// Apply an inbound envelope; non-chat kinds are ignored.
    pub fn apply_envelope(&mut self, envelope: &RealtimeEnvelope) {
        if let Some(message) = envelope.to_chat_message() {
            self.messages.push(message);
        }
    }

    /// Replace the presence list.
    pub fn apply_presence(&mut self, entries: &[PresenceEntry]) {
        self.online = entries.iter().map(PresenceEntry::to_user).collect();
    }

    /// Send a message. Empty or whitespace-only input is dropped without a
    /// collaborator call.
    pub async fn send(&self, client: &dyn RealtimeClient, text: &str) -> Result<(), AppError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        client
            .publish(
                &self.channel,
                CHAT_KIND,
                json!({ "text": text, "timestamp": now_millis() }),
                &self.user.id,
                presence_metadata(&self.user),
            )
            .await
    }

    /// Leave the channel.
    pub async fn disconnect(&self, client: &dyn RealtimeClient) -> Result<(), AppError> {
        client.unsubscribe(&self.channel).await
    }
}

fn presence_metadata(user: &User) -> Value {
    json!({
        "displayName": user.handle(),
        "email": user.email,
    })
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
