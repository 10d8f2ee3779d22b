//! # Sender Module
//!
//! The chat-platform transport is an external collaborator, specified only
//! at this boundary. An adapter implementing [`Sender`] turns a rendered
//! [`TelegramContainer`] into platform API calls.

use anyhow::Result;
use async_trait::async_trait;

use crate::container::TelegramContainer;

/// Delivers rendered turns to the chat platform.
#[async_trait]
pub trait Sender: Send + Sync {
    /// Deliver a rendered turn and return the id of the message now carrying
    /// the menu. Depending on `container.appear_type` the adapter edits the
    /// old message in place (returning its id), sends a new one, or sends a
    /// new one and deletes the old.
    async fn send_msg(&self, container: TelegramContainer) -> Result<i64>;

    /// Best-effort deletion of a message. Failures are the adapter's to log.
    async fn delete_message(&self, message_id: i64, chat_id: i64);

    /// Bot account name, used to strip `@botname` mentions from inline
    /// messages. Resolved once at manager construction.
    async fn bot_name(&self) -> Result<String>;
}
