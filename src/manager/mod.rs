//! # Callback Manager Module
//!
//! The orchestrator: resolves inbound callbacks and inline messages to
//! processor invocations, manages the session lifecycle, and renders
//! output. Split into submodules:
//! - `callback_handler`: button-press resolution ([`CallbackManager::process_callback`])
//! - `message_handler`: inline-trigger routing ([`CallbackManager::process_msg`])
//! - `render`: session → outbound container
//! - `registry`: processor function registries

mod callback_handler;
mod message_handler;
mod registry;
mod render;

pub use registry::{InlineProcessorFn, InlineQuery, ProcessorFn};

use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::Error;
use crate::sender::Sender;
use crate::session::SessionState;
use crate::storage::Storage;
use crate::types::AppearType;
use registry::ProcessorRegistry;

const STORAGE_KEY_PREFIX: &str = "callback-processor-msg-id";

/// Hook invoked when a callback arrives for a message with no stored
/// session (e.g. state expired or the process restarted with volatile
/// storage). Receives `(message_id, chat_id, raw_callback)`.
pub type CallbackDataNotFoundFn =
    Arc<dyn Fn(i64, i64, String) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Hook invoked when a free-text message cannot be routed to an inline
/// processor. Receives `(message_id, chat_id, raw_message)`.
pub type MessageNotFoundFn =
    Arc<dyn Fn(i64, i64, String) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Manager configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Text substituted when a rendered session carries no message.
    /// Required: construction fails when empty.
    pub default_msg: String,
    /// Appear type used by [`CallbackManager::session`].
    pub default_appear_type: AppearType,
}

/// The conversation engine.
///
/// Owns its registries, so several independent engines can coexist in one
/// process. Registration happens at setup time; request processing methods
/// take `&self` and are safe to call concurrently.
pub struct CallbackManager {
    default_msg: String,
    default_appear_type: AppearType,
    storage: Arc<dyn Storage>,
    sender: Arc<dyn Sender>,
    registry: ProcessorRegistry,
    callback_data_not_found: Option<CallbackDataNotFoundFn>,
    message_not_found: Option<MessageNotFoundFn>,
    bot_name: String,
}

impl CallbackManager {
    /// Build a manager. Resolves and caches the bot name through the sender;
    /// construction fails if that errors or `config.default_msg` is empty.
    pub async fn new(
        config: Config,
        storage: Arc<dyn Storage>,
        sender: Arc<dyn Sender>,
    ) -> Result<Self, Error> {
        if config.default_msg.is_empty() {
            return Err(Error::Config("default message is required"));
        }

        let bot_name = sender.bot_name().await.map_err(Error::GetBotName)?;

        Ok(Self {
            default_msg: config.default_msg,
            default_appear_type: config.default_appear_type,
            storage,
            sender,
            registry: ProcessorRegistry::default(),
            callback_data_not_found: None,
            message_not_found: None,
            bot_name,
        })
    }

    /// Register a named processor. Fails on a duplicate name or a name
    /// containing the callback divider; the first registration stays intact.
    pub fn add_processor<F, Fut>(&mut self, name: impl Into<String>, processor: F) -> Result<(), Error>
    where
        F: Fn(SessionState) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Option<SessionState>>> + Send + 'static,
    {
        self.registry
            .add(name.into(), Arc::new(move |state| Box::pin(processor(state))))
    }

    /// Register an inline processor under its trigger label.
    pub fn add_inline_processor<F, Fut>(
        &mut self,
        trigger: impl Into<String>,
        processor: F,
    ) -> Result<(), Error>
    where
        F: Fn(InlineQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Option<SessionState>>> + Send + 'static,
    {
        self.registry
            .add_inline(trigger.into(), Arc::new(move |query| Box::pin(processor(query))))
    }

    /// Install the no-stored-session hook.
    pub fn on_callback_data_not_found<F, Fut>(&mut self, hook: F)
    where
        F: Fn(i64, i64, String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.callback_data_not_found = Some(Arc::new(move |msg_id, chat_id, callback| {
            Box::pin(hook(msg_id, chat_id, callback))
        }));
    }

    /// Install the unroutable-message hook.
    pub fn on_message_not_found<F, Fut>(&mut self, hook: F)
    where
        F: Fn(i64, i64, String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.message_not_found = Some(Arc::new(move |msg_id, chat_id, message| {
            Box::pin(hook(msg_id, chat_id, message))
        }));
    }

    /// A fresh session using the configured defaults. The message stays
    /// empty here and picks up the default text at render time.
    pub fn session(&self, chat_id: i64) -> SessionState {
        SessionState::new(chat_id, "", self.default_appear_type)
    }

    /// Bot name resolved at construction.
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Render, deliver and persist a session, e.g. to open the root menu of
    /// a flow. Returns the id of the message now carrying the menu.
    pub async fn send_node(&self, state: SessionState) -> Result<i64, Error> {
        self.send_and_persist(state).await
    }

    pub(crate) async fn send_and_persist(&self, mut state: SessionState) -> Result<i64, Error> {
        let container = render::render_container(&state, &self.default_msg);

        let msg_id = self
            .sender
            .send_msg(container)
            .await
            .map_err(|source| Error::Sender {
                context: "sending message",
                source,
            })?;
        state.message_id = msg_id;

        let blob = serde_json::to_vec(&state)?;
        self.storage
            .save_state(&storage_key(msg_id), blob)
            .await
            .map_err(|source| Error::Storage {
                context: "saving session state",
                source,
            })?;

        debug!(chat_id = state.chat_id, message_id = msg_id, "session persisted");
        Ok(msg_id)
    }

    /// Fire-and-forget removal of a superseded session record. Detached from
    /// the caller's cancellation; failure leaves an orphaned key addressed
    /// by a dead message id, which cannot corrupt the live conversation, so
    /// it is only logged.
    pub(crate) fn spawn_delete_state(&self, key: String) {
        let storage = Arc::clone(&self.storage);
        tokio::spawn(async move {
            if let Err(error) = storage.delete_state(&key).await {
                warn!(key, %error, "background deletion of session state failed");
            }
        });
    }
}

pub(crate) fn storage_key(msg_id: i64) -> String {
    format!("{STORAGE_KEY_PREFIX}: {msg_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_format() {
        assert_eq!(storage_key(42), "callback-processor-msg-id: 42");
    }
}
