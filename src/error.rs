//! # Error Module
//!
//! Typed errors for the engine. Collaborator failures and user-processor
//! failures carry their source; the manager wraps them with operation
//! context and never retries.

use thiserror::Error;

use crate::types::ProcessorType;

/// All errors the engine can surface to a caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Construction-time or registration-time misconfiguration.
    #[error("configuration: {0}")]
    Config(&'static str),

    /// Resolving the bot name at construction failed.
    #[error("getting bot name")]
    GetBotName(#[source] anyhow::Error),

    /// A processor with this name is already registered.
    #[error("duplicate processor: {0}")]
    DuplicateProcessor(String),

    /// An inline processor with this trigger is already registered.
    #[error("duplicate inline processor: {0}")]
    DuplicateInlineProcessor(String),

    /// Malformed callback string.
    #[error("invalid callback")]
    InvalidCallback,

    /// No stored session for the message id and no not-found hook configured.
    #[error("callback data not found for message {0}")]
    CallbackDataNotFound(i64),

    /// A `process`-kind callback indexed past the stored menu.
    #[error("invalid processor node index {idx} (menu has {len} nodes)")]
    InvalidIndex { idx: i64, len: usize },

    /// The stored menu has no transition of this kind, or the resolved node
    /// does not route to a processor.
    #[error("no {0} transition in current menu")]
    InvalidTransition(ProcessorType),

    /// A callback referenced a processor name that is not registered.
    #[error("processor not found: {0}")]
    ProcessorNotFound(String),

    /// A free-text message could not be routed to an inline processor.
    #[error("message processor not found")]
    MessageProcessorNotFound,

    /// A session blob failed to encode or decode.
    #[error("session state serialization")]
    State(#[from] serde_json::Error),

    /// Storage collaborator I/O failure.
    #[error("storage: {context}")]
    Storage {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// Sender collaborator I/O failure.
    #[error("sender: {context}")]
    Sender {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// A configured fallback hook returned an error.
    #[error("{context} hook failed")]
    Hook {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// A user-supplied processor returned an error.
    #[error("processor {name} failed")]
    Processor {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}
