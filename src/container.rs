//! # Outbound Container Module
//!
//! The rendered form of a turn, handed to the [`crate::sender::Sender`]
//! collaborator. The engine decides *what* the next menu is; the container
//! is the boundary where a transport adapter turns it into platform markup.

use serde::{Deserialize, Serialize};

use crate::types::{AppearType, ProcessorType};

/// One rendered turn: where it goes, what it says, and its buttons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelegramContainer {
    pub chat_id: i64,
    /// Message id of the superseded turn. The transport uses it together
    /// with `appear_type` to edit in place or delete the old message.
    pub old_message_id: i64,
    pub message: String,
    pub appear_type: AppearType,
    pub buttons: Vec<Button>,
}

impl TelegramContainer {
    /// Linear lookup of the first button carrying the given transition kind.
    pub fn button_by_processor_type(&self, processor_type: ProcessorType) -> Option<&Button> {
        self.buttons
            .iter()
            .find(|b| b.processor_type == Some(processor_type))
    }
}

/// One rendered button. Exactly one of `callback`, `url`,
/// `switch_inline_query` is populated, mirroring the node variant it was
/// rendered from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    /// Encoded callback string, for processor-routing buttons.
    pub callback: Option<String>,
    /// Transition kind of a processor-routing button.
    pub processor_type: Option<ProcessorType>,
    /// External hyperlink, for link buttons.
    pub url: Option<String>,
    /// Pre-filled inline-query text, for inline-trigger buttons.
    pub switch_inline_query: Option<String>,
}
