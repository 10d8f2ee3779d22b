//! # Node Model Module
//!
//! A node is one addressable point in the conversation graph, rendered as a
//! single button. The three variants are a closed sum type, so "exactly one
//! variant populated" holds by construction.

use serde::{Deserialize, Serialize};

use crate::callback::CallbackData;
use crate::types::ProcessorType;

/// A single outgoing transition of a menu, rendered as one button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextNode {
    /// Display label of the button.
    pub label: String,
    /// What pressing the button does.
    pub kind: NodeKind,
}

/// The payload of a [`NextNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Routes to a named processor via the callback codec.
    Processor {
        /// Encoded routing data. `callback.processor` is the target
        /// processor name; `callback.idx` is assigned at append time.
        callback: CallbackData,
        /// Opaque caller payload handed to the target processor.
        payload: Vec<u8>,
    },
    /// External hyperlink. Carries no processor routing.
    Link { url: String },
    /// "Switch to inline query" trigger, resolved later through the inline
    /// processor registry rather than the callback codec.
    Inline { message: String, key: String },
}

impl NextNode {
    /// A processor-routing node of the given transition kind.
    pub fn processor(
        label: impl Into<String>,
        processor_name: impl Into<String>,
        processor_type: ProcessorType,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Processor {
                callback: CallbackData::new(processor_name, processor_type),
                payload,
            },
        }
    }

    /// A `process`-kind processor node, the common case.
    pub fn process(
        label: impl Into<String>,
        processor_name: impl Into<String>,
        payload: Vec<u8>,
    ) -> Self {
        Self::processor(label, processor_name, ProcessorType::Process, payload)
    }

    /// An external hyperlink node.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Link { url: url.into() },
        }
    }

    /// An inline-query trigger node. `message` is the trigger label the user
    /// message must start with; `key` is an optional routing key echoed back
    /// in brackets.
    pub fn inline(
        label: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Inline {
                message: message.into(),
                key: key.into(),
            },
        }
    }

    /// Transition kind, if this is a processor-routing node.
    pub fn processor_type(&self) -> Option<ProcessorType> {
        match &self.kind {
            NodeKind::Processor { callback, .. } => Some(callback.processor_type),
            _ => None,
        }
    }
}
