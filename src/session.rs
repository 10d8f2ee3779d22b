//! # Session State Module
//!
//! The per-message unit of conversation state. A processor invocation
//! produces one [`SessionState`]; the manager renders it, assigns the new
//! message id after sending, and persists it as JSON keyed by that id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Error;
use crate::node::{NextNode, NodeKind};
use crate::types::{AppearType, ProcessorType};

/// Persisted per-turn conversation state: the current menu, its buttons and
/// the opaque caller payload.
///
/// Nodes live in two distinct collections because the wire format addresses
/// them differently: `process`-kind nodes (plus link and inline nodes) are
/// positional, everything else is addressed by transition kind alone, at
/// most one node per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Chat this conversation runs in.
    pub chat_id: i64,
    /// Message carrying the current menu. Zero until the first send.
    pub message_id: i64,
    /// Display text. If empty, the manager substitutes its default message
    /// at render time.
    pub message: String,
    /// Opaque caller-defined session data threaded through to processors.
    pub payload: Vec<u8>,
    /// Delivery policy for the next rendered turn.
    pub appear_type: AppearType,
    /// Ordered nodes, addressable by position. The position is baked into
    /// each `process`-kind node's encoded callback at append time and must
    /// never be reassigned afterwards: previously rendered buttons already
    /// embed it.
    pub processor_nodes: Vec<NextNode>,
    /// Kind-keyed menu nodes (`back` / `close` / `skip`), at most one per
    /// kind. A later insert of the same kind replaces the earlier one.
    pub menu_nodes: BTreeMap<ProcessorType, NextNode>,
}

impl SessionState {
    /// A fresh session for `chat_id` with no message id assigned yet.
    pub fn new(chat_id: i64, message: impl Into<String>, appear_type: AppearType) -> Self {
        Self {
            chat_id,
            message: message.into(),
            appear_type,
            ..Default::default()
        }
    }

    /// Builder-style [`SessionState::add_node`].
    pub fn with_node(mut self, node: NextNode) -> Self {
        self.add_node(node);
        self
    }

    /// Builder-style payload setter.
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Append a node to this menu.
    ///
    /// Link and inline nodes, and `process`-kind processor nodes, join the
    /// ordered collection; a `process`-kind node gets its callback index set
    /// to its position at this moment. Processor nodes of any other kind go
    /// to the kind-keyed collection.
    pub fn add_node(&mut self, mut node: NextNode) {
        match &mut node.kind {
            NodeKind::Processor { callback, .. } => {
                if callback.processor_type == ProcessorType::Process {
                    callback.idx = self.processor_nodes.len() as i64;
                    self.processor_nodes.push(node);
                } else {
                    self.menu_nodes.insert(callback.processor_type, node);
                }
            }
            NodeKind::Link { .. } | NodeKind::Inline { .. } => {
                self.processor_nodes.push(node);
            }
        }
    }

    /// Ordered lookup for a decoded `process`-kind callback.
    pub fn processor_node(&self, idx: i64) -> Result<&NextNode, Error> {
        usize::try_from(idx)
            .ok()
            .and_then(|i| self.processor_nodes.get(i))
            .ok_or(Error::InvalidIndex {
                idx,
                len: self.processor_nodes.len(),
            })
    }

    /// Kind lookup for a decoded menu transition.
    pub fn menu_node(&self, processor_type: ProcessorType) -> Option<&NextNode> {
        self.menu_nodes.get(&processor_type)
    }

    /// True when the menu has no buttons at all.
    pub fn is_empty(&self) -> bool {
        self.processor_nodes.is_empty() && self.menu_nodes.is_empty()
    }
}
