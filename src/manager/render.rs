//! Rendering: the pure transform from a [`SessionState`] to the outbound
//! [`TelegramContainer`] handed to the sender.

use crate::container::{Button, TelegramContainer};
use crate::inline::switch_inline_text;
use crate::node::{NextNode, NodeKind};
use crate::session::SessionState;

/// Render a session into its outbound container.
///
/// Buttons are emitted for the ordered collection first, preserving append
/// order, then for the kind-keyed menu collection. An empty session message
/// is substituted with the manager's default.
pub(crate) fn render_container(state: &SessionState, default_msg: &str) -> TelegramContainer {
    let message = if state.message.is_empty() {
        default_msg.to_string()
    } else {
        state.message.clone()
    };

    let mut buttons = Vec::with_capacity(state.processor_nodes.len() + state.menu_nodes.len());
    buttons.extend(state.processor_nodes.iter().map(render_button));
    buttons.extend(state.menu_nodes.values().map(render_button));

    TelegramContainer {
        chat_id: state.chat_id,
        old_message_id: state.message_id,
        message,
        appear_type: state.appear_type,
        buttons,
    }
}

fn render_button(node: &NextNode) -> Button {
    match &node.kind {
        NodeKind::Processor { callback, .. } => Button {
            label: node.label.clone(),
            callback: Some(callback.encode()),
            processor_type: Some(callback.processor_type),
            ..Default::default()
        },
        NodeKind::Link { url } => Button {
            label: node.label.clone(),
            url: Some(url.clone()),
            ..Default::default()
        },
        NodeKind::Inline { message, key } => Button {
            label: node.label.clone(),
            switch_inline_query: Some(switch_inline_text(message, key)),
            ..Default::default()
        },
    }
}
