//! Button-press handling: the per-invocation state machine that resolves a
//! decoded callback against the stored session and produces the next turn.

use tracing::debug;

use super::{storage_key, CallbackManager};
use crate::callback::CallbackData;
use crate::error::Error;
use crate::node::NodeKind;
use crate::session::SessionState;
use crate::types::{AppearType, ProcessorType};

impl CallbackManager {
    /// Process one inbound button press.
    ///
    /// Decodes `callback`, loads the session stored for `old_msg_id`,
    /// resolves the target node, re-invokes its processor and renders,
    /// delivers and persists the resulting turn.
    ///
    /// Two concurrent callbacks racing on the same message id can both read
    /// the same stored state and both write competing new states; the last
    /// writer wins. There is no versioning guard.
    pub async fn process_callback(
        &self,
        old_msg_id: i64,
        chat_id: i64,
        callback: &str,
    ) -> Result<(), Error> {
        let decoded = CallbackData::decode(callback)?;
        if decoded.processor_type == ProcessorType::Ignore {
            return Ok(());
        }

        let old_key = storage_key(old_msg_id);
        let blob = self
            .storage
            .get_state(&old_key)
            .await
            .map_err(|source| Error::Storage {
                context: "loading session state",
                source,
            })?;

        let Some(blob) = blob else {
            debug!(message_id = old_msg_id, chat_id, "no stored session for callback");
            if let Some(hook) = &self.callback_data_not_found {
                return hook(old_msg_id, chat_id, callback.to_string())
                    .await
                    .map_err(|source| Error::Hook {
                        context: "callback data not found",
                        source,
                    });
            }
            return Err(Error::CallbackDataNotFound(old_msg_id));
        };

        let stored: SessionState = serde_json::from_slice(&blob)?;

        let node = match decoded.processor_type {
            ProcessorType::Process => stored.processor_node(decoded.idx)?,
            other => stored
                .menu_node(other)
                .ok_or(Error::InvalidTransition(other))?,
        };

        let NodeKind::Processor { callback: node_callback, payload } = &node.kind else {
            return Err(Error::InvalidTransition(decoded.processor_type));
        };

        // A node registered without a target is a deliberate dead-end.
        if node_callback.processor.is_empty() {
            return Ok(());
        }
        let name = node_callback.processor.clone();
        let payload = payload.clone();

        let processor = self
            .registry
            .get(&name)
            .ok_or_else(|| Error::ProcessorNotFound(name.clone()))?;

        // The processor sees the stored session with the node's payload
        // swapped in and the node collections cleared; it populates fresh
        // collections for the new turn.
        let input = SessionState {
            chat_id: stored.chat_id,
            message_id: old_msg_id,
            message: stored.message.clone(),
            payload,
            appear_type: stored.appear_type,
            processor_nodes: Vec::new(),
            menu_nodes: Default::default(),
        };

        debug!(processor = %name, message_id = old_msg_id, "invoking processor");
        let next = processor(input).await.map_err(|source| Error::Processor {
            name: name.clone(),
            source,
        })?;

        let Some(mut next) = next else {
            // Terminal branch: the flow ends here, tear the session down.
            if stored.appear_type == AppearType::ResendDeleteOld {
                self.sender.delete_message(old_msg_id, stored.chat_id).await;
            }
            self.spawn_delete_state(old_key);
            debug!(processor = %name, message_id = old_msg_id, "flow ended, session torn down");
            return Ok(());
        };

        if next.chat_id == 0 {
            next.chat_id = stored.chat_id;
        }
        // The container must reference the superseded message so the
        // transport can edit or delete it.
        next.message_id = old_msg_id;

        let appear_type = next.appear_type;
        let new_msg_id = self.send_and_persist(next).await?;

        if appear_type == AppearType::ResendDeleteOld && new_msg_id != old_msg_id {
            self.spawn_delete_state(old_key);
        }
        Ok(())
    }
}
