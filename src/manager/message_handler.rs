//! Free-text handling: routes messages shaped as inline-query follow-ups to
//! the inline processor registry.

use tracing::debug;

use super::{CallbackManager, InlineQuery};
use crate::error::Error;
use crate::inline::parse_inline_input;

impl CallbackManager {
    /// Process a free-text message that may encode an inline-query
    /// follow-up.
    ///
    /// A leading `@botname` mention is stripped (all occurrences), the rest
    /// is parsed as `<label>[ (key) ]\n→<payload>`. When the message does
    /// not parse or its trigger has no registered inline processor, the
    /// unroutable-message hook is invoked if configured, otherwise
    /// [`Error::MessageProcessorNotFound`] is returned.
    pub async fn process_msg(&self, msg_id: i64, chat_id: i64, message: &str) -> Result<(), Error> {
        let stripped = message.replace(&format!("@{}", self.bot_name), "");

        let Some(parsed) = parse_inline_input(&stripped) else {
            return self.unroutable(msg_id, chat_id, message).await;
        };

        let Some(processor) = self.registry.get_inline(&parsed.trigger) else {
            debug!(trigger = %parsed.trigger, "no inline processor for trigger");
            return self.unroutable(msg_id, chat_id, message).await;
        };

        let trigger = parsed.trigger;
        let query = InlineQuery {
            key: parsed.key,
            payload: parsed.payload,
            chat_id,
            message_id: msg_id,
        };

        debug!(trigger = %trigger, message_id = msg_id, "invoking inline processor");
        let next = processor(query).await.map_err(|source| Error::Processor {
            name: trigger,
            source,
        })?;

        // A None return is a deliberate no-op: the trigger was consumed but
        // opens no menu.
        let Some(mut next) = next else {
            return Ok(());
        };

        if next.chat_id == 0 {
            next.chat_id = chat_id;
        }
        // The message id stays as the processor returned it: an inline
        // response is a fresh send, not an edit of the user's text message.
        // Processors that do want to reference it get it via `InlineQuery`.

        self.send_and_persist(next).await?;
        Ok(())
    }

    async fn unroutable(&self, msg_id: i64, chat_id: i64, message: &str) -> Result<(), Error> {
        if let Some(hook) = &self.message_not_found {
            return hook(msg_id, chat_id, message.to_string())
                .await
                .map_err(|source| Error::Hook {
                    context: "message not found",
                    source,
                });
        }
        Err(Error::MessageProcessorNotFound)
    }
}
