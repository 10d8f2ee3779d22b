//! Processor registries: name → processor function, trigger → inline
//! processor function. Owned by the manager instance, never process-wide.
//!
//! Registries are populated at setup time before serving begins and are
//! read-only afterwards; duplicate registration is rejected, not serialized.

use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;

use crate::callback::CALLBACK_DIVIDER;
use crate::error::Error;
use crate::session::SessionState;

/// A named processor: maps the current session payload to the next
/// [`SessionState`]. Returning `Ok(None)` ends the flow for this message.
pub type ProcessorFn =
    Arc<dyn Fn(SessionState) -> BoxFuture<'static, anyhow::Result<Option<SessionState>>> + Send + Sync>;

/// An inline processor: maps a parsed inline query to the next
/// [`SessionState`]. Returning `Ok(None)` is a deliberate no-op.
pub type InlineProcessorFn =
    Arc<dyn Fn(InlineQuery) -> BoxFuture<'static, anyhow::Result<Option<SessionState>>> + Send + Sync>;

/// The parsed inline-trigger input handed to an inline processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineQuery {
    /// Bracketed routing key, empty when the trigger carried none.
    pub key: String,
    /// Free-form user text after the divider.
    pub payload: String,
    pub chat_id: i64,
    pub message_id: i64,
}

#[derive(Default)]
pub(crate) struct ProcessorRegistry {
    processors: HashMap<String, ProcessorFn>,
    inline_processors: HashMap<String, InlineProcessorFn>,
}

impl ProcessorRegistry {
    pub(crate) fn add(&mut self, name: String, processor: ProcessorFn) -> Result<(), Error> {
        if name.contains(CALLBACK_DIVIDER) {
            return Err(Error::Config("processor name must not contain the callback divider"));
        }
        if self.processors.contains_key(&name) {
            return Err(Error::DuplicateProcessor(name));
        }
        self.processors.insert(name, processor);
        Ok(())
    }

    pub(crate) fn add_inline(
        &mut self,
        trigger: String,
        processor: InlineProcessorFn,
    ) -> Result<(), Error> {
        if self.inline_processors.contains_key(&trigger) {
            return Err(Error::DuplicateInlineProcessor(trigger));
        }
        self.inline_processors.insert(trigger, processor);
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<ProcessorFn> {
        self.processors.get(name).cloned()
    }

    pub(crate) fn get_inline(&self, trigger: &str) -> Option<InlineProcessorFn> {
        self.inline_processors.get(trigger).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> ProcessorFn {
        Arc::new(|_| Box::pin(async { Ok(None) }))
    }

    fn noop_inline() -> InlineProcessorFn {
        Arc::new(|_| Box::pin(async { Ok(None) }))
    }

    #[test]
    fn test_duplicate_registration_rejected_first_kept() {
        let mut registry = ProcessorRegistry::default();
        registry.add("root".to_string(), noop()).unwrap();

        let err = registry.add("root".to_string(), noop()).unwrap_err();
        assert!(matches!(err, Error::DuplicateProcessor(name) if name == "root"));
        assert!(registry.get("root").is_some());
    }

    #[test]
    fn test_divider_in_name_rejected() {
        let mut registry = ProcessorRegistry::default();
        let err = registry.add("bad>name".to_string(), noop()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(registry.get("bad>name").is_none());
    }

    #[test]
    fn test_duplicate_inline_registration_rejected() {
        let mut registry = ProcessorRegistry::default();
        registry.add_inline("find".to_string(), noop_inline()).unwrap();

        let err = registry.add_inline("find".to_string(), noop_inline()).unwrap_err();
        assert!(matches!(err, Error::DuplicateInlineProcessor(t) if t == "find"));
    }

    #[test]
    fn test_unknown_lookup_is_none() {
        let registry = ProcessorRegistry::default();
        assert!(registry.get("missing").is_none());
        assert!(registry.get_inline("missing").is_none());
    }
}
