//! # Callback Codec Module
//!
//! Compact wire encoding for button-press payloads. A callback string
//! identifies a processor name, a transition kind, and a positional index:
//!
//! ```text
//! <processorName> '>' <processorTypeOrdinal> '>' <index>
//! ```
//!
//! The literal string `"ignore"` (the textual form of
//! [`ProcessorType::Ignore`]) bypasses the three-field grammar entirely and
//! decodes to the no-op sentinel.
//!
//! No escaping is performed: processor names must never contain the `>`
//! divider. This is a caller obligation; the manager rejects such names at
//! registration time.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::ProcessorType;

/// Field divider inside encoded callback strings.
pub const CALLBACK_DIVIDER: &str = ">";

/// Decoded form of a callback string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackData {
    /// Target processor name. Empty for the `ignore` sentinel and for
    /// deliberate dead-end transitions.
    pub processor: String,
    /// Transition kind.
    pub processor_type: ProcessorType,
    /// Position of the node inside the menu's ordered collection. Only
    /// meaningful for `process`-kind transitions.
    pub idx: i64,
}

impl CallbackData {
    /// Create callback data with an unassigned index.
    ///
    /// The index is assigned when the owning node is appended to a session's
    /// ordered collection (see [`crate::session::SessionState::add_node`]).
    pub fn new(processor: impl Into<String>, processor_type: ProcessorType) -> Self {
        Self {
            processor: processor.into(),
            processor_type,
            idx: 0,
        }
    }

    /// Encode into the wire string.
    pub fn encode(&self) -> String {
        format!(
            "{}{div}{}{div}{}",
            self.processor,
            self.processor_type.ordinal(),
            self.idx,
            div = CALLBACK_DIVIDER
        )
    }

    /// Decode a wire string.
    ///
    /// Fails with [`Error::InvalidCallback`] if the input does not split into
    /// exactly three divider-separated fields (unless it equals the `ignore`
    /// literal), if the type field is not a valid ordinal, or if the index
    /// field is not a non-negative integer.
    pub fn decode(input: &str) -> Result<Self, Error> {
        if input == ProcessorType::Ignore.as_str() {
            return Ok(Self {
                processor: String::new(),
                processor_type: ProcessorType::Ignore,
                idx: 0,
            });
        }

        let items: Vec<&str> = input.split(CALLBACK_DIVIDER).collect();
        if items.len() != 3 {
            return Err(Error::InvalidCallback);
        }

        let ordinal: u8 = items[1].parse().map_err(|_| Error::InvalidCallback)?;
        let processor_type = ProcessorType::from_ordinal(ordinal).ok_or(Error::InvalidCallback)?;

        let idx: i64 = items[2].parse().map_err(|_| Error::InvalidCallback)?;
        if idx < 0 {
            return Err(Error::InvalidCallback);
        }

        Ok(Self {
            processor: items[0].to_string(),
            processor_type,
            idx,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format() {
        let data = CallbackData {
            processor: "admin".to_string(),
            processor_type: ProcessorType::Process,
            idx: 3,
        };
        assert_eq!(data.encode(), "admin>0>3");
    }

    #[test]
    fn test_round_trip() {
        for (name, ty, idx) in [
            ("root", ProcessorType::Process, 0),
            ("settings", ProcessorType::Back, 12),
            ("", ProcessorType::Close, 7),
            ("a b c", ProcessorType::Skip, 42),
        ] {
            let data = CallbackData {
                processor: name.to_string(),
                processor_type: ty,
                idx,
            };
            assert_eq!(CallbackData::decode(&data.encode()).unwrap(), data);
        }
    }

    #[test]
    fn test_ignore_literal_short_circuits() {
        let data = CallbackData::decode("ignore").unwrap();
        assert_eq!(data.processor, "");
        assert_eq!(data.processor_type, ProcessorType::Ignore);
        assert_eq!(data.idx, 0);
    }

    #[test]
    fn test_wrong_field_count_fails() {
        for input in ["", "abc", "a>1", "a>1>2>3", "back"] {
            assert!(CallbackData::decode(input).is_err(), "input: {input:?}");
        }
    }

    #[test]
    fn test_bad_type_field_fails() {
        assert!(CallbackData::decode("a>x>2").is_err());
        assert!(CallbackData::decode("a>9>2").is_err());
        assert!(CallbackData::decode("a>-1>2").is_err());
    }

    #[test]
    fn test_bad_index_field_fails() {
        assert!(CallbackData::decode("a>0>-1").is_err());
        assert!(CallbackData::decode("a>0>x").is_err());
        assert!(CallbackData::decode("a>0>1.5").is_err());
        assert!(CallbackData::decode("a>0>").is_err());
    }
}
