//! # Core Types Module
//!
//! This module defines the two closed enumerations the engine is built on:
//! the transition kind carried inside callback strings and the delivery
//! policy for a rendered turn.

use serde::{Deserialize, Serialize};

/// Kind of transition a callback button performs.
///
/// The numeric ordinal of each variant is part of the wire format (see
/// [`crate::callback`]) and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorType {
    /// Regular forward transition, addressed by position in the menu.
    Process,
    /// "Go back" menu transition (at most one per menu).
    Back,
    /// "Close menu" transition (at most one per menu).
    Close,
    /// "Skip step" transition (at most one per menu).
    Skip,
    /// Sentinel: a no-op that must not touch stored state.
    Ignore,
}

impl ProcessorType {
    /// Wire ordinal used inside encoded callback strings.
    pub fn ordinal(self) -> u8 {
        match self {
            ProcessorType::Process => 0,
            ProcessorType::Back => 1,
            ProcessorType::Close => 2,
            ProcessorType::Skip => 3,
            ProcessorType::Ignore => 4,
        }
    }

    /// Inverse of [`ProcessorType::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(ProcessorType::Process),
            1 => Some(ProcessorType::Back),
            2 => Some(ProcessorType::Close),
            3 => Some(ProcessorType::Skip),
            4 => Some(ProcessorType::Ignore),
            _ => None,
        }
    }

    /// Textual form, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessorType::Process => "process",
            ProcessorType::Back => "back",
            ProcessorType::Close => "close",
            ProcessorType::Skip => "skip",
            ProcessorType::Ignore => "ignore",
        }
    }
}

impl std::fmt::Display for ProcessorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a newly rendered turn is delivered relative to the previous message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearType {
    /// Edit the existing message in place.
    #[default]
    Update,
    /// Send a new message, keep the old one.
    Resend,
    /// Send a new message, delete the old one.
    ResendDeleteOld,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_round_trip() {
        for ty in [
            ProcessorType::Process,
            ProcessorType::Back,
            ProcessorType::Close,
            ProcessorType::Skip,
            ProcessorType::Ignore,
        ] {
            assert_eq!(ProcessorType::from_ordinal(ty.ordinal()), Some(ty));
        }
        assert_eq!(ProcessorType::from_ordinal(5), None);
    }

    #[test]
    fn test_appear_type_serde_form() {
        let json = serde_json::to_string(&AppearType::ResendDeleteOld).unwrap();
        assert_eq!(json, "\"resend_delete_old\"");
    }
}
