//! # Inline Trigger Module
//!
//! Free-text commands re-enter the engine through a separate registry. The
//! wire shape is
//!
//! ```text
//! <label>[ '(' <key> ')' ]'\n→'<userPayload>
//! ```
//!
//! where the divider token is exactly `"\n→"`. Inline-trigger buttons carry
//! a pre-filled query in the same shape, so a user completing the query
//! produces a parseable message.

/// Divider between the trigger label and the user payload.
pub const INLINE_DIVIDER: &str = "\n→";

/// A parsed inline trigger: trigger label, optional bracketed key, and the
/// free-form user payload after the divider. All three are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineInput {
    pub trigger: String,
    pub key: String,
    pub payload: String,
}

/// Parse a raw inline message. Returns `None` when the divider does not
/// split the input into exactly two parts.
pub fn parse_inline_input(input: &str) -> Option<InlineInput> {
    let items: Vec<&str> = input.split(INLINE_DIVIDER).collect();
    if items.len() != 2 {
        return None;
    }

    let (key, trigger) = brackets_in_out(items[0]);
    Some(InlineInput {
        trigger: trigger.trim().to_string(),
        key: key.trim().to_string(),
        payload: items[1].trim().to_string(),
    })
}

/// Split `label (key)` into the key between the first bracket pair and the
/// label with the bracketed segment removed. Without a well-formed pair
/// (both brackets present, `(` before `)`) the key is empty and the whole
/// input is the label.
fn brackets_in_out(input: &str) -> (String, String) {
    let open = input.find('(');
    let close = input.find(')');
    match (open, close) {
        (Some(open), Some(close)) if open <= close => (
            input[open + 1..close].to_string(),
            format!("{}{}", &input[..open], &input[close + 1..]),
        ),
        _ => (String::new(), input.to_string()),
    }
}

/// Pre-filled query text an inline-trigger button carries. Byte-exact:
/// `"{label} ({key}) \n→ "` with a key, `"{label}\n→ "` without.
pub fn switch_inline_text(message: &str, key: &str) -> String {
    if message.is_empty() {
        return String::new();
    }
    if key.is_empty() {
        format!("{message}{INLINE_DIVIDER} ")
    } else {
        format!("{message} ({key}) {INLINE_DIVIDER} ")
    }
}
