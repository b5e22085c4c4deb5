use serde::{Deserialize, Serialize};

use shyraq_core::translit::Direction;

/// Opaque chat-user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Transliterated reply, chunked to the transport size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Direction the text was translated in.
    pub direction: Direction,
    /// Message parts, each at most `max_message_chars` characters.
    /// Empty output produces no parts.
    pub parts: Vec<String>,
    /// Character count of the whole output before chunking.
    pub total_chars: usize,
}

/// Outcome of handling one incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Caller must join these channels before using the service.
    NotSubscribed(Vec<String>),
    Translated(Reply),
}

/// Both-direction result for inline queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinePreview {
    pub forward: String,
    pub reverse: String,
}
