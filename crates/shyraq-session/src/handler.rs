use tracing::debug_span;

use shyraq_core::translit::Direction;

use crate::chunk::chunk_message;
use crate::types::{InlinePreview, Reply, Response, UserId};
use crate::ChatHandler;

impl ChatHandler {
    /// Translate an incoming message with the user's stored direction.
    pub fn handle_message(&self, user: UserId, text: &str) -> Response {
        let _span = debug_span!("handle_message", user = user.0).entered();
        let missing = self.gate.missing_channels(user);
        if !missing.is_empty() {
            return Response::NotSubscribed(missing);
        }
        self.translated(text, self.direction_for(user))
    }

    /// Flip and persist the user's direction, then retranslate `original`.
    /// Backs the "switch direction" button on an already-sent reply.
    pub fn switch_direction(&self, user: UserId, original: &str) -> Response {
        let _span = debug_span!("switch_direction", user = user.0).entered();
        let missing = self.gate.missing_channels(user);
        if !missing.is_empty() {
            return Response::NotSubscribed(missing);
        }
        let direction = self.direction_for(user).flip();
        self.prefs.set(user, direction);
        self.translated(original, direction)
    }

    /// Both directions at once, for inline queries. The frontend shows
    /// one result per direction and lets the user pick.
    pub fn inline_preview(&self, user: UserId, query: &str) -> Result<InlinePreview, Vec<String>> {
        let missing = self.gate.missing_channels(user);
        if !missing.is_empty() {
            return Err(missing);
        }
        Ok(InlinePreview {
            forward: self.engine.transliterate(query, Direction::Forward),
            reverse: self.engine.transliterate(query, Direction::Reverse),
        })
    }

    fn translated(&self, text: &str, direction: Direction) -> Response {
        let output = self.engine.transliterate(text, direction);
        let total_chars = output.chars().count();
        let parts = chunk_message(&output, self.max_message_chars);
        Response::Translated(Reply {
            direction,
            parts,
            total_chars,
        })
    }
}
