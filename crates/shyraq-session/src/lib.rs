//! Stateless chat request layer over the transliteration engine.
//!
//! `ChatHandler` resolves each user's direction from the preference
//! store, runs the engine, and chunks the reply for the transport. It
//! keeps no per-request state; the transport frontend translates
//! `Response` values into actual messages, keyboards and inline results.

pub mod chunk;
pub mod gate;
pub mod prefs;

pub(crate) mod types;

mod handler;

#[cfg(test)]
mod tests;

use shyraq_core::settings::settings;
use shyraq_core::translit::{Direction, Transliterator};

use gate::AccessGate;
use prefs::PreferenceStore;

pub use types::{InlinePreview, Reply, Response, UserId};

pub struct ChatHandler {
    engine: &'static Transliterator,
    prefs: PreferenceStore,
    gate: Box<dyn AccessGate>,

    default_direction: Direction,
    max_message_chars: usize,
}

impl ChatHandler {
    /// Handler over the global engine, configured from global settings.
    pub fn new(prefs: PreferenceStore, gate: Box<dyn AccessGate>) -> Self {
        let s = settings();
        Self::with_config(
            prefs,
            gate,
            s.service.default_direction,
            s.service.max_message_chars,
        )
    }

    /// Handler with explicit service parameters (tests, embedding).
    pub fn with_config(
        prefs: PreferenceStore,
        gate: Box<dyn AccessGate>,
        default_direction: Direction,
        max_message_chars: usize,
    ) -> Self {
        Self {
            engine: Transliterator::global(),
            prefs,
            gate,
            default_direction,
            max_message_chars,
        }
    }

    pub fn prefs(&self) -> &PreferenceStore {
        &self.prefs
    }

    /// The direction used for `user`'s next message.
    pub fn direction_for(&self, user: UserId) -> Direction {
        self.prefs.get(user).unwrap_or(self.default_direction)
    }

    /// Persist an explicit direction choice.
    pub fn set_direction(&self, user: UserId, direction: Direction) {
        self.prefs.set(user, direction);
    }
}
