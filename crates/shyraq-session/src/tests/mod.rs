
use shyraq_core::translit::Direction;

use crate::gate::StaticGate;
use crate::prefs::PreferenceStore;
use crate::{ChatHandler, UserId};

const CHANNELS: [&str; 2] = ["qazaq_news", "shyraq_club"];

fn gate_with_member(user: UserId) -> StaticGate {
    let mut gate = StaticGate::new(CHANNELS.iter().map(|s| s.to_string()).collect());
    for channel in CHANNELS {
        gate.join(channel, user);
    }
    gate
}

/// Handler whose gate admits `user`, with a small chunk limit for tests.
fn handler_for(user: UserId, max_message_chars: usize) -> ChatHandler {
    ChatHandler::with_config(
        PreferenceStore::new(),
        Box::new(gate_with_member(user)),
        Direction::Forward,
        max_message_chars,
    )
}
