//! Mandatory-subscription gate.
//!
//! The chat transport owns the real membership API; the handler only
//! learns which required channels a user has not joined.

use std::collections::{HashMap, HashSet};

use crate::types::UserId;

pub trait AccessGate: Send + Sync {
    /// Channels `user` has not joined; empty means fully subscribed.
    fn missing_channels(&self, user: UserId) -> Vec<String>;
}

/// Gate that admits everyone.
pub struct AllowAll;

impl AccessGate for AllowAll {
    fn missing_channels(&self, _user: UserId) -> Vec<String> {
        Vec::new()
    }
}

/// In-memory gate backed by explicit membership lists, for tests and the
/// CLI simulator. A required channel with no membership list counts as
/// missing, the same way a failed membership query does on the transport.
pub struct StaticGate {
    required: Vec<String>,
    members: HashMap<String, HashSet<i64>>,
}

impl StaticGate {
    pub fn new(required: Vec<String>) -> Self {
        Self {
            required,
            members: HashMap::new(),
        }
    }

    pub fn join(&mut self, channel: &str, user: UserId) {
        self.members
            .entry(channel.to_string())
            .or_default()
            .insert(user.0);
    }

    pub fn leave(&mut self, channel: &str, user: UserId) {
        if let Some(set) = self.members.get_mut(channel) {
            set.remove(&user.0);
        }
    }
}

impl AccessGate for StaticGate {
    fn missing_channels(&self, user: UserId) -> Vec<String> {
        self.required
            .iter()
            .filter(|channel| {
                self.members
                    .get(channel.as_str())
                    .map_or(true, |set| !set.contains(&user.0))
            })
            .cloned()
            .collect()
    }
}
