//! Per-user direction preferences with file persistence.
//!
//! HashMap behind an `RwLock` so that `set` can be called while handlers
//! hold a shared reference. Absent users fall back to the service default
//! direction at the handler layer; the store itself only answers "what
//! was saved".

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use shyraq_core::translit::Direction;

use crate::types::UserId;

const MAGIC: &[u8; 4] = b"SQPF";
const VERSION: u8 = 1;

#[derive(Serialize, Deserialize)]
struct PrefRecord {
    user_id: i64,
    direction: Direction,
}

#[derive(Debug)]
pub struct PreferenceStore {
    entries: RwLock<HashMap<i64, Direction>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stored direction for `user`, or `None` if they never chose one.
    pub fn get(&self, user: UserId) -> Option<Direction> {
        let map = self.entries.read().unwrap();
        map.get(&user.0).copied()
    }

    /// Store (or replace) `user`'s direction.
    pub fn set(&self, user: UserId, direction: Direction) {
        let mut map = self.entries.write().unwrap();
        map.insert(user.0, direction);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Serialize to bytes (SQPF format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, io::Error> {
        let map = self.entries.read().unwrap();
        let mut records: Vec<PrefRecord> = map
            .iter()
            .map(|(&user_id, &direction)| PrefRecord { user_id, direction })
            .collect();
        records.sort_by_key(|r| r.user_id);

        let body = bincode::serialize(&records).map_err(io::Error::other)?;
        let mut buf = Vec::with_capacity(5 + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (SQPF format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        if bytes.len() < 5 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "too short"));
        }
        if &bytes[0..4] != MAGIC {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "bad magic"));
        }
        if bytes[4] != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unsupported version",
            ));
        }
        let records: Vec<PrefRecord> = bincode::deserialize(&bytes[5..])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut map = HashMap::new();
        for rec in records {
            map.insert(rec.user_id, rec.direction);
        }
        Ok(Self {
            entries: RwLock::new(map),
        })
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Open from file, returning an empty store if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}
