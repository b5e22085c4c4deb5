use std::collections::BTreeMap;

use super::config::AlphabetConfigError;
use super::trie::{GraphemeMatch, GraphemeTrie};

/// One direction's mapping table, compiled into a longest-match trie.
#[derive(Debug)]
pub struct MappingTable {
    trie: GraphemeTrie,
}

impl MappingTable {
    /// Forward table: source graphemes matched exactly, case-sensitive.
    /// Upper and lower case source letters are distinct entries carrying
    /// their own target casing.
    pub fn forward(mappings: &BTreeMap<String, String>) -> Self {
        let mut trie = GraphemeTrie::new(false);
        for (source, target) in mappings {
            trie.insert(source, target);
        }
        Self { trie }
    }

    /// Reverse table: every non-empty forward entry inverted as
    /// `lowercase(target) → lowercase(source)`, matched case-insensitively.
    /// Silent letters (empty target) have no reverse entry.
    ///
    /// Fails when two distinct source letters share a lowercase target —
    /// the alphabet must be collision-free before any text is translated.
    pub fn reverse(mappings: &BTreeMap<String, String>) -> Result<Self, AlphabetConfigError> {
        let mut canonical: BTreeMap<String, String> = BTreeMap::new();
        for (source, target) in mappings {
            if target.is_empty() {
                continue;
            }
            let key = target.to_lowercase();
            let value = source.to_lowercase();
            match canonical.get(&key) {
                Some(existing) if *existing != value => {
                    return Err(AlphabetConfigError::ReverseCollision {
                        target: key,
                        first: existing.clone(),
                        second: value,
                    });
                }
                Some(_) => {} // the other case of the same letter
                None => {
                    canonical.insert(key, value);
                }
            }
        }

        let mut trie = GraphemeTrie::new(true);
        for (target, source) in &canonical {
            trie.insert(target, source);
        }
        Ok(Self { trie })
    }

    pub fn longest_match(&self, chars: &[char], start: usize) -> Option<GraphemeMatch<'_>> {
        self.trie.longest_match(chars, start)
    }
}
