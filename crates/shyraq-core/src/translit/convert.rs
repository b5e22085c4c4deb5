use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::unicode::{capitalize, word_bounds, word_is_all_upper};

use super::alphabet::DEFAULT_TOML;
use super::config::{parse_alphabet_toml, AlphabetConfigError};
use super::table::MappingTable;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Cyrillic → Shyraq.
    Forward,
    /// Shyraq → Cyrillic.
    Reverse,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Casing context of the word enclosing a match.
#[derive(Clone, Copy)]
enum WordCase {
    Lower,
    Capitalized,
    AllUpper,
}

/// Both direction tables, built once and immutable afterwards.
#[derive(Debug)]
pub struct Transliterator {
    forward: MappingTable,
    reverse: MappingTable,
}

impl Transliterator {
    /// Build both direction tables from alphabet TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self, AlphabetConfigError> {
        let mappings = parse_alphabet_toml(toml_str)?;
        let forward = MappingTable::forward(&mappings);
        let reverse = MappingTable::reverse(&mappings)?;
        Ok(Self { forward, reverse })
    }

    /// Set custom alphabet TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), AlphabetConfigError> {
        // Validate eagerly, including reverse-collision checks
        Self::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| AlphabetConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Transliterator {
        static INSTANCE: OnceLock<Transliterator> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("alphabet TOML must be valid")
        })
    }

    fn table(&self, direction: Direction) -> &MappingTable {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    /// Transliterate `text` in the given direction.
    ///
    /// Unmapped characters pass through unchanged, so digits, punctuation
    /// and foreign-script runs survive in place. Never fails; empty input
    /// yields empty output.
    pub fn transliterate(&self, text: &str, direction: Direction) -> String {
        let _span =
            debug_span!("transliterate", ?direction, chars = text.chars().count()).entered();
        let chars: Vec<char> = text.chars().collect();
        let table = self.table(direction);
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            match table.longest_match(&chars, i) {
                Some(m) => {
                    let case = classify(&chars, i);
                    push_cased(&mut out, m.output, case);
                    i += m.len;
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }
        out
    }
}

/// Transliterate with the globally configured alphabet.
pub fn transliterate(text: &str, direction: Direction) -> String {
    Transliterator::global().transliterate(text, direction)
}

/// Classify the casing context of a match starting at `start`.
///
/// The enclosing word is recomputed for every match occurrence. A
/// one-letter uppercase word classifies as all-caps.
fn classify(chars: &[char], start: usize) -> WordCase {
    if !chars[start].is_uppercase() {
        return WordCase::Lower;
    }
    let (ws, we) = word_bounds(chars, start);
    if word_is_all_upper(chars, ws, we) {
        WordCase::AllUpper
    } else {
        WordCase::Capitalized
    }
}

fn push_cased(out: &mut String, grapheme: &str, case: WordCase) {
    match case {
        WordCase::Lower => out.extend(grapheme.chars().flat_map(char::to_lowercase)),
        WordCase::AllUpper => out.extend(grapheme.chars().flat_map(char::to_uppercase)),
        WordCase::Capitalized => out.push_str(&capitalize(grapheme)),
    }
}
