use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct AlphabetConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlphabetConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty source grapheme")]
    EmptySource,
    #[error("{first} and {second} both map to {target}")]
    ReverseCollision {
        target: String,
        first: String,
        second: String,
    },
    #[error("alphabet already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<source, target>`.
///
/// An empty value is a valid entry (a silent letter); an empty key is not.
/// Duplicate source graphemes cannot occur — TOML rejects repeated keys.
pub fn parse_alphabet_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, String>, AlphabetConfigError> {
    let config: AlphabetConfig =
        toml::from_str(toml_str).map_err(|e| AlphabetConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(AlphabetConfigError::Empty);
    }

    for key in config.mappings.keys() {
        if key.is_empty() {
            return Err(AlphabetConfigError::EmptySource);
        }
    }

    Ok(config.mappings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
"Ж" = "ZH"
"ж" = "zh"
"#;
        let map = parse_alphabet_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["Ж"], "ZH");
        assert_eq!(map["ж"], "zh");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_alphabet_toml(super::super::alphabet::DEFAULT_TOML).unwrap();
        assert_eq!(map.len(), 84, "42 letters, both cases");
        assert_eq!(map["х"], "kh");
        assert_eq!(map["ь"], "");
    }

    #[test]
    fn empty_value_is_allowed() {
        let toml = r#"
[mappings]
"ь" = ""
"#;
        let map = parse_alphabet_toml(toml).unwrap();
        assert_eq!(map["ь"], "");
    }

    #[test]
    fn error_empty_mappings() {
        let toml = "[mappings]\n";
        let err = parse_alphabet_toml(toml).unwrap_err();
        assert!(matches!(err, AlphabetConfigError::Empty));
    }

    #[test]
    fn error_empty_source() {
        let toml = r#"
[mappings]
"" = "a"
"#;
        let err = parse_alphabet_toml(toml).unwrap_err();
        assert!(matches!(err, AlphabetConfigError::EmptySource));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_alphabet_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, AlphabetConfigError::Parse(_)));
    }

    #[test]
    fn error_missing_mappings_section() {
        let err = parse_alphabet_toml("[other]\nx = \"y\"\n").unwrap_err();
        assert!(matches!(err, AlphabetConfigError::Parse(_)));
    }
}
