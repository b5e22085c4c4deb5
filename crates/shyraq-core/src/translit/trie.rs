use std::collections::HashMap;

#[derive(Debug)]
struct Node {
    children: HashMap<char, Node>,
    output: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            output: None,
        }
    }
}

/// Longest match found at a position.
#[derive(Debug, PartialEq, Eq)]
pub struct GraphemeMatch<'a> {
    /// Number of input chars consumed.
    pub len: usize,
    /// Mapped output grapheme.
    pub output: &'a str,
}

/// Longest-match recognizer over a set of grapheme keys.
///
/// With `fold_case` set, keys and probe text walk the trie through
/// `char::to_lowercase`, so "ZH", "Zh" and "zh" all reach the same node.
#[derive(Debug)]
pub struct GraphemeTrie {
    root: Node,
    fold_case: bool,
}

impl GraphemeTrie {
    pub fn new(fold_case: bool) -> Self {
        Self {
            root: Node::new(),
            fold_case,
        }
    }

    /// Insert a key. The first registration of a path wins; a later
    /// duplicate is ignored and reported as `false`.
    pub fn insert(&mut self, key: &str, output: &str) -> bool {
        let path = fold_chars(key, self.fold_case);
        let mut node = &mut self.root;
        for ch in path {
            node = node.children.entry(ch).or_insert_with(Node::new);
        }
        if node.output.is_some() {
            return false;
        }
        node.output = Some(output.to_string());
        true
    }

    /// The longest key matching `chars` at `start`, or `None`.
    ///
    /// `len` counts source chars, not folded chars, so the caller can
    /// advance its scan position by it directly.
    pub fn longest_match(&self, chars: &[char], start: usize) -> Option<GraphemeMatch<'_>> {
        let mut node = &self.root;
        let mut best = None;
        let mut i = start;
        'walk: while i < chars.len() {
            if self.fold_case {
                for folded in chars[i].to_lowercase() {
                    match node.children.get(&folded) {
                        Some(child) => node = child,
                        None => break 'walk,
                    }
                }
            } else {
                match node.children.get(&chars[i]) {
                    Some(child) => node = child,
                    None => break,
                }
            }
            i += 1;
            if let Some(output) = &node.output {
                best = Some(GraphemeMatch {
                    len: i - start,
                    output,
                });
            }
        }
        best
    }
}

fn fold_chars(s: &str, fold_case: bool) -> Vec<char> {
    if fold_case {
        s.chars().flat_map(char::to_lowercase).collect()
    } else {
        s.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn fixture() -> GraphemeTrie {
        let mut trie = GraphemeTrie::new(false);
        trie.insert("s", "с");
        trie.insert("sh", "ш");
        trie.insert("shch", "щ");
        trie
    }

    #[test]
    fn test_single_char_match() {
        let trie = fixture();
        let text = chars("sum");
        let m = trie.longest_match(&text, 0).unwrap();
        assert_eq!(m.len, 1);
        assert_eq!(m.output, "с");
    }

    #[test]
    fn test_longest_wins_over_prefix() {
        let trie = fixture();
        let text = chars("shch");
        let m = trie.longest_match(&text, 0).unwrap();
        assert_eq!(m.len, 4);
        assert_eq!(m.output, "щ");
    }

    #[test]
    fn test_partial_longer_key_falls_back() {
        let trie = fixture();
        // "shc" walks toward "shch" but cannot complete it
        let text = chars("shcx");
        let m = trie.longest_match(&text, 0).unwrap();
        assert_eq!(m.len, 2);
        assert_eq!(m.output, "ш");
    }

    #[test]
    fn test_no_match() {
        let trie = fixture();
        let text = chars("x");
        assert_eq!(trie.longest_match(&text, 0), None);
    }

    #[test]
    fn test_match_at_offset() {
        let trie = fixture();
        let text = chars("xsh");
        let m = trie.longest_match(&text, 1).unwrap();
        assert_eq!(m.len, 2);
        assert_eq!(m.output, "ш");
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let trie = fixture();
        let text = chars("SH");
        assert_eq!(trie.longest_match(&text, 0), None);
    }

    #[test]
    fn test_fold_case_matches_any_mixture() {
        let mut trie = GraphemeTrie::new(true);
        trie.insert("zh", "ж");
        for input in ["zh", "Zh", "zH", "ZH"] {
            let text = chars(input);
            let m = trie.longest_match(&text, 0).unwrap();
            assert_eq!(m.len, 2, "input {input}");
            assert_eq!(m.output, "ж");
        }
    }

    #[test]
    fn test_first_registration_wins() {
        let mut trie = GraphemeTrie::new(true);
        assert!(trie.insert("zh", "ж"));
        // "ZH" folds to the same path and must not overwrite
        assert!(!trie.insert("ZH", "щ"));
        let text = chars("zh");
        assert_eq!(trie.longest_match(&text, 0).unwrap().output, "ж");
    }
}
