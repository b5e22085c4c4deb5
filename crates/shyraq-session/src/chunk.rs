//! Transport-size chunking for long replies.

/// Split `text` into parts of at most `max_chars` characters each,
/// breaking on char boundaries only. Empty text yields no parts.
pub fn chunk_message(text: &str, max_chars: usize) -> Vec<String> {
    debug_assert!(max_chars > 0);
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for ch in text.chars() {
        if count == max_chars {
            parts.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
