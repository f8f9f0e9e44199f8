// src/core/sanitize.rs

/// Python-style tail slice: the last `n` chars, or the whole string if shorter.
pub fn last_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}

/// Own-text node value as written to output: first node, trimmed.
pub fn first_trimmed(nodes: &[&str]) -> Option<String> {
    nodes.first().map(|t| t.trim().to_string())
}

/// `[25, 20, 25, 18]`
pub fn bracket_list<T: ToString>(values: &[T]) -> String {
    let inner = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
    join!("[", &inner, "]")
}
