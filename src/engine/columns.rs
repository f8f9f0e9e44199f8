// src/engine/columns.rs
//! Column naming: header text → snake case, then deduplicate.

/// `"Set Ratio"` → `"set_ratio"`. Splits on single spaces only, so runs of
/// spaces leave empty segments (`"a  b"` → `"a__b"`).
pub fn format_snake(header: &str) -> String {
    header
        .split(' ')
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// First occurrence keeps its name; later ones become `"{n}/{name}"` with the
/// smallest `n` not yet used.
pub fn unique_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        if !out.iter().any(|n| n == name) {
            out.push(s!(name));
            continue;
        }
        let mut count = 0usize;
        while out.contains(&format!("{count}/{name}")) {
            count += 1;
        }
        out.push(format!("{count}/{name}"));
    }
    out
}

/// Full header pipeline: pad with `prefix_col` empty names, snake-case, dedup.
pub fn derive_names<S: AsRef<str>>(headers: &[S], prefix_col: usize) -> Vec<String> {
    let padded = std::iter::repeat_n("", prefix_col)
        .chain(headers.iter().map(|h| h.as_ref()))
        .map(format_snake)
        .collect::<Vec<_>>();
    unique_names(&padded)
}
