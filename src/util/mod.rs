/// Normalizes a string for fuzzy matching: lowercase, punctuation as spaces, single spaces.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .replace(['_', ':', ',', '.', '-', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates to at most `width` characters, marking the cut with `…`.
pub fn fit_width(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}
