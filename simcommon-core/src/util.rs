//! Small string helpers

/// Lowercase a string
pub fn lowercase(s: &str) -> String {
    s.to_lowercase()
}

/// Split a string on any of the delimiter characters, skipping empty
/// tokens
pub fn split(s: &str, delims: &str) -> Vec<String> {
    s.split(|c| delims.contains(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace every occurrence of a pattern
pub fn replace_all(s: &str, from: &str, to: &str) -> String {
    s.replace(from, to)
}

/// Trim surrounding whitespace
pub fn trimmed(s: &str) -> String {
    s.trim().to_string()
}
