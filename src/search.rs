//! Filter tokenization.
//!
//! A raw filter is split into comparison tokens on the configured delimiter
//! characters. Tokens keep their case; folding happens at scoring time.

/// Split `filter` into comparison tokens.
///
/// With delimiters disabled (or no delimiter characters configured) the
/// whole trimmed filter is a single token. An empty or all-delimiter filter
/// yields no tokens at all, which downstream scores every candidate at 0.
pub fn tokenize_filter(filter: &str, delimiter: Option<&str>, use_delimiter: bool) -> Vec<String> {
    let trimmed = filter.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let delimiters = match delimiter {
        Some(d) if use_delimiter && !d.is_empty() => d,
        _ => return vec![trimmed.to_string()],
    };

    trimmed
        .split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
