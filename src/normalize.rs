// src/normalize.rs

//! Recipe-name normalization
//!
//! Cleans up handwritten recipe names: hyphens and underscores become
//! spaces, everything that is not a letter or whitespace is dropped, words
//! are title-cased and joined by single spaces.

/// Normalize a handwritten recipe name
///
/// Returns `None` when nothing survives the cleanup.
pub fn normalize_name(input: &str) -> Option<String> {
    let mut cleaned = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '-' | '_' => cleaned.push(' '),
            c if c.is_ascii_alphabetic() || c.is_whitespace() => cleaned.push(c),
            _ => {}
        }
    }

    let formatted = cleaned
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if formatted.is_empty() {
        None
    } else {
        Some(formatted)
    }
}

/// Upper-case the first letter of a word, lower-case the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}
