//! Chord symbol recognition
//!
//! Hand-rolled tokenizer for chord symbols: root letter, optional
//! accidental, optional quality/extension suffix, optional slash bass.
//! No regex; the suffix grammar is a closed set consumed greedily.

/// Suffix fragments a chord symbol may carry after its root.
///
/// Longer fragments come first so "maj" wins over "m" and "11" over "1".
const SUFFIX_PARTS: &[&str] = &[
    "maj", "min", "dim", "aug", "sus", "add", "#11", "b13", "#5", "b5", "#9", "b9", "11", "13",
    "m", "M", "+", "o", "2", "4", "5", "6", "7", "9", "(", ")",
];

/// Check whether a token is a chord symbol (e.g., "C", "F#m7", "Bb/D").
pub fn is_chord_symbol(token: &str) -> bool {
    let mut parts = token.splitn(2, '/');
    let main = match parts.next() {
        Some(main) if !main.is_empty() => main,
        _ => return false,
    };

    if !is_root_with_suffix(main) {
        return false;
    }

    // Slash bass must be a bare root with optional accidental
    match parts.next() {
        Some(bass) => is_bare_root(bass),
        None => true,
    }
}

/// Root letter + optional accidental + valid suffix
fn is_root_with_suffix(s: &str) -> bool {
    let rest = match strip_root(s) {
        Some(rest) => rest,
        None => return false,
    };
    is_valid_suffix(rest)
}

/// Root letter + optional accidental, nothing else
fn is_bare_root(s: &str) -> bool {
    matches!(strip_root(s), Some(""))
}

/// Strip "A".."G" plus an optional "#"/"b", returning the remainder
fn strip_root(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    match chars.next() {
        Some('A'..='G') => {}
        _ => return None,
    }
    let rest = chars.as_str();
    match rest.chars().next() {
        Some('#') | Some('b') => Some(&rest[1..]),
        _ => Some(rest),
    }
}

/// Consume the suffix greedily from the closed fragment set
fn is_valid_suffix(mut s: &str) -> bool {
    'outer: while !s.is_empty() {
        for part in SUFFIX_PARTS {
            if let Some(rest) = s.strip_prefix(part) {
                s = rest;
                continue 'outer;
            }
        }
        return false;
    }
    true
}
