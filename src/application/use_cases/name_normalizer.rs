// ============================================================
// NAME NORMALIZER
// ============================================================
// Leetspeak de-symbolization, accent cleanup and title-casing
// for contact names coming out of phone exports.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::options::AccentMode;

/// Symbol-to-letter substitutions seen in real contact names ("M4ri4",
/// "Jo√o"). Loaded once, never mutated.
static SYMBOL_MAP: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('@', 'a'),
        ('$', 's'),
        ('#', 'h'),
        ('1', 'l'),
        ('&', 'e'),
        ('3', 'e'),
        ('4', 'a'),
        ('5', 's'),
        ('7', 't'),
        ('!', 'i'),
        ('%', 'o'),
        ('√', 'v'),
        ('º', 'o'),
    ])
});

/// Accented letters the legacy allow-list kept. Lowercase only; the legacy
/// rule stripped uppercase accented letters and `KeepLatin` reproduces that.
const KEPT_ACCENTED: &str = "çãáéíóúâêîôûõäëïöü";

/// Replace mapped symbols with letters. A substituted first character is
/// upper-cased, substitutions anywhere else are lower-cased, everything
/// unmapped passes through.
pub fn substitute_symbols(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(index, c)| match SYMBOL_MAP.get(&c) {
            Some(&mapped) => {
                if index == 0 {
                    mapped.to_ascii_uppercase()
                } else {
                    mapped
                }
            }
            None => c,
        })
        .collect()
}

/// Drop characters that have no place in a person's name.
pub fn clean_name(name: &str, mode: AccentMode) -> String {
    let cleaned: String = match mode {
        AccentMode::Strip => name
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .filter(|c| {
                c.is_alphanumeric() || *c == '_' || c.is_whitespace() || *c == '-' || *c == '\''
            })
            .collect(),
        AccentMode::KeepLatin => name
            .chars()
            .filter(|c| {
                c.is_ascii_alphanumeric()
                    || *c == '_'
                    || c.is_whitespace()
                    || *c == '-'
                    || KEPT_ACCENTED.contains(*c)
            })
            .collect(),
    };
    cleaned.trim().to_string()
}

/// Upper-case the first letter of each word, lower-case the rest, collapse
/// whitespace runs to single spaces.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full name pipeline: join the non-empty name parts, de-symbolize, clean,
/// title-case. The caller applies the phone/email fallback because those
/// fields are derived elsewhere.
pub fn normalize_full_name(first: &str, middle: &str, last: &str, mode: AccentMode) -> String {
    let joined = [first, middle, last]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim())
        .collect::<Vec<_>>()
        .join(" ");

    title_case(&clean_name(&substitute_symbols(&joined), mode))
}
