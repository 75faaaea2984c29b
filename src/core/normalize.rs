//! Name normalization for RFC generation
//!
//! Upper-case, drop particles (`DE`, `LA`, `VON`...), and transliterate
//! everything outside `A-Z`, `Ñ`, `&` to plain ASCII.

use deunicode::deunicode_char;

use crate::core::tables::{is_allowed_name_character, is_excluded_word};
use crate::types::{RfcError, Result};

/// Normalize one name field.
///
/// Returns an empty string for blank input. Fails only when a character has
/// no transliteration at all.
pub fn clean_name(name: &str) -> Result<String> {
    let upper = name.trim().to_uppercase();
    let kept = upper
        .split_whitespace()
        .filter(|word| !is_excluded_word(word))
        .collect::<Vec<_>>()
        .join(" ");

    let mut transliterated = String::with_capacity(kept.len());
    for ch in kept.chars() {
        if is_allowed_name_character(ch) {
            transliterated.push(ch);
            continue;
        }
        match deunicode_char(ch) {
            Some(ascii) => transliterated.push_str(ascii),
            None => {
                return Err(RfcError::UnsupportedCharacter { ch, context: "name transliteration" });
            }
        }
    }

    // Transliteration may add spaces (CJK syllables) or lower-case letters.
    Ok(transliterated
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" "))
}

// =============================================================================
// TESTS
// =============================================================================
