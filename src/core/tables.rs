//! Character tables for RFC checksum and homoclave arithmetic
//!
//! Pure data. Lookups return `None` for characters outside a table's key
//! domain; callers turn that into `RfcError::UnsupportedCharacter`.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Checksum values, used with positional weights 13..2
pub const CHECKSUM_TABLE: [(char, u32); 39] = [
    ('0', 0), ('1', 1), ('2', 2), ('3', 3), ('4', 4),
    ('5', 5), ('6', 6), ('7', 7), ('8', 8), ('9', 9),
    ('A', 10), ('B', 11), ('C', 12), ('D', 13), ('E', 14),
    ('F', 15), ('G', 16), ('H', 17), ('I', 18), ('J', 19),
    ('K', 20), ('L', 21), ('M', 22), ('N', 23), ('&', 24),
    ('O', 25), ('P', 26), ('Q', 27), ('R', 28), ('S', 29),
    ('T', 30), ('U', 31), ('V', 32), ('W', 33), ('X', 34),
    ('Y', 35), ('Z', 36), (' ', 37), ('Ñ', 38),
];

/// Quotient/remainder values for the homoclave digit string.
/// Numbering skips 20, 30 and 31.
pub const QUOTIENT_TABLE: [(char, u32); 39] = [
    (' ', 0), ('0', 0), ('1', 1), ('2', 2), ('3', 3),
    ('4', 4), ('5', 5), ('6', 6), ('7', 7), ('8', 8),
    ('9', 9), ('&', 10), ('A', 11), ('B', 12), ('C', 13),
    ('D', 14), ('E', 15), ('F', 16), ('G', 17), ('H', 18),
    ('I', 19), ('J', 21), ('K', 22), ('L', 23), ('M', 24),
    ('N', 25), ('O', 26), ('P', 27), ('Q', 28), ('R', 29),
    ('S', 32), ('T', 33), ('U', 34), ('V', 35), ('W', 36),
    ('X', 37), ('Y', 38), ('Z', 39), ('Ñ', 40),
];

/// Base-34 digits for the two homoclave characters (no `O`, no `Ñ`, no `0`)
pub const HOMOCLAVE_ALPHABET: [char; 34] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Characters accepted in the homoclave segment of an RFC
pub const HOMOCLAVE_CHARACTERS: &str = "ABCDEFGHIJKLMNPQRSTUVWXYZ0123456789";

/// Characters kept as-is by name normalization
pub const ALLOWED_NAME_CHARACTERS: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ&";

pub const VOWELS: &str = "AEIOU";

/// Particles dropped from individual names
pub const EXCLUDED_WORDS_FISICAS: [&str; 11] = [
    "DE", "LA", "LAS", "MC", "VON", "DEL", "LOS", "Y", "MAC", "VAN", "MI",
];

/// Given-name prefixes skipped when the given name is compound
pub const COMMON_FIRST_NAMES: [&str; 2] = ["MARIA", "JOSE"];

/// Name codes that must not be issued verbatim
pub const CACOPHONIC_WORDS: [&str; 39] = [
    "BUEI", "BUEY", "CACA", "CACO", "CAGA", "CAGO", "CAKA", "COGE",
    "COJA", "COJE", "COJI", "COJO", "CULO", "FETO", "GUEY", "JOTO",
    "KACA", "KACO", "KAGA", "KAGO", "KOGE", "KOJO", "KAKA", "KULO",
    "MAME", "MAMO", "MEAR", "MEON", "MION", "MOCO", "MULA", "PEDA",
    "PEDO", "PENE", "PUTA", "PUTO", "QULO", "RATA", "RUIN",
];

lazy_static! {
    static ref CHECKSUM_MAP: HashMap<char, u32> = CHECKSUM_TABLE.iter().copied().collect();
    static ref QUOTIENT_MAP: HashMap<char, u32> = QUOTIENT_TABLE.iter().copied().collect();
}

pub fn checksum_value(c: char) -> Option<u32> {
    CHECKSUM_MAP.get(&c).copied()
}

pub fn quotient_value(c: char) -> Option<u32> {
    QUOTIENT_MAP.get(&c).copied()
}

pub fn is_homoclave_character(c: char) -> bool {
    HOMOCLAVE_CHARACTERS.contains(c)
}

pub fn is_allowed_name_character(c: char) -> bool {
    ALLOWED_NAME_CHARACTERS.contains(c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

pub fn is_excluded_word(word: &str) -> bool {
    EXCLUDED_WORDS_FISICAS.contains(&word)
}

pub fn is_cacophonic(code: &str) -> bool {
    CACOPHONIC_WORDS.contains(&code)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_share_key_domain() {
        for (c, _) in CHECKSUM_TABLE {
            assert!(quotient_value(c).is_some(), "{:?} missing from quotient table", c);
        }
        for (c, _) in QUOTIENT_TABLE {
            assert!(checksum_value(c).is_some(), "{:?} missing from checksum table", c);
        }
    }

    #[test]
    fn test_checksum_values() {
        assert_eq!(checksum_value('0'), Some(0));
        assert_eq!(checksum_value('N'), Some(23));
        assert_eq!(checksum_value('&'), Some(24));
        assert_eq!(checksum_value('O'), Some(25));
        assert_eq!(checksum_value(' '), Some(37));
        assert_eq!(checksum_value('Ñ'), Some(38));
        assert_eq!(checksum_value('a'), None);
        assert_eq!(checksum_value('-'), None);
    }

    #[test]
    fn test_quotient_values_skip_gaps() {
        assert_eq!(quotient_value(' '), Some(0));
        assert_eq!(quotient_value('I'), Some(19));
        assert_eq!(quotient_value('J'), Some(21));
        assert_eq!(quotient_value('R'), Some(29));
        assert_eq!(quotient_value('S'), Some(32));
        assert_eq!(quotient_value('Ñ'), Some(40));
        let values: Vec<u32> = QUOTIENT_TABLE.iter().map(|(_, v)| *v).collect();
        assert!(!values.contains(&20));
        assert!(!values.contains(&30));
        assert!(!values.contains(&31));
    }

    #[test]
    fn test_homoclave_alphabet() {
        assert_eq!(HOMOCLAVE_ALPHABET.len() as u32, crate::HOMOCLAVE_BASE);
        assert!(!HOMOCLAVE_ALPHABET.contains(&'O'));
        assert!(!HOMOCLAVE_ALPHABET.contains(&'0'));
        assert_eq!(HOMOCLAVE_ALPHABET[0], '1');
        assert_eq!(HOMOCLAVE_ALPHABET[33], 'Z');
        for symbol in HOMOCLAVE_ALPHABET {
            assert!(is_homoclave_character(symbol));
        }
    }

    #[test]
    fn test_word_lists() {
        assert!(is_excluded_word("VON"));
        assert!(!is_excluded_word("VONN"));
        assert!(is_cacophonic("MAME"));
        assert!(!is_cacophonic("MAMX"));
        assert!(CACOPHONIC_WORDS.iter().all(|w| w.len() == 4));
    }
}
