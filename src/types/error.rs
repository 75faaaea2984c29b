//! Error types for RFC and CURP operations.
//!
//! Structural failures of a candidate RFC are never errors: validator
//! predicates return `false`. These types cover precondition violations,
//! rejected person records, and characters outside the lookup tables.

use thiserror::Error;

use crate::types::NameField;

/// Errors raised by the RFC validator and generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RfcError {
    /// A classification was requested on an RFC that failed the general check.
    #[error("invalid RFC: {0:?}")]
    InvalidRfc(String),

    /// A required name field is empty (before or after normalization).
    #[error("{0} is required")]
    MissingField(NameField),

    /// The birth date could not be parsed as a calendar date.
    #[error("invalid birth date: {0:?}")]
    InvalidBirthDate(String),

    /// A normalized name is too short to supply the letters the RFC needs.
    #[error("{0} is too short to derive the RFC name code")]
    NameTooShort(NameField),

    /// A character has no transliteration or no table entry.
    #[error("unsupported character {ch:?} in {context}")]
    UnsupportedCharacter { ch: char, context: &'static str },

    /// Checksum input was not 11 or 12 characters long.
    #[error("checksum input must be 11 or 12 characters, got {0}")]
    InvalidChecksumLength(usize),
}

/// Errors raised by CURP validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurpError {
    #[error("CURP length must be 19, got {0}")]
    Length(usize),

    #[error("invalid CURP structure: {0:?}")]
    Structure(String),
}

/// Result alias for RFC operations.
pub type Result<T> = std::result::Result<T, RfcError>;
