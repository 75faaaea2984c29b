//! CURP validator: length and positional structure
//!
//! CURP carries no checksum arithmetic; a code is valid when it is 19
//! characters long and its first 18 positions hold the expected character
//! classes. The 19th position is not constrained.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::types::CurpError;
use crate::CURP_LENGTH;

lazy_static! {
    // =========================================================================
    // Name letters (4) + YYMMDD + sex (H/M) + state (2) + consonants (3)
    // + disambiguator + digit
    // =========================================================================
    static ref RE_CURP: Regex = Regex::new(
        r"^[A-Z][AEIOUX][A-Z]{2}[0-9]{2}[0-1][0-9][0-3][0-9][MH][A-Z]{2}[BCDFGHJKLMNPQRSTVWXYZ]{3}[0-9A-Z][0-9]"
    ).unwrap();
}

/// Validator for CURP codes
#[derive(Debug, Default)]
pub struct CurpValidator;

impl CurpValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a CURP.
    ///
    /// Length is checked before structure, so a code of the wrong length
    /// always yields `CurpError::Length`.
    pub fn validate(&self, value: &str) -> Result<bool, CurpError> {
        let value = value.trim();
        let length = value.chars().count();
        if length != CURP_LENGTH {
            debug!(length, "CURP rejected: wrong length");
            return Err(CurpError::Length(length));
        }
        if !RE_CURP.is_match(value) {
            debug!(curp = value, "CURP rejected: structure");
            return Err(CurpError::Structure(value.to_string()));
        }
        Ok(true)
    }
}

// =============================================================================
// TESTS
// =============================================================================
