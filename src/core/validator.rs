//! RFC Validator: structure, date, homoclave and checksum checks
//!
//! Predicates never fail: an RFC that does not pass the general check simply
//! makes every other check return false. Only `is_fisica` / `is_moral` treat
//! an invalid RFC as an error, since asking for its subject type is a bug in
//! the caller.

use std::sync::OnceLock;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::core::tables::{checksum_value, is_homoclave_character};
use crate::types::{RfcError, RfcKind, Result, ValidationCheck, ValidationReport};
use crate::{
    CHECKSUM_BASE_WEIGHT, CHECKSUM_BODY_LENGTH, CHECKSUM_MODULUS, GENERIC_RFCS, RFC_LENGTHS,
};

lazy_static! {
    // =========================================================================
    // Name code (3-4) + YYMMDD + homoclave (2) + checksum
    // =========================================================================
    static ref RE_RFC: Regex = Regex::new(
        r"^[A-Z&Ñ]{3,4}([0-9]{6})([A-Z0-9]{2})[0-9A]$"
    ).unwrap();
}

/// Validator for a single RFC candidate
#[derive(Debug)]
pub struct RfcValidator {
    /// Upper-cased, trimmed candidate
    rfc: String,
    /// Result of the general check, computed once
    general: OnceLock<bool>,
}

impl RfcValidator {
    /// Load a candidate. Empty input is accepted but never valid.
    pub fn new(rfc: &str) -> Self {
        let rfc = rfc.trim().to_uppercase();
        let general = if rfc.is_empty() {
            OnceLock::from(false)
        } else {
            OnceLock::new()
        };
        trace!(%rfc, "loaded RFC candidate");
        Self { rfc, general }
    }

    /// Load a possibly absent candidate; `None` is permanently invalid
    pub fn from_optional(rfc: Option<&str>) -> Self {
        Self::new(rfc.unwrap_or_default())
    }

    /// The normalized candidate
    pub fn rfc(&self) -> &str {
        &self.rfc
    }

    /// Run every check (checksum skipped when not strict)
    pub fn validators(&self, strict: bool) -> ValidationReport {
        let mut report = ValidationReport::new();
        for check in ValidationCheck::for_mode(strict) {
            report.record(*check, self.run_check(*check));
        }
        report
    }

    /// True iff every check passed
    pub fn validate(&self, strict: bool) -> bool {
        let report = self.validators(strict);
        let valid = report.all_passed();
        if !valid {
            debug!(rfc = %self.rfc, failed = ?report.failed(), "RFC rejected");
        }
        valid
    }

    /// Alias of `validate`
    pub fn is_valid(&self, strict: bool) -> bool {
        self.validate(strict)
    }

    /// Run one check
    pub fn run_check(&self, check: ValidationCheck) -> bool {
        match check {
            ValidationCheck::GeneralRegex => self.validate_general_regex(),
            ValidationCheck::DateFormat => self.validate_date(),
            ValidationCheck::Homoclave => self.validate_homoclave(),
            ValidationCheck::Checksum => self.validate_checksum(),
        }
    }

    /// Length is 12 or 13 and the whole string matches the RFC pattern
    pub fn validate_general_regex(&self) -> bool {
        *self.general.get_or_init(|| {
            RFC_LENGTHS.contains(&self.rfc.chars().count()) && RE_RFC.is_match(&self.rfc)
        })
    }

    /// The YYMMDD segment is a real calendar date.
    ///
    /// The two-digit year is not resolved to a century; it only decides
    /// whether 29 February exists, using chrono's `%y` pivot.
    pub fn validate_date(&self) -> bool {
        match self.segment(1) {
            Some(date) => NaiveDate::parse_from_str(date, "%y%m%d").is_ok(),
            None => false,
        }
    }

    /// Both homoclave characters are alphanumeric and not `O`
    pub fn validate_homoclave(&self) -> bool {
        match self.segment(2) {
            Some(homoclave) => homoclave.chars().all(is_homoclave_character),
            None => false,
        }
    }

    /// The last character equals the recomputed checksum.
    ///
    /// Generic RFCs always pass: their trailing `0` is not a real checksum.
    pub fn validate_checksum(&self) -> bool {
        if !self.validate_general_regex() {
            return false;
        }
        if self.is_generic() {
            return true;
        }
        let expected = match Self::calculate_last_digit(&self.rfc, true) {
            Ok(digit) => digit,
            Err(_) => return false,
        };
        self.rfc.chars().last() == Some(expected)
    }

    /// One of the reserved generic codes
    pub fn is_generic(&self) -> bool {
        GENERIC_RFCS.contains(&self.rfc.as_str())
    }

    /// Subject type. Generic wins over the 4th-character test.
    pub fn detect_fisica_moral(&self) -> RfcKind {
        if !self.validate_general_regex() {
            return RfcKind::Invalid;
        }
        if self.is_generic() {
            return RfcKind::Generic;
        }
        match self.fourth_char() {
            Some(c) if c.is_ascii_digit() => RfcKind::Organization,
            _ => RfcKind::Individual,
        }
    }

    /// Belongs to an individual (4-character name code, not generic).
    /// Same 4th-character test as `detect_fisica_moral`, so `&` counts.
    pub fn is_fisica(&self) -> Result<bool> {
        self.require_general()?;
        Ok(matches!(self.fourth_char(), Some(c) if !c.is_ascii_digit()) && !self.is_generic())
    }

    /// Belongs to an organization (3-letter name code)
    pub fn is_moral(&self) -> Result<bool> {
        self.require_general()?;
        Ok(matches!(self.fourth_char(), Some(c) if c.is_ascii_digit()))
    }

    /// Checksum digit of an RFC body.
    ///
    /// With `with_checksum` the last character is dropped first. The body must
    /// then be 11 or 12 characters; 11 is left-padded with a space. Each
    /// character's table value is weighted 13 down to 2, the sum is taken
    /// modulo 11, and `11 - residual` becomes the digit (`0` for no residual,
    /// `A` for 10).
    pub fn calculate_last_digit(rfc: &str, with_checksum: bool) -> Result<char> {
        let mut chars: Vec<char> = rfc.trim().to_uppercase().chars().collect();
        if with_checksum {
            chars.pop();
        }
        if chars.len() != CHECKSUM_BODY_LENGTH && chars.len() != CHECKSUM_BODY_LENGTH - 1 {
            return Err(RfcError::InvalidChecksumLength(chars.len()));
        }
        if chars.len() < CHECKSUM_BODY_LENGTH {
            chars.insert(0, ' ');
        }

        let mut sum = 0u32;
        for (position, ch) in chars.iter().enumerate() {
            let value = checksum_value(*ch)
                .ok_or(RfcError::UnsupportedCharacter { ch: *ch, context: "checksum table" })?;
            sum += value * (CHECKSUM_BASE_WEIGHT - position as u32);
        }

        let residual = sum % CHECKSUM_MODULUS;
        let digit = match residual {
            0 => '0',
            r => match CHECKSUM_MODULUS - r {
                10 => 'A',
                d => char::from_digit(d, 10).unwrap_or('0'),
            },
        };
        Ok(digit)
    }

    /// Captured segment of a structurally valid RFC (1: date, 2: homoclave)
    fn segment(&self, group: usize) -> Option<&str> {
        if !self.validate_general_regex() {
            return None;
        }
        RE_RFC
            .captures(&self.rfc)
            .and_then(|caps| caps.get(group))
            .map(|m| m.as_str())
    }

    fn fourth_char(&self) -> Option<char> {
        self.rfc.chars().nth(3)
    }

    fn require_general(&self) -> Result<()> {
        if self.validate_general_regex() {
            Ok(())
        } else {
            Err(RfcError::InvalidRfc(self.rfc.clone()))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
