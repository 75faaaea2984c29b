//! RFC generator for individuals (persona física)
//!
//! RFC = name code (4) + YYMMDD (6) + homoclave (2) + checksum (1)
//!
//! The name code is derived when the generator is built, so a person whose
//! names cannot yield four letters is rejected up front. The full RFC is
//! computed on first access and cached; the generator is otherwise immutable.

use std::sync::OnceLock;

use chrono::NaiveDate;
use tracing::debug;

use crate::core::tables::{
    is_cacophonic, is_vowel, quotient_value, COMMON_FIRST_NAMES, HOMOCLAVE_ALPHABET,
};
use crate::core::RfcValidator;
use crate::types::{NameField, PersonRecord, RfcError, Result};
use crate::{HOMOCLAVE_BASE, HOMOCLAVE_MODULUS};

/// Generator for a single person's RFC
#[derive(Debug)]
pub struct RfcGeneratorFisicas {
    person: PersonRecord,
    /// Four-letter name code
    letters: String,
    /// Full RFC, computed once
    rfc: OnceLock<String>,
}

impl RfcGeneratorFisicas {
    /// Build from raw name fields
    pub fn new(paternal: &str, maternal: Option<&str>, given: &str, dob: NaiveDate) -> Result<Self> {
        Self::from_record(PersonRecord::new(paternal, maternal, given, dob)?)
    }

    /// Build from an already normalized record
    pub fn from_record(person: PersonRecord) -> Result<Self> {
        let letters = derive_letters(&person)?;
        Ok(Self {
            person,
            letters,
            rfc: OnceLock::new(),
        })
    }

    pub fn person(&self) -> &PersonRecord {
        &self.person
    }

    /// The 13-character RFC
    pub fn rfc(&self) -> Result<&str> {
        if let Some(rfc) = self.rfc.get() {
            return Ok(rfc.as_str());
        }

        let mut rfc = format!("{}{}{}", self.letters, self.generate_date(), self.homoclave()?);
        rfc.push(RfcValidator::calculate_last_digit(&rfc, false)?);
        debug!(%rfc, name = %self.person.full_name(), "generated RFC");

        Ok(self.rfc.get_or_init(|| rfc).as_str())
    }

    /// Four-letter name code
    pub fn generate_letters(&self) -> &str {
        &self.letters
    }

    /// Birth date as YYMMDD
    pub fn generate_date(&self) -> String {
        self.person.dob().format("%y%m%d").to_string()
    }

    pub fn is_compound_name(&self) -> bool {
        self.person.given().contains(' ')
    }

    /// Given name used for the name code
    pub fn name_initials(&self) -> String {
        name_initials(self.person.given())
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    /// `"0"` followed by the two-digit quotient value of every full-name character
    pub fn homoclave_digits(&self) -> Result<String> {
        let mut digits = String::from("0");
        for ch in self.full_name().chars() {
            let value = quotient_value(ch)
                .ok_or(RfcError::UnsupportedCharacter { ch, context: "homoclave table" })?;
            digits.push_str(&format!("{:02}", value));
        }
        Ok(digits)
    }

    /// Two-character homoclave.
    ///
    /// Each overlapping pair of digits, read as a number, is multiplied by
    /// its second digit. The sum modulo 1000 is split into quotient and
    /// remainder by 34, each indexing the homoclave alphabet.
    pub fn homoclave(&self) -> Result<String> {
        let sum = homoclave_sum(self.homoclave_digits()?.chars().filter_map(|c| c.to_digit(10)));

        let quotient = HOMOCLAVE_ALPHABET[(sum / HOMOCLAVE_BASE) as usize];
        let remainder = HOMOCLAVE_ALPHABET[(sum % HOMOCLAVE_BASE) as usize];
        Ok([quotient, remainder].iter().collect())
    }
}

/// Sum of the pair products modulo 1000, reduced at every step so long
/// names cannot overflow it
fn homoclave_sum(digits: impl IntoIterator<Item = u32>) -> u32 {
    let mut digits = digits.into_iter();
    let Some(mut previous) = digits.next() else {
        return 0;
    };
    digits.fold(0, |acc, digit| {
        let product = (previous * 10 + digit) * digit;
        previous = digit;
        (acc + product) % HOMOCLAVE_MODULUS
    })
}

/// Given name without a leading MARIA / JOSE when the name is compound
fn name_initials(given: &str) -> String {
    let parts: Vec<&str> = given.split(' ').collect();
    if parts.len() > 1 && COMMON_FIRST_NAMES.contains(&parts[0]) {
        parts[1..].join(" ")
    } else {
        given.to_string()
    }
}

/// Four-letter name code.
///
/// 1. first letter of the paternal surname
/// 2. first vowel of the paternal surname after its first letter
/// 3. first letter of the maternal surname
/// 4. first letter of the given name
///
/// A missing vowel or maternal surname is made up with one more letter of
/// the given name; when both are missing the paternal surname's second
/// letter fills slot 3. Spaces inside compound names are skipped when
/// taking a second letter.
fn derive_letters(person: &PersonRecord) -> Result<String> {
    let paternal: Vec<char> = person.paternal().chars().filter(|c| *c != ' ').collect();
    let initials: Vec<char> = name_initials(person.given())
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    let mut code = String::with_capacity(4);
    let mut extra_letter = false;

    code.push(*paternal.first().ok_or(RfcError::MissingField(NameField::PaternalSurname))?);

    match paternal.iter().skip(1).find(|c| is_vowel(**c)) {
        Some(vowel) => code.push(*vowel),
        None => extra_letter = true,
    }

    match person.maternal().chars().next() {
        Some(first) => code.push(first),
        None if extra_letter => {
            code.push(*paternal.get(1).ok_or(RfcError::NameTooShort(NameField::PaternalSurname))?)
        }
        None => extra_letter = true,
    }

    code.push(*initials.first().ok_or(RfcError::MissingField(NameField::GivenName))?);
    if extra_letter {
        code.push(*initials.get(1).ok_or(RfcError::NameTooShort(NameField::GivenName))?);
    }

    if is_cacophonic(&code) {
        debug!(%code, "replacing cacophonic name code");
        code.pop();
        code.push('X');
    }

    Ok(code)
}

// =============================================================================
// TESTS
// =============================================================================
