//! Person record: the input to RFC generation for individuals
//!
//! All normalization happens in the constructor. A record that exists is
//! complete, normalized, and its names hold only `A-Z`, `Ñ`, `&` and single
//! spaces, so every letter taken from them fits an RFC name code.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::normalize::clean_name;
use crate::core::tables;
use crate::types::{RfcError, Result};

/// Name fields of a person record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameField {
    PaternalSurname,
    MaternalSurname,
    GivenName,
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NameField::PaternalSurname => "paternal surname",
            NameField::MaternalSurname => "maternal surname",
            NameField::GivenName => "given name",
        };
        write!(f, "{}", name)
    }
}

/// Normalized, immutable person data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRecord {
    /// Normalized paternal surname (never empty)
    paternal: String,
    /// Normalized maternal surname (empty when absent)
    maternal: String,
    /// Normalized given name (never empty)
    given: String,
    /// Date of birth
    dob: NaiveDate,
}

impl PersonRecord {
    /// Build a record from raw name fields.
    ///
    /// Fails with `MissingField` when the paternal surname or given name is
    /// blank, or becomes blank once particles like `DE` or `LA` are dropped,
    /// and with `UnsupportedCharacter` when a name still holds anything but
    /// letters, `&` and spaces after transliteration (digits, punctuation).
    pub fn new(paternal: &str, maternal: Option<&str>, given: &str, dob: NaiveDate) -> Result<Self> {
        let paternal = normalize_required(paternal, NameField::PaternalSurname)?;
        let maternal = match maternal {
            Some(raw) => clean_name(raw)?,
            None => String::new(),
        };
        let given = normalize_required(given, NameField::GivenName)?;

        let record = Self { paternal, maternal, given, dob };

        if let Some(ch) = record
            .full_name()
            .chars()
            .find(|c| *c != ' ' && !tables::is_allowed_name_character(*c))
        {
            debug!(%ch, "rejecting person record: character not allowed in names");
            return Err(RfcError::UnsupportedCharacter { ch, context: "name" });
        }

        Ok(record)
    }

    /// Like `new`, with the birth date given as `YYYY-MM-DD`
    pub fn parse(paternal: &str, maternal: Option<&str>, given: &str, dob: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d")
            .map_err(|_| RfcError::InvalidBirthDate(dob.to_string()))?;
        Self::new(paternal, maternal, given, date)
    }

    pub fn paternal(&self) -> &str {
        &self.paternal
    }

    pub fn maternal(&self) -> &str {
        &self.maternal
    }

    pub fn given(&self) -> &str {
        &self.given
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    /// Non-empty name components joined by single spaces
    pub fn full_name(&self) -> String {
        [&self.paternal, &self.maternal, &self.given]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn normalize_required(raw: &str, field: NameField) -> Result<String> {
    if raw.trim().is_empty() {
        debug!(%field, "rejecting person record: blank field");
        return Err(RfcError::MissingField(field));
    }
    let cleaned = clean_name(raw)?;
    if cleaned.is_empty() {
        debug!(%field, raw, "rejecting person record: nothing left after normalization");
        return Err(RfcError::MissingField(field));
    }
    Ok(cleaned)
}

// =============================================================================
// TESTS
// =============================================================================
