//! Validation checks and the per-check report
//!
//! The set of checks is closed: every report key is a `ValidationCheck`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Individual checks run by the RFC validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCheck {
    /// Length is 12 or 13 and the structural pattern matches
    GeneralRegex,
    /// YYMMDD segment is a real calendar date
    DateFormat,
    /// Homoclave characters exclude the letter O
    Homoclave,
    /// Last character equals the recomputed checksum digit
    Checksum,
}

impl ValidationCheck {
    /// All checks, in execution order
    pub const ALL: [ValidationCheck; 4] = [
        ValidationCheck::GeneralRegex,
        ValidationCheck::DateFormat,
        ValidationCheck::Homoclave,
        ValidationCheck::Checksum,
    ];

    /// Checks run in non-strict mode (checksum skipped)
    pub const NON_STRICT: [ValidationCheck; 3] = [
        ValidationCheck::GeneralRegex,
        ValidationCheck::DateFormat,
        ValidationCheck::Homoclave,
    ];

    /// Checks for the given strictness
    pub fn for_mode(strict: bool) -> &'static [ValidationCheck] {
        if strict {
            &Self::ALL
        } else {
            &Self::NON_STRICT
        }
    }

    /// Get the check name (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::GeneralRegex => "general_regex",
            Self::DateFormat => "date_format",
            Self::Homoclave => "homoclave",
            Self::Checksum => "checksum",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::GeneralRegex => "Length and structure",
            Self::DateFormat => "Date segment is a calendar date",
            Self::Homoclave => "Homoclave characters",
            Self::Checksum => "Checksum digit",
        }
    }
}

impl std::fmt::Display for ValidationCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Outcome of every check run against one RFC
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checks: BTreeMap<ValidationCheck, bool>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, check: ValidationCheck, passed: bool) {
        self.checks.insert(check, passed);
    }

    /// Result of a single check, `None` if it was not run
    pub fn get(&self, check: ValidationCheck) -> Option<bool> {
        self.checks.get(&check).copied()
    }

    /// True iff every recorded check passed
    pub fn all_passed(&self) -> bool {
        self.checks.values().all(|passed| *passed)
    }

    /// Checks that did not pass
    pub fn failed(&self) -> Vec<ValidationCheck> {
        self.checks
            .iter()
            .filter(|(_, passed)| !**passed)
            .map(|(check, _)| *check)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
