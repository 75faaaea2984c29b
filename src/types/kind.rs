//! RFC subject classification

use serde::{Deserialize, Serialize};

/// Subject type encoded by an RFC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RfcKind {
    /// One of the two reserved generic codes
    Generic,
    /// Persona física: 4-letter name code
    Individual,
    /// Persona moral: 3-letter name code
    Organization,
    /// Failed the general structural check
    Invalid,
}

impl RfcKind {
    /// Label used on tax documents
    pub fn label(&self) -> &'static str {
        match self {
            RfcKind::Generic => "Genérico",
            RfcKind::Individual => "Persona Física",
            RfcKind::Organization => "Persona Moral",
            RfcKind::Invalid => "RFC Inválido",
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, RfcKind::Invalid)
    }
}

impl std::fmt::Display for RfcKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RfcKind::Generic => "GENERIC",
            RfcKind::Individual => "INDIVIDUAL",
            RfcKind::Organization => "ORGANIZATION",
            RfcKind::Invalid => "INVALID",
        };
        write!(f, "{}", name)
    }
}
