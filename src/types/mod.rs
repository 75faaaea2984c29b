//! Value types for rfcmx

mod error;
mod kind;
mod check;
mod person;

pub use error::{RfcError, CurpError, Result};
pub use kind::RfcKind;
pub use check::{ValidationCheck, ValidationReport};
pub use person::{PersonRecord, NameField};
