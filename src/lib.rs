//! rfcmx: Mexican tax ID (RFC) validation and generation, CURP validation
//!
//! Validation: string → RfcValidator → checks / classification
//! Generation: PersonRecord → RfcGeneratorFisicas → 13-character RFC

pub mod core;
pub mod types;

// =============================================================================
// RFC SHAPE
// =============================================================================

/// RFC length for an organization (persona moral): 3-letter name code
pub const RFC_ORGANIZATION_LENGTH: usize = 12;

/// RFC length for an individual (persona física): 4-letter name code
pub const RFC_INDIVIDUAL_LENGTH: usize = 13;

/// Every accepted RFC length
pub const RFC_LENGTHS: [usize; 2] = [RFC_ORGANIZATION_LENGTH, RFC_INDIVIDUAL_LENGTH];

/// Characters covered by the checksum (an 11-char body is left-padded to this)
pub const CHECKSUM_BODY_LENGTH: usize = 12;

// =============================================================================
// GENERIC RFCs - reserved by the tax authority for unidentified recipients
// =============================================================================

/// Generic RFC for Mexican recipients
pub const GENERIC_RFC_NATIONAL: &str = "XAXX010101000";

/// Generic RFC for foreign recipients (export invoices)
pub const GENERIC_RFC_FOREIGN: &str = "XEXX010101000";

pub const GENERIC_RFCS: [&str; 2] = [GENERIC_RFC_NATIONAL, GENERIC_RFC_FOREIGN];

// =============================================================================
// CHECKSUM / HOMOCLAVE ARITHMETIC
// =============================================================================

/// Weight of the first character; decreases by one per position down to 2
pub const CHECKSUM_BASE_WEIGHT: u32 = 13;

/// Checksum modulus
pub const CHECKSUM_MODULUS: u32 = 11;

/// Homoclave weighted sum is reduced modulo this
pub const HOMOCLAVE_MODULUS: u32 = 1000;

/// Base of the homoclave encoding (size of the assignment alphabet)
pub const HOMOCLAVE_BASE: u32 = 34;

// =============================================================================
// CURP
// =============================================================================

pub const CURP_LENGTH: usize = 19;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
