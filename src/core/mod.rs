//! Core engines for rfcmx

pub mod tables;
pub mod normalize;
pub mod validator;
pub mod generator;
pub mod curp;

pub use normalize::clean_name;
pub use validator::RfcValidator;
pub use generator::RfcGeneratorFisicas;
pub use curp::CurpValidator;
