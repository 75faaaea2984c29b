//! Integration tests for RFC generation (persona física)
//!
//! Tests the full path: raw names → PersonRecord → RfcGeneratorFisicas → RfcValidator

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use rfcmx::core::{RfcGeneratorFisicas, RfcValidator};
use rfcmx::types::{NameField, PersonRecord, RfcError, RfcKind};

fn jan_first_2000() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Name code for a table of real-world names (given, paternal, maternal, expected)
#[test]
fn test_generate_letters() {
    let cases: [(&str, &str, Option<&str>, &str); 22] = [
        ("Juan", "Barrios", Some("Fernández"), "BAFJ"),
        ("Eva", "Iriarte", Some("Méndez"), "IIME"),
        ("Manuel", "Chávez", Some("González"), "CAGM"),
        ("Felipe", "Camargo", Some("Lleras"), "CALF"),
        ("Charles", "Kennedy", Some("Truman"), "KETC"),
        ("Alvaro", "De la O", Some("Lozano"), "OLAL"),
        ("Ernesto", "Ek", Some("Rivera"), "ERER"),
        ("Julio", "Ek", Some(""), "EKJU"),
        ("Julio", "Ek", None, "EKJU"),
        ("Luis", "Bárcenas", Some(""), "BALU"),
        ("Dolores", "San Martín", Some("Dávalos"), "SADD"),
        ("Mario", "Sánchez de la Barquera", Some("Gómez"), "SAGM"),
        ("Antonio", "Jiménez", Some("Ponce de León"), "JIPA"),
        ("Luz María", "Fernández", Some("Juárez"), "FEJL"),
        ("José Antonio", "Camargo", Some("Hernández"), "CAHA"),
        ("María de Guadalupe", "Hernández", Some("von Räutlingen"), "HERG"),
        ("María Luisa", "Ramírez", Some("Sánchez"), "RASL"),
        ("Ernesto", "Martínez", Some("Mejía"), "MAMX"),
        ("Fernando", "Ñemez", Some("Ñoz"), "ÑEÑF"),
        ("泽东", "毛", Some(""), "MAZE"),
        ("中山", "孙", Some(""), "SUZH"),
        ("中山", "孙", None, "SUZH"),
    ];

    for (given, paternal, maternal, expected) in cases {
        let generator = RfcGeneratorFisicas::new(paternal, maternal, given, jan_first_2000()).unwrap();
        assert_eq!(
            generator.generate_letters(),
            expected,
            "{} {} {:?}",
            given,
            paternal,
            maternal
        );
    }
}

/// Complete RFCs, covering checksum digits `A` and `0`
#[test]
fn test_full_rfc() {
    let cases = [
        ("Barrios", Some("Fernández"), "Juan", "2000-01-01", "BAFJ000101SB0"),
        ("Gómez", Some("Díaz"), "Emma", "1985-03-15", "GODE850315GR6"),
        ("Iriarte", Some("Méndez"), "Eva", "1961-08-14", "IIME610814CSA"),
        ("San Martín", Some("Dávalos"), "Dolores", "1975-12-31", "SADD7512311G0"),
        ("Hernández", Some("von Räutlingen"), "María de Guadalupe", "1999-02-28", "HERG990228356"),
        ("Ñemez", Some("Ñoz"), "Fernando", "2000-01-01", "ÑEÑF0001013X3"),
    ];

    for (paternal, maternal, given, dob, expected) in cases {
        let record = PersonRecord::parse(paternal, maternal, given, dob).unwrap();
        let generator = RfcGeneratorFisicas::from_record(record).unwrap();
        assert_eq!(generator.rfc().unwrap(), expected);
    }
}

/// Every generated RFC validates strictly and classifies as an individual
#[test]
fn test_round_trip() {
    let people = [
        ("Barrios", Some("Fernández"), "Juan"),
        ("Ek", None, "Julio"),
        ("Martínez", Some("Mejía"), "Ernesto"),
        ("De la O", Some("Lozano"), "Alvaro"),
        ("Hernández", Some("von Räutlingen"), "María de Guadalupe"),
        ("毛", None, "泽东"),
        ("Ñemez", Some("Ñoz"), "Fernando"),
        ("Müller", Some("Øster"), "Zoë"),
        ("Ek", None, "J Antonio"),
        ("K Ng", None, "Ana"),
    ];
    let dates = [
        NaiveDate::from_ymd_opt(1961, 8, 14).unwrap(),
        NaiveDate::from_ymd_opt(2000, 2, 29).unwrap(),
        NaiveDate::from_ymd_opt(2012, 12, 31).unwrap(),
    ];

    for (paternal, maternal, given) in people {
        for dob in dates {
            let generator = RfcGeneratorFisicas::new(paternal, maternal, given, dob).unwrap();
            let rfc = generator.rfc().unwrap();
            assert_eq!(rfc.chars().count(), 13, "{}", rfc);

            let validator = RfcValidator::new(rfc);
            assert!(validator.validate(true), "{} failed {:?}", rfc, validator.validators(true).failed());
            assert_eq!(validator.detect_fisica_moral(), RfcKind::Individual);
        }
    }

    // digits would land in the name code, so no RFC is produced at all
    for (paternal, maternal, given) in [("2Pac", None, "Juan"), ("Lopez", Some("3ro"), "Juan")] {
        assert!(
            matches!(
                RfcGeneratorFisicas::new(paternal, maternal, given, dates[0]),
                Err(RfcError::UnsupportedCharacter { .. })
            ),
            "{} {:?} {}",
            paternal,
            maternal,
            given
        );
    }
}

/// Repeated access returns the same string
#[test]
fn test_rfc_idempotent() {
    let generator = RfcGeneratorFisicas::new("Barrios", Some("Fernández"), "Juan", jan_first_2000()).unwrap();
    let first = generator.rfc().unwrap().to_string();
    for _ in 0..3 {
        assert_eq!(generator.rfc().unwrap(), first);
    }
}

/// Incomplete records fail before any RFC is produced
#[test]
fn test_construction_errors() {
    let dob = jan_first_2000();
    assert_eq!(
        RfcGeneratorFisicas::new("", Some("Fernández"), "Juan", dob).unwrap_err(),
        RfcError::MissingField(NameField::PaternalSurname)
    );
    assert_eq!(
        RfcGeneratorFisicas::new("Barrios", Some("Fernández"), "   ", dob).unwrap_err(),
        RfcError::MissingField(NameField::GivenName)
    );
    assert!(matches!(
        PersonRecord::parse("Barrios", None, "Juan", "not a date"),
        Err(RfcError::InvalidBirthDate(_))
    ));
    assert!(matches!(
        RfcGeneratorFisicas::new("Pérez-Gómez", None, "Juan", dob),
        Err(RfcError::UnsupportedCharacter { ch: '-', .. })
    ));
}

/// Record serializes with normalized names
#[test]
fn test_record_json() {
    let record = PersonRecord::new("Chávez", Some("González"), "Manuel", jan_first_2000()).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["paternal"], "CHAVEZ");
    assert_eq!(json["maternal"], "GONZALEZ");
    assert_eq!(json["given"], "MANUEL");
    assert_eq!(json["dob"], "2000-01-01");
}
