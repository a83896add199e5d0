//! On-disk YAML wire model for a patient record.
//!
//! Responsibilities:
//! - Define a strict wire model for `patient.yaml`
//! - Translate between [`PatientRecord`] and the wire model
//!
//! Temperatures are written as quoted decimal strings so they survive a round trip without
//! passing through floating point.

use crate::constants::PATIENT_YAML_FILENAME;
use crate::{
    BloodPressure, HealthBaseline, PatientId, PatientRecord, Temperature, VitalsError,
    VitalsResult,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Patient record file operations.
pub struct PatientFile;

impl PatientFile {
    pub const NAME: &'static str = PATIENT_YAML_FILENAME;

    /// Parse a patient record from YAML text.
    ///
    /// Schema mismatches report the path to the failing field (e.g. `baseline.bloodPressure.high`).
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::Translation`] if the YAML does not match the wire schema, contains
    /// unknown keys, or holds an invalid id, birth date or temperature.
    pub fn parse(yaml_text: &str) -> VitalsResult<PatientRecord> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, PatientWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(VitalsError::Translation(format!(
                    "patient schema mismatch at {path}: {source}"
                )));
            }
        };

        wire_to_domain(wire)
    }

    /// Render a patient record as YAML text.
    pub fn render(record: &PatientRecord) -> VitalsResult<String> {
        serde_yaml::to_string(&domain_to_wire(record)).map_err(VitalsError::YamlSerialization)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PatientWire {
    id: String,
    name: NameWire,
    #[serde(rename = "birthDate")]
    birth_date: String,
    baseline: BaselineWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct NameWire {
    given: String,
    family: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct BaselineWire {
    temperature: String,
    #[serde(rename = "bloodPressure")]
    blood_pressure: BloodPressureWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct BloodPressureWire {
    high: i32,
    low: i32,
}

fn wire_to_domain(wire: PatientWire) -> VitalsResult<PatientRecord> {
    let id = PatientId::new(&wire.id)
        .map_err(|e| VitalsError::Translation(format!("invalid patient id: {e}")))?;

    let birth_date = NaiveDate::parse_from_str(&wire.birth_date, BIRTH_DATE_FORMAT)
        .map_err(|e| VitalsError::Translation(format!("invalid birthDate: {e}")))?;

    let normal_temperature = Temperature::parse(&wire.baseline.temperature)
        .map_err(|e| VitalsError::Translation(format!("invalid baseline temperature: {e}")))?;

    Ok(PatientRecord::with_id(
        id,
        wire.name.given,
        wire.name.family,
        birth_date,
        HealthBaseline::new(
            normal_temperature,
            BloodPressure::new(
                wire.baseline.blood_pressure.high,
                wire.baseline.blood_pressure.low,
            ),
        ),
    ))
}

fn domain_to_wire(record: &PatientRecord) -> PatientWire {
    PatientWire {
        id: record.id.to_string(),
        name: NameWire {
            given: record.first_name.clone(),
            family: record.last_name.clone(),
        },
        birth_date: record.birth_date.format(BIRTH_DATE_FORMAT).to_string(),
        baseline: BaselineWire {
            temperature: record.baseline.normal_temperature.to_string(),
            blood_pressure: BloodPressureWire {
                high: record.baseline.blood_pressure.high,
                low: record.baseline.blood_pressure.low,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"id: "150"
name:
  given: Ivan
  family: Petrov
birthDate: 1980-11-26
baseline:
  temperature: "36.65"
  bloodPressure:
    high: 120
    low: 80
"#;

    #[test]
    fn parses_sample_yaml() {
        let record = PatientFile::parse(SAMPLE).expect("parse yaml");

        assert_eq!(record.id.as_str(), "150");
        assert_eq!(record.first_name, "Ivan");
        assert_eq!(record.last_name, "Petrov");
        assert_eq!(
            record.birth_date,
            NaiveDate::from_ymd_opt(1980, 11, 26).unwrap()
        );
        assert_eq!(record.baseline.normal_temperature, Temperature::new(3665, 2));
        assert_eq!(record.baseline.blood_pressure, BloodPressure::new(120, 80));

        let reparsed = PatientFile::parse(&PatientFile::render(&record).unwrap()).unwrap();
        assert_eq!(record, reparsed);
    }

    #[test]
    fn rejects_unknown_keys_with_path() {
        let input = SAMPLE.replace("    low: 80\n", "    low: 80\n    pulse: 60\n");

        let err = PatientFile::parse(&input).expect_err("should reject unknown key");
        match err {
            VitalsError::Translation(msg) => {
                assert!(msg.contains("baseline.bloodPressure"), "{msg}");
                assert!(msg.contains("pulse"), "{msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn keeps_high_precision_temperature() {
        let input = SAMPLE.replace("\"36.65\"", "\"36.6512345678901234567890123456789\"");

        let record = PatientFile::parse(&input).expect("parse yaml");
        let reparsed = PatientFile::parse(&PatientFile::render(&record).unwrap()).unwrap();
        assert_eq!(
            reparsed.baseline.normal_temperature,
            Temperature::parse("36.6512345678901234567890123456789").unwrap()
        );
    }

    #[test]
    fn rejects_non_numeric_temperature() {
        let input = SAMPLE.replace("\"36.65\"", "\"warm\"");

        let err = PatientFile::parse(&input).expect_err("should reject temperature");
        match err {
            VitalsError::Translation(msg) => assert!(msg.contains("temperature"), "{msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_birth_date() {
        let input = SAMPLE.replace("1980-11-26", "26/11/1980");

        let err = PatientFile::parse(&input).expect_err("should reject birth date");
        assert!(matches!(err, VitalsError::Translation(ref msg) if msg.contains("birthDate")));
    }
}
