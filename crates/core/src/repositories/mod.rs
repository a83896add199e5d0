//! Patient record storage.
//!
//! - `file`: directory-per-patient YAML storage implementing [`PatientDirectory`](crate::PatientDirectory)
//! - `patient_file`: the `patient.yaml` wire model

pub mod file;
pub mod patient_file;
