//! Constants used throughout the vitals core crate.
//!
//! Path and filename constants live here so the storage layout is defined in one place.

/// Default directory for patient data storage when no explicit directory is configured.
pub const DEFAULT_PATIENT_DATA_DIR: &str = "patient_data";

/// Directory name for patient records storage.
pub const PATIENTS_DIR_NAME: &str = "patients";

/// Filename for a stored patient record.
pub const PATIENT_YAML_FILENAME: &str = "patient.yaml";

/// Maximum allowed temperature deviation from baseline, as `units × 10^-scale` degrees (0.1).
pub const TEMPERATURE_TOLERANCE_UNITS: i64 = 1;
pub const TEMPERATURE_TOLERANCE_SCALE: i64 = 1;
