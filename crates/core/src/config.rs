//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! nothing reads process-wide environment variables while handling a check.

use crate::constants::{DEFAULT_PATIENT_DATA_DIR, PATIENTS_DIR_NAME};
use crate::{VitalsError, VitalsResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    patient_data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidInput`] if `patient_data_dir` is empty or points at an
    /// existing non-directory path.
    pub fn new(patient_data_dir: PathBuf) -> VitalsResult<Self> {
        if patient_data_dir.as_os_str().is_empty() {
            return Err(VitalsError::InvalidInput(
                "patient_data_dir cannot be empty".into(),
            ));
        }
        if patient_data_dir.exists() && !patient_data_dir.is_dir() {
            return Err(VitalsError::InvalidInput(format!(
                "patient_data_dir is not a directory: {}",
                patient_data_dir.display()
            )));
        }

        Ok(Self { patient_data_dir })
    }

    pub fn patient_data_dir(&self) -> &Path {
        &self.patient_data_dir
    }

    pub fn patients_dir(&self) -> PathBuf {
        self.patient_data_dir.join(PATIENTS_DIR_NAME)
    }
}

/// Resolve the patient data directory from an optional configured value.
///
/// `None`, empty and whitespace-only values fall back to [`DEFAULT_PATIENT_DATA_DIR`].
pub fn patient_data_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATIENT_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn blank_env_value_falls_back_to_default() {
        assert_eq!(
            patient_data_dir_from_env_value(None),
            PathBuf::from(DEFAULT_PATIENT_DATA_DIR)
        );
        assert_eq!(
            patient_data_dir_from_env_value(Some("   ".into())),
            PathBuf::from(DEFAULT_PATIENT_DATA_DIR)
        );
        assert_eq!(
            patient_data_dir_from_env_value(Some(" /srv/vitals ".into())),
            PathBuf::from("/srv/vitals")
        );
    }

    #[test]
    fn rejects_file_as_data_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = temp_dir.path().join("not_a_dir");
        std::fs::write(&file, "x").expect("write file");

        let err = CoreConfig::new(file).expect_err("file path should be rejected");
        assert!(matches!(err, VitalsError::InvalidInput(_)));
    }

    #[test]
    fn patients_dir_is_nested_under_data_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = CoreConfig::new(temp_dir.path().to_path_buf()).expect("valid config");
        assert_eq!(cfg.patients_dir(), temp_dir.path().join(PATIENTS_DIR_NAME));
    }
}
