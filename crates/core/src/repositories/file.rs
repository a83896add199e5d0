//! File-backed patient directory.
//!
//! Each patient gets its own directory holding a single YAML record:
//!
//! ```text
//! <patient_data_dir>/
//!   patients/
//!     <id>/
//!       patient.yaml
//! ```
//!
//! Because the id becomes a path component, file-backed ids are restricted to ASCII letters,
//! digits, `-` and `_`.

use crate::config::CoreConfig;
use crate::directory::PatientDirectory;
use crate::repositories::patient_file::PatientFile;
use crate::{PatientId, PatientRecord, VitalsError, VitalsResult};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

/// Patient directory stored as YAML files under the configured data directory.
#[derive(Clone, Debug)]
pub struct FileDirectory {
    cfg: Arc<CoreConfig>,
}

impl FileDirectory {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    fn patient_dir(&self, id: &PatientId) -> VitalsResult<PathBuf> {
        validate_path_safe_id(id)?;
        Ok(self.cfg.patients_dir().join(id.as_str()))
    }

    /// Lists all stored patient records, sorted by id.
    ///
    /// Directories without a `patient.yaml`, and files that cannot be read or parsed, are
    /// logged as warnings and skipped.
    pub fn list(&self) -> Vec<PatientRecord> {
        let mut records = Vec::new();

        let entries = match fs::read_dir(self.cfg.patients_dir()) {
            Ok(it) => it,
            Err(_) => return records,
        };

        for entry in entries.flatten() {
            let patient_dir = entry.path();
            if !patient_dir.is_dir() {
                continue;
            }

            let patient_path = patient_dir.join(PatientFile::NAME);
            if !patient_path.is_file() {
                tracing::warn!("missing patient file: {}", patient_path.display());
                continue;
            }

            let dir_name = entry.file_name().to_string_lossy().into_owned();
            let parsed = fs::read_to_string(&patient_path)
                .map_err(VitalsError::FileRead)
                .and_then(|contents| parse_stored(&contents, &dir_name));

            match parsed {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("failed to load {}: {}", patient_path.display(), e);
                }
            }
        }

        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }
}

impl PatientDirectory for FileDirectory {
    fn get_by_id(&self, id: &PatientId) -> VitalsResult<PatientRecord> {
        let patient_path = self.patient_dir(id)?.join(PatientFile::NAME);

        let contents = match fs::read_to_string(&patient_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(VitalsError::PatientNotFound(id.clone()));
            }
            Err(e) => return Err(VitalsError::FileRead(e)),
        };

        parse_stored(&contents, id.as_str())
    }

    fn add(&self, record: PatientRecord) -> VitalsResult<PatientId> {
        let patient_dir = self.patient_dir(&record.id)?;
        let yaml = PatientFile::render(&record)?;

        fs::create_dir_all(self.cfg.patients_dir()).map_err(VitalsError::StorageDirCreation)?;

        match fs::create_dir(&patient_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(VitalsError::DuplicatePatient(record.id));
            }
            Err(e) => return Err(VitalsError::PatientDirCreation(e)),
        }

        if let Err(e) = fs::write(patient_dir.join(PatientFile::NAME), yaml) {
            if let Err(cleanup) = fs::remove_dir_all(&patient_dir) {
                tracing::warn!(
                    "failed to clean up {} after write error: {}",
                    patient_dir.display(),
                    cleanup
                );
            }
            return Err(VitalsError::FileWrite(e));
        }

        tracing::debug!(patient_id = %record.id, "patient record written");
        Ok(record.id)
    }
}

/// Parses a stored record and checks it belongs to the directory it was read from.
fn parse_stored(contents: &str, expected_id: &str) -> VitalsResult<PatientRecord> {
    let record = PatientFile::parse(contents)?;
    if record.id.as_str() != expected_id {
        return Err(VitalsError::Translation(format!(
            "patient file under '{expected_id}' holds id '{}'",
            record.id
        )));
    }
    Ok(record)
}

fn validate_path_safe_id(id: &PatientId) -> VitalsResult<()> {
    let safe = id
        .as_str()
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if !safe {
        return Err(VitalsError::InvalidInput(format!(
            "patient id '{id}' may only contain ASCII letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}
