//! Patient directory abstraction.
//!
//! The [`PatientDirectory`] trait is the narrow interface the checker reads baselines through.
//! [`InMemoryDirectory`] keeps records in a map; the file-backed implementation lives in
//! [`crate::repositories::file`].

use crate::{PatientId, PatientRecord, VitalsError, VitalsResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Lookup and registration of patient records.
pub trait PatientDirectory: Send + Sync {
    /// Returns the stored record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::PatientNotFound`] if no record is stored under `id`.
    fn get_by_id(&self, id: &PatientId) -> VitalsResult<PatientRecord>;

    /// Stores a new record and returns the identifier it was stored under.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::DuplicatePatient`] if a record with the same id already exists.
    fn add(&self, record: PatientRecord) -> VitalsResult<PatientId>;
}

/// Patient directory held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    records: RwLock<HashMap<PatientId, PatientRecord>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PatientDirectory for InMemoryDirectory {
    fn get_by_id(&self, id: &PatientId) -> VitalsResult<PatientRecord> {
        self.records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| VitalsError::PatientNotFound(id.clone()))
    }

    fn add(&self, record: PatientRecord) -> VitalsResult<PatientId> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if records.contains_key(&record.id) {
            return Err(VitalsError::DuplicatePatient(record.id));
        }

        let id = record.id.clone();
        records.insert(id.clone(), record);
        tracing::debug!(patient_id = %id, "patient added to in-memory directory");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BloodPressure, HealthBaseline, Temperature};
    use chrono::NaiveDate;

    fn record(id: &str) -> PatientRecord {
        PatientRecord::with_id(
            PatientId::new(id).unwrap(),
            "Ivan",
            "Petrov",
            NaiveDate::from_ymd_opt(1980, 11, 26).unwrap(),
            HealthBaseline::new(
                Temperature::new(3665, 2),
                BloodPressure::new(120, 80),
            ),
        )
    }

    #[test]
    fn add_then_get_returns_stored_record() {
        let directory = InMemoryDirectory::new();
        let id = directory.add(record("150")).expect("add should succeed");

        assert_eq!(id.as_str(), "150");
        assert_eq!(directory.get_by_id(&id).unwrap(), record("150"));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let directory = InMemoryDirectory::new();
        let missing = PatientId::new("missing").unwrap();

        match directory.get_by_id(&missing) {
            Err(VitalsError::PatientNotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected PatientNotFound, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let directory = InMemoryDirectory::new();
        directory.add(record("7")).unwrap();

        let err = directory.add(record("7")).expect_err("duplicate should fail");
        assert!(matches!(err, VitalsError::DuplicatePatient(ref id) if id.as_str() == "7"));
        assert_eq!(directory.len(), 1);
    }
}
