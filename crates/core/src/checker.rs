//! Vital sign checks against a patient's baseline.
//!
//! [`VitalSignChecker`] reads the stored baseline through a [`PatientDirectory`] and pushes an
//! alert through an [`AlertNotifier`] when a live reading deviates. Each call performs one
//! lookup and at most one send. Directory and notifier errors propagate unchanged.

use crate::directory::PatientDirectory;
use crate::notifier::AlertNotifier;
use crate::temperature::Tolerance;
use crate::{BloodPressure, PatientId, Temperature, VitalsResult};
use std::sync::Arc;

/// Formats the alert sent for a patient whose reading deviates from baseline.
pub fn alert_message(patient_id: &PatientId) -> String {
    format!("Warning, patient with id: {patient_id}, need help")
}

/// Compares live readings with stored baselines and raises alerts.
#[derive(Clone)]
pub struct VitalSignChecker {
    directory: Arc<dyn PatientDirectory>,
    notifier: Arc<dyn AlertNotifier>,
}

impl VitalSignChecker {
    pub fn new(directory: Arc<dyn PatientDirectory>, notifier: Arc<dyn AlertNotifier>) -> Self {
        Self {
            directory,
            notifier,
        }
    }

    /// Alerts if either component of `live` differs from the baseline blood pressure.
    ///
    /// Any difference triggers; there is no tolerance band. At most one alert is sent even
    /// when both components differ.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::PatientNotFound`](crate::VitalsError::PatientNotFound) for an
    /// unknown id, or whatever the directory or notifier reports.
    pub fn check_blood_pressure(
        &self,
        patient_id: &PatientId,
        live: BloodPressure,
    ) -> VitalsResult<()> {
        let record = self.directory.get_by_id(patient_id)?;
        let baseline = record.baseline.blood_pressure;

        tracing::debug!(
            patient_id = %patient_id,
            baseline = %baseline,
            live = %live,
            "checking blood pressure"
        );

        if live.high != baseline.high || live.low != baseline.low {
            tracing::warn!(
                patient_id = %patient_id,
                baseline = %baseline,
                live = %live,
                "blood pressure deviates from baseline"
            );
            self.alert(patient_id)?;
        }

        Ok(())
    }

    /// Alerts if `live` differs from the baseline temperature by more than 0.1 degrees.
    ///
    /// A difference of exactly 0.1 does not alert.
    ///
    /// # Errors
    ///
    /// Same as [`check_blood_pressure`](Self::check_blood_pressure).
    pub fn check_temperature(&self, patient_id: &PatientId, live: Temperature) -> VitalsResult<()> {
        let record = self.directory.get_by_id(patient_id)?;
        let baseline = record.baseline.normal_temperature;

        tracing::debug!(
            patient_id = %patient_id,
            baseline = %baseline,
            live = %live,
            "checking temperature"
        );

        if live.deviates_from(&baseline, &Tolerance::standard()) {
            tracing::warn!(
                patient_id = %patient_id,
                baseline = %baseline,
                live = %live,
                "temperature deviates from baseline"
            );
            self.alert(patient_id)?;
        }

        Ok(())
    }

    fn alert(&self, patient_id: &PatientId) -> VitalsResult<()> {
        self.notifier.send(&alert_message(patient_id))
    }
}
