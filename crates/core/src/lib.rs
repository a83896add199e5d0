//! # Vitals Core
//!
//! Checks a patient's live vital signs against their stored baseline and raises an alert when
//! a reading deviates.
//!
//! - [`VitalSignChecker`] holds the comparison logic
//! - [`PatientDirectory`] supplies baselines (in memory or file-backed)
//! - [`AlertNotifier`] delivers alert text
//!
//! **No transport concerns**: argument parsing and process setup belong in `vitals-cli`.

pub mod checker;
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod notifier;
pub mod patient;
pub mod repositories;
pub mod temperature;

pub use checker::{alert_message, VitalSignChecker};
pub use config::CoreConfig;
pub use directory::{InMemoryDirectory, PatientDirectory};
pub use error::{VitalsError, VitalsResult};
pub use notifier::{AlertNotifier, ConsoleNotifier};
pub use patient::{BloodPressure, HealthBaseline, PatientId, PatientRecord};
pub use repositories::file::FileDirectory;
pub use temperature::{Temperature, Tolerance};
