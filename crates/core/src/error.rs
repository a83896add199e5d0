use crate::PatientId;

#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid temperature: {0}")]
    InvalidTemperature(String),
    #[error("patient not found: {0}")]
    PatientNotFound(PatientId),
    #[error("patient already exists: {0}")]
    DuplicatePatient(PatientId),
    #[error("failed to deliver alert: {0}")]
    NotifierDelivery(String),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to create patient directory: {0}")]
    PatientDirCreation(std::io::Error),
    #[error("failed to write patient file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read patient file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("translation error: {0}")]
    Translation(String),
}

pub type VitalsResult<T> = std::result::Result<T, VitalsError>;
