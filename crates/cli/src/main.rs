use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitals_core::config::patient_data_dir_from_env_value;
use vitals_core::{
    BloodPressure, ConsoleNotifier, CoreConfig, FileDirectory, HealthBaseline, PatientDirectory,
    PatientId, PatientRecord, Temperature, VitalSignChecker,
};

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Check patient vital signs against their baseline")]
struct Cli {
    /// Patient data directory (overrides VITALS_PATIENT_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a patient with their baseline readings
    AddPatient {
        first_name: String,
        last_name: String,
        /// Date of birth (YYYY-MM-DD)
        birth_date: NaiveDate,
        /// Normal body temperature, e.g. 36.65
        temperature: Temperature,
        /// Normal high (systolic) pressure
        high: i32,
        /// Normal low (diastolic) pressure
        low: i32,
        /// Use this id instead of generating one
        #[arg(long)]
        id: Option<PatientId>,
    },
    /// List all patients
    List,
    /// Compare a blood pressure reading with the patient's baseline
    CheckBloodPressure {
        id: PatientId,
        high: i32,
        low: i32,
    },
    /// Compare a temperature reading with the patient's baseline
    CheckTemperature {
        id: PatientId,
        /// Live body temperature, e.g. 37.2
        temperature: Temperature,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitals=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        patient_data_dir_from_env_value(std::env::var("VITALS_PATIENT_DATA_DIR").ok())
    });
    let cfg = Arc::new(CoreConfig::new(data_dir).context("invalid configuration")?);
    tracing::debug!("patient data dir: {}", cfg.patient_data_dir().display());

    let directory = Arc::new(FileDirectory::new(cfg));

    match cli.command {
        Some(Commands::AddPatient {
            first_name,
            last_name,
            birth_date,
            temperature,
            high,
            low,
            id,
        }) => {
            let baseline = HealthBaseline::new(temperature, BloodPressure::new(high, low));
            let record = match id {
                Some(id) => PatientRecord::with_id(id, first_name, last_name, birth_date, baseline),
                None => PatientRecord::new(first_name, last_name, birth_date, baseline),
            };
            let id = directory.add(record).context("failed to add patient")?;
            println!("Added patient with id: {}", id);
        }
        Some(Commands::List) => {
            let patients = directory.list();
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "ID: {}, Name: {} {}, Born: {}, Temperature: {}, Blood pressure: {}",
                        patient.id,
                        patient.first_name,
                        patient.last_name,
                        patient.birth_date,
                        patient.baseline.normal_temperature,
                        patient.baseline.blood_pressure
                    );
                }
            }
        }
        Some(Commands::CheckBloodPressure { id, high, low }) => {
            let checker = VitalSignChecker::new(directory, Arc::new(ConsoleNotifier::new()));
            checker
                .check_blood_pressure(&id, BloodPressure::new(high, low))
                .with_context(|| format!("blood pressure check failed for patient {id}"))?;
        }
        Some(Commands::CheckTemperature { id, temperature }) => {
            let checker = VitalSignChecker::new(directory, Arc::new(ConsoleNotifier::new()));
            checker
                .check_temperature(&id, temperature)
                .with_context(|| format!("temperature check failed for patient {id}"))?;
        }
        None => {
            println!("Use 'vitals --help' for commands");
        }
    }

    Ok(())
}
