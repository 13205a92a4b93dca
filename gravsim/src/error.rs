//! Error type shared by every stage of a run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Line {line}: expected 8 fields (name, mass, x, y, z, vx, vy, vz), got {fields}")]
    MalformedRecord { line: u64, fields: usize },

    #[error("Line {line}: field '{field}' is not a number: '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Body '{name}' has non-positive mass {mass}")]
    InvalidMass { name: String, mass: f64 },

    #[error("Body '{name}' appears more than once")]
    DuplicateBody { name: String },

    #[error(
        "Body sets do not pair up: missing from ideal state {missing_in_ideal:?}, \
         missing from simulated state {missing_in_simulated:?}"
    )]
    PairingMismatch {
        missing_in_ideal: Vec<String>,
        missing_in_simulated: Vec<String>,
    },

    #[error("Line {line}: body name is empty")]
    EmptyName { line: u64 },

    #[error("Simulation span must be finite and positive, got {t_end}")]
    InvalidSpan { t_end: f64 },

    #[error("Unit scale must be finite and positive, got {scale}")]
    InvalidUnitScale { scale: f64 },

    #[error("Timestep must be finite and nonzero, got {dt}")]
    InvalidTimestep { dt: f64 },

    #[error("State file contains no bodies")]
    EmptyState,
}

pub type SimResult<T> = Result<T, SimError>;
