//! Configuration types for tuning a run from YAML.
//!
//! This module defines a thin, `serde`-deserializable description of how a
//! run is carried out. Body states come from the two CSV files; everything
//! else lives here:
//!
//! - [`EngineConfig`]     – integration scheme and step-count convention
//! - [`ParametersConfig`] – simulated span and physical constants
//! - [`InputConfig`]      – unit conversion applied to the CSV values
//! - [`OutputConfig`]     – where results go and how often progress is logged
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//! Every key is optional; missing keys take the defaults shown here:
//!
//! ```yaml
//! engine:
//!   integrator: "semi_implicit_euler"   # or "explicit_euler"
//!   inclusive_step_count: false         # true -> iterations + 1 passes
//!
//! parameters:
//!   t_end: 10368000.0                   # seconds between the two snapshots
//!   G: 6.6743e-11                       # gravitational constant
//!
//! input:
//!   unit_scale: 1000.0                  # km -> m, km/s -> m/s
//!
//! output:
//!   directory: "."
//!   progress_percent: 10
//! ```

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SimResult;
use crate::simulation::params::{GRAVITATIONAL_CONSTANT, SIMULATION_LENGTH_SECONDS};

/// Which integrator the engine steps with
/// `integrator: "semi_implicit_euler"` or `integrator: "explicit_euler"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    /// Drift then kick with forces at the new positions. Symplectic
    #[default]
    #[serde(rename = "semi_implicit_euler")]
    SemiImplicitEuler,

    /// Forces at the old positions. Drifts in energy
    #[serde(rename = "explicit_euler")]
    ExplicitEuler,
}

impl FromStr for IntegratorConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semi_implicit_euler" => Ok(Self::SemiImplicitEuler),
            "explicit_euler" => Ok(Self::ExplicitEuler),
            other => Err(format!(
                "unknown integrator '{other}' (expected semi_implicit_euler or explicit_euler)"
            )),
        }
    }
}

impl fmt::Display for IntegratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SemiImplicitEuler => f.write_str("semi_implicit_euler"),
            Self::ExplicitEuler => f.write_str("explicit_euler"),
        }
    }
}

/// Engine-level configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
    pub inclusive_step_count: bool,   // `true` - run iterations + 1 passes like the legacy tool
}

/// Simulated span and physical constants
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub t_end: f64, // seconds between the initial and ideal snapshots
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            t_end: SIMULATION_LENGTH_SECONDS,
            g: GRAVITATIONAL_CONSTANT,
        }
    }
}

/// How raw CSV numbers map to SI units
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub unit_scale: f64, // multiplier applied to positions and velocities
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { unit_scale: 1000.0 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,    // where output_<dt>dt.csv is written
    pub progress_percent: u64, // log progress every this many percent, 0 disables
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            progress_percent: 10,
        }
    }
}

/// Top-level run configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> SimResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
