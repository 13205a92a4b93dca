pub mod simulation;
pub mod scoring;
pub mod configuration;
pub mod io;
pub mod error;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, SIMULATION_LENGTH_SECONDS};
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{semi_implicit_euler, explicit_euler, integrate, IntegrationStats};
pub use simulation::barycenter::{adjust_barycenter, center_of_mass};
pub use simulation::scenario::{Scenario, RunOutcome};

pub use scoring::accuracy::{
    check_pairing, score, summarize, AccuracySummary, AxisErrors, ErrorReport, PercentError,
};

pub use configuration::config::{
    EngineConfig, InputConfig, IntegratorConfig, OutputConfig, ParametersConfig, ScenarioConfig,
};

pub use io::input::{parse_state, parse_state_str, load_state};
pub use io::output::{output_file_name, write_report, save_report, write_state, save_state};

pub use error::{SimError, SimResult};
