//! Build runnable simulation scenarios from configuration and parsed states
//!
//! A `Scenario` bundles:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the state being integrated (`System` at t = 0)
//! - the ideal end state it is scored against
//! - the active force set (`AccelSet`)
//!
//! `Scenario::run` consumes the bundle and performs the whole pipeline:
//! integrate, re-center on the barycenter, score.

use std::path::Path;

use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::error::SimResult;
use crate::io::input::load_state;
use crate::scoring::accuracy::{check_pairing, score, summarize, AccuracySummary, ErrorReport};
use crate::simulation::barycenter::adjust_barycenter;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{integrate, IntegrationStats};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub ideal: System,
    pub forces: AccelSet,
}

/// Everything a finished run produces
#[derive(Debug)]
pub struct RunOutcome {
    pub system: System, // final state, barycentric
    pub stats: IntegrationStats,
    pub reports: Vec<ErrorReport>,
    pub summary: AccuracySummary,
}

impl Scenario {
    /// Validate inputs and assemble the scenario. Mismatched body sets and a
    /// zero or non-finite `dt` are rejected here, before any integration.
    pub fn build_scenario(
        cfg: &ScenarioConfig,
        system: System,
        ideal: System,
        dt: f64,
    ) -> SimResult<Self> {
        check_pairing(&system, &ideal)?;

        let parameters = Parameters::new(cfg.parameters.t_end, dt, cfg.parameters.g)?;

        let engine = Engine {
            integrator: cfg.engine.integrator,
            inclusive_step_count: cfg.engine.inclusive_step_count,
        };

        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        Ok(Self {
            engine,
            parameters,
            system,
            ideal,
            forces,
        })
    }

    /// Load both state files with the configured unit scale and build
    pub fn from_files(
        cfg: &ScenarioConfig,
        initial: &Path,
        ideal: &Path,
        dt: f64,
    ) -> SimResult<Self> {
        let system = load_state(initial, cfg.input.unit_scale)?;
        let ideal = load_state(ideal, cfg.input.unit_scale)?;
        Self::build_scenario(cfg, system, ideal, dt)
    }

    /// Integrate to the end of the span, re-center, and score
    pub fn run<F>(mut self, progress: F) -> SimResult<RunOutcome>
    where
        F: FnMut(u64, u64),
    {
        let stats = integrate(
            &mut self.system,
            &self.forces,
            &self.parameters,
            &self.engine,
            progress,
        );

        adjust_barycenter(&mut self.system);

        let reports = score(&self.system, &self.ideal)?;
        let summary = summarize(&reports);
        info!(
            "Scored {} bodies, mean true error {}%",
            summary.bodies, summary.mean_true_error
        );

        Ok(RunOutcome {
            system: self.system,
            stats,
            reports,
            summary,
        })
    }
}
