//! High-level runtime engine settings
//!
//! Selects the integration scheme and the step-count convention used when
//! running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // semi-implicit or explicit euler
    pub inclusive_step_count: bool,   // true = iterations + 1 passes
}

impl Engine {
    /// Number of step passes for `iterations` whole timesteps
    pub fn step_count(&self, iterations: u64) -> u64 {
        if self.inclusive_step_count {
            iterations + 1
        } else {
            iterations
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::SemiImplicitEuler,
            inclusive_step_count: false,
        }
    }
}
