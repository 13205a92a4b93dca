//! Fixed-step time integrators for the gravity system
//!
//! Provides the two-phase semi-implicit (symplectic) Euler step used for real
//! runs, an explicit Euler step kept for comparison, and the run loop that
//! drives either for a whole scenario

use log::{debug, info, warn};

use super::engine::Engine;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{System, NVec3};
use crate::configuration::config::IntegratorConfig;

/// Outcome of a complete integration run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationStats {
    pub steps: u64,            // step passes executed
    pub degenerate_pairs: u64, // pair evaluations skipped for coincident bodies
}

/// Advance the system by one step using semi-implicit Euler
///
/// Phase 1 drifts every body with the velocity it carried into the step.
/// Phase 2 evaluates accelerations at those new positions and kicks every
/// velocity. Phase 1 finishes for all bodies before any force is evaluated.
///
/// Returns the number of degenerate pair evaluations skipped this step.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) -> u64 {
    let n = sys.bodies.len();
    if n == 0 {
        return 0;
    }
    let dt = params.h0;

    // Drift: x_n+1 = x_n + dt * v_n
    for b in sys.bodies.iter_mut() {
        b.integrate_position(dt);
    }

    // a_n+1 from x_n+1
    let mut acc = vec![NVec3::zeros(); n];
    let skipped = forces.accumulate_accels(&*sys, &mut acc);

    // Kick: v_n+1 = v_n + dt * a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += *a * dt;
    }

    sys.t += dt;
    skipped
}

/// Advance the system by one step using explicit (forward) Euler
/// Accelerations are evaluated at the pre-step positions.
pub fn explicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) -> u64 {
    let n = sys.bodies.len();
    if n == 0 {
        return 0;
    }
    let dt = params.h0;

    // a_n from x_n
    let mut acc = vec![NVec3::zeros(); n];
    let skipped = forces.accumulate_accels(&*sys, &mut acc);

    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.integrate_position(dt);
        b.v += *a * dt;
    }

    sys.t += dt;
    skipped
}

/// Advance one step with the selected scheme
pub fn step(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
    scheme: &IntegratorConfig,
) -> u64 {
    match scheme {
        IntegratorConfig::SemiImplicitEuler => semi_implicit_euler(sys, forces, params),
        IntegratorConfig::ExplicitEuler => explicit_euler(sys, forces, params),
    }
}

/// Run the full span described by `params`, calling `progress(step, total)`
/// after every step
pub fn integrate<F>(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
    engine: &Engine,
    mut progress: F,
) -> IntegrationStats
where
    F: FnMut(u64, u64),
{
    let total = engine.step_count(params.iterations());
    info!(
        "Integrating {} bodies: {} steps of {} s ({:?})",
        sys.bodies.len(),
        total,
        params.h0,
        engine.integrator
    );

    let mut stats = IntegrationStats::default();
    for s in 0..total {
        stats.degenerate_pairs += step(sys, forces, params, &engine.integrator);
        stats.steps += 1;
        progress(s + 1, total);
    }

    if stats.degenerate_pairs > 0 {
        warn!(
            "{} pair evaluations skipped: distinct bodies shared a position",
            stats.degenerate_pairs
        );
    }
    debug!("Integration finished at t = {} s", sys.t);

    stats
}
