//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - total simulated span and step size (`t_end`, `h0`),
//! - the gravitational constant `g`

use crate::error::{SimError, SimResult};

/// Elapsed real time between the supplied initial and ideal snapshots (120 days)
pub const SIMULATION_LENGTH_SECONDS: f64 = 10_368_000.0;

/// Newtonian constant of gravitation (m^3 kg^-1 s^-2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // simulated span (s)
    pub h0: f64,    // step size (s), negative runs backward
    pub g: f64,     // gravitational constant
}

impl Parameters {
    pub fn new(t_end: f64, h0: f64, g: f64) -> SimResult<Self> {
        if !t_end.is_finite() || t_end <= 0.0 {
            return Err(SimError::InvalidSpan { t_end });
        }
        if !h0.is_finite() || h0 == 0.0 {
            return Err(SimError::InvalidTimestep { dt: h0 });
        }
        Ok(Self { t_end, h0, g })
    }

    /// Default span and constant for a given timestep
    pub fn with_timestep(h0: f64) -> SimResult<Self> {
        Self::new(SIMULATION_LENGTH_SECONDS, h0, GRAVITATIONAL_CONSTANT)
    }

    /// round(t_end / |h0|): the sign of h0 picks the direction, not the count
    pub fn iterations(&self) -> u64 {
        iterations(self.t_end, self.h0)
    }
}

pub fn iterations(total_seconds: f64, dt: f64) -> u64 {
    (total_seconds / dt.abs()).round() as u64
}
