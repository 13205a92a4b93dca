//! Acceleration contributors for the gravity engine
//!
//! Defines the acceleration trait, a set that sums several terms, and the
//! direct pairwise Newtonian gravity term

use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` is overwritten with the sum of contributions from all terms
    /// - returns the number of pair evaluations skipped for degenerate geometry
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) -> u64 {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        self.terms
            .iter()
            .map(|term| term.acceleration(sys, out))
            .sum()
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body and
/// return how many interactions they had to skip
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]) -> u64;
}

/// Direct Newtonian gravity summed over every ordered pair (i, j), j != i
///
/// No softening: two distinct bodies at the same position contribute nothing
/// to each other and the pair is counted as skipped
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]) -> u64 {
        let n = sys.bodies.len();
        let mut skipped = 0;

        for i in 0..n {
            let bi = &sys.bodies[i];
            let mut acc = NVec3::zeros();

            for j in (0..n).filter(|&j| j != i) {
                let bj = &sys.bodies[j];

                let distance = bi.distance_to(bj);
                if distance == 0.0 || !distance.is_finite() {
                    skipped += 1;
                    continue;
                }

                // Unit vector from i toward j: i is pulled along +direction
                let direction = bi.displacement_to(bj) / distance;

                // |a| = G * m_j / d^2
                let magnitude = self.g * bj.m / (distance * distance);

                acc += direction * magnitude;
            }

            out[i] += acc;
        }

        skipped
    }
}
