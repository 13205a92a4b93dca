//! Core state types for the gravity simulation.
//!
//! - `Body`   a named point mass with position and velocity (SI units)
//! - `System` the ordered collection of bodies plus the elapsed time `t`
//!
//! Bodies are addressed by their index in `System::bodies`; the index is
//! stable for the whole run since the population never changes.

use std::collections::HashSet;

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String, // unique within a system
    pub m: f64,       // mass (kg)
    pub x: NVec3,     // position (m)
    pub v: NVec3,     // velocity (m/s)
}

impl Body {
    pub fn new(name: impl Into<String>, m: f64, x: NVec3, v: NVec3) -> Self {
        Self {
            name: name.into(),
            m,
            x,
            v,
        }
    }

    /// Drift: x += v * dt using the velocity currently stored on the body
    pub fn integrate_position(&mut self, dt: f64) {
        self.x += self.v * dt;
    }

    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.x = NVec3::new(x, y, z);
    }

    pub fn set_velocity(&mut self, vx: f64, vy: f64, vz: f64) {
        self.v = NVec3::new(vx, vy, vz);
    }

    /// Vector pointing from this body to `other` (dx, dy, dz)
    pub fn displacement_to(&self, other: &Body) -> NVec3 {
        other.x - self.x
    }

    /// Euclidean distance between the two positions
    pub fn distance_to(&self, other: &Body) -> f64 {
        self.displacement_to(other).norm()
    }

    pub fn momentum(&self) -> NVec3 {
        self.v * self.m
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // insertion order is preserved
    pub t: f64,            // elapsed time (s)
}

impl System {
    /// Build a system at t = 0, rejecting empty sets, duplicate names and
    /// non-positive masses
    pub fn new(bodies: Vec<Body>) -> SimResult<Self> {
        if bodies.is_empty() {
            return Err(SimError::EmptyState);
        }

        {
            let mut seen = HashSet::with_capacity(bodies.len());
            for b in &bodies {
                if !(b.m.is_finite() && b.m > 0.0) {
                    return Err(SimError::InvalidMass {
                        name: b.name.clone(),
                        mass: b.m,
                    });
                }
                if !seen.insert(b.name.as_str()) {
                    return Err(SimError::DuplicateBody {
                        name: b.name.clone(),
                    });
                }
            }
        }

        Ok(Self { bodies, t: 0.0 })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|b| b.name.as_str())
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |p, b| p + b.momentum())
    }

    /// Bodies ordered by name, for reporting
    pub fn sorted_by_name(&self) -> Vec<&Body> {
        let mut sorted: Vec<&Body> = self.bodies.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}
