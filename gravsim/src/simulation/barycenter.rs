//! Barycentric re-centering
//!
//! Ephemeris data is expressed relative to the solar-system barycenter, while
//! the integrated coordinates drift with the system's net momentum. After the
//! run the positions are shifted so the center of mass sits at the origin.
//! Velocities are left untouched.

use log::debug;

use super::states::{System, NVec3};

/// center = sum(m_i * x_i) / sum(m_i), or zero for an empty system
pub fn center_of_mass(sys: &System) -> NVec3 {
    let total_mass = sys.total_mass();
    if total_mass <= 0.0 {
        return NVec3::zeros();
    }
    let weighted = sys
        .bodies
        .iter()
        .fold(NVec3::zeros(), |acc, b| acc + b.x * b.m);
    weighted / total_mass
}

/// Subtract the center of mass from every position
pub fn adjust_barycenter(sys: &mut System) {
    let center = center_of_mass(sys);
    debug!(
        "Re-centering on barycenter ({:e}, {:e}, {:e})",
        center.x, center.y, center.z
    );
    for b in sys.bodies.iter_mut() {
        b.x -= center;
    }
}
