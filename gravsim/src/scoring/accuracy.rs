//! Accuracy scoring of a simulated end state against a reference end state
//!
//! Bodies are paired by name. For each pair every position and velocity axis
//! gets a relative percentage error; the axes are averaged into displacement
//! and velocity errors, and those two are averaged into the body's true error.
//!
//! A reference component of exactly zero makes the relative error for that
//! axis meaningless. It is carried as [`PercentError::Undefined`] and poisons
//! every mean it takes part in, so it can never be mistaken for a number.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use log::{debug, warn};

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, System, NVec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentError {
    Value(f64),
    Undefined,
}

impl PercentError {
    /// |simulated - reference| / |reference| * 100
    pub fn relative(simulated: f64, reference: f64) -> Self {
        if reference == 0.0 || !reference.is_finite() || !simulated.is_finite() {
            return Self::Undefined;
        }
        Self::Value((simulated - reference).abs() / reference.abs() * 100.0)
    }

    /// Arithmetic mean, undefined if any term is
    pub fn mean(terms: &[PercentError]) -> Self {
        if terms.is_empty() {
            return Self::Undefined;
        }
        let mut sum = 0.0;
        for term in terms {
            match term {
                Self::Value(v) => sum += v,
                Self::Undefined => return Self::Undefined,
            }
        }
        Self::Value(sum / terms.len() as f64)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for PercentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

/// Per-axis percentage errors of one vector quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisErrors {
    pub x: PercentError,
    pub y: PercentError,
    pub z: PercentError,
}

impl AxisErrors {
    pub fn between(simulated: &NVec3, reference: &NVec3) -> Self {
        Self {
            x: PercentError::relative(simulated.x, reference.x),
            y: PercentError::relative(simulated.y, reference.y),
            z: PercentError::relative(simulated.z, reference.z),
        }
    }

    pub fn mean(&self) -> PercentError {
        PercentError::mean(&[self.x, self.y, self.z])
    }

    pub fn undefined_count(&self) -> usize {
        [self.x, self.y, self.z]
            .iter()
            .filter(|e| e.is_undefined())
            .count()
    }
}

/// Accuracy of one simulated body against its reference counterpart
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub name: String,
    pub position_axes: AxisErrors,
    pub velocity_axes: AxisErrors,
    pub displacement_error: PercentError, // mean of position axes
    pub velocity_error: PercentError,     // mean of velocity axes
    pub true_error: PercentError,         // mean of the two above
}

impl ErrorReport {
    pub fn compare(simulated: &Body, reference: &Body) -> Self {
        let position_axes = AxisErrors::between(&simulated.x, &reference.x);
        let velocity_axes = AxisErrors::between(&simulated.v, &reference.v);
        let displacement_error = position_axes.mean();
        let velocity_error = velocity_axes.mean();

        Self {
            name: simulated.name.clone(),
            position_axes,
            velocity_axes,
            displacement_error,
            velocity_error,
            true_error: PercentError::mean(&[displacement_error, velocity_error]),
        }
    }

    pub fn undefined_terms(&self) -> usize {
        self.position_axes.undefined_count() + self.velocity_axes.undefined_count()
    }
}

/// Aggregate accuracy over every body of a run
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracySummary {
    pub bodies: usize,
    pub mean_true_error: PercentError,
    pub worst: Option<(String, f64)>, // body with the largest defined true error
    pub undefined_terms: usize,
}

/// Fail unless both systems hold exactly the same set of names
pub fn check_pairing(simulated: &System, ideal: &System) -> SimResult<()> {
    let sim_names: BTreeSet<&str> = simulated.names().collect();
    let ideal_names: BTreeSet<&str> = ideal.names().collect();

    if sim_names == ideal_names {
        return Ok(());
    }

    Err(SimError::PairingMismatch {
        missing_in_ideal: sim_names
            .difference(&ideal_names)
            .map(|s| s.to_string())
            .collect(),
        missing_in_simulated: ideal_names
            .difference(&sim_names)
            .map(|s| s.to_string())
            .collect(),
    })
}

/// One report per body, ordered by name
pub fn score(simulated: &System, ideal: &System) -> SimResult<Vec<ErrorReport>> {
    check_pairing(simulated, ideal)?;

    let by_name: HashMap<&str, &Body> = ideal
        .bodies
        .iter()
        .map(|b| (b.name.as_str(), b))
        .collect();

    let mut reports = Vec::with_capacity(simulated.len());
    for body in simulated.sorted_by_name() {
        let reference = by_name
            .get(body.name.as_str())
            .ok_or_else(|| SimError::PairingMismatch {
                missing_in_ideal: vec![body.name.clone()],
                missing_in_simulated: Vec::new(),
            })?;

        let report = ErrorReport::compare(body, reference);
        let undefined = report.undefined_terms();
        if undefined > 0 {
            warn!(
                "{}: {} error terms undefined (reference component is zero)",
                report.name, undefined
            );
        }
        debug!(
            "{}: displacement {}%, velocity {}%, true {}%",
            report.name, report.displacement_error, report.velocity_error, report.true_error
        );
        reports.push(report);
    }

    Ok(reports)
}

pub fn summarize(reports: &[ErrorReport]) -> AccuracySummary {
    let true_errors: Vec<PercentError> = reports.iter().map(|r| r.true_error).collect();

    let mut worst: Option<(String, f64)> = None;
    for r in reports {
        if let Some(v) = r.true_error.value() {
            if worst.as_ref().map_or(true, |(_, w)| v > *w) {
                worst = Some((r.name.clone(), v));
            }
        }
    }

    AccuracySummary {
        bodies: reports.len(),
        mean_true_error: PercentError::mean(&true_errors),
        worst,
        undefined_terms: reports.iter().map(|r| r.undefined_terms()).sum(),
    }
}
