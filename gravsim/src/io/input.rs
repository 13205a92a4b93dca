//! Body state CSV parsing
//!
//! One record per line: `name, mass_kg, x, y, z, vx, vy, vz`, no header.
//! Positions and velocities are multiplied by `unit_scale` on the way in
//! (files carry km and km/s; the engine works in m and m/s). The scale must be
//! positive and finite.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, System, NVec3};

pub const FIELD_NAMES: [&str; 8] = ["name", "mass", "x", "y", "z", "vx", "vy", "vz"];

/// Parse every record in `reader`. Blank lines are skipped; any other line
/// that is not a complete numeric record aborts the parse.
pub fn parse_state<R: Read>(reader: R, unit_scale: f64) -> SimResult<Vec<Body>> {
    if !unit_scale.is_finite() || unit_scale <= 0.0 {
        return Err(SimError::InvalidUnitScale { scale: unit_scale });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut bodies = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // whitespace-only line
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() != FIELD_NAMES.len() {
            return Err(SimError::MalformedRecord {
                line,
                fields: record.len(),
            });
        }
        if record[0].is_empty() {
            return Err(SimError::EmptyName { line });
        }

        let num = |i: usize| -> SimResult<f64> {
            record[i].parse::<f64>().map_err(|_| SimError::InvalidNumber {
                line,
                field: FIELD_NAMES[i],
                value: record[i].to_string(),
            })
        };

        let m = num(1)?;
        let x = NVec3::new(num(2)?, num(3)?, num(4)?) * unit_scale;
        let v = NVec3::new(num(5)?, num(6)?, num(7)?) * unit_scale;

        bodies.push(Body::new(&record[0], m, x, v));
    }

    Ok(bodies)
}

pub fn parse_state_str(csv: &str, unit_scale: f64) -> SimResult<Vec<Body>> {
    parse_state(csv.as_bytes(), unit_scale)
}

/// Load and validate a state file into a fresh system
pub fn load_state(path: &Path, unit_scale: f64) -> SimResult<System> {
    let file = File::open(path)?;
    let bodies = parse_state(BufReader::new(file), unit_scale)?;
    info!("Loaded {} bodies from {}", bodies.len(), path.display());
    System::new(bodies)
}
