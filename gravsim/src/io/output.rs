//! Result CSV writing
//!
//! The report file holds two blocks, both ordered by body name:
//! - `name, displacement_error_pct, velocity_error_pct, true_error_pct`
//! - `name, x, y, z, vx, vy, vz` (m, m/s)

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{SimError, SimResult};
use crate::scoring::accuracy::ErrorReport;
use crate::simulation::states::System;

/// `output_<dt>dt.csv`, one file per timestep
pub fn output_file_name(dt: f64) -> String {
    format!("output_{dt}dt.csv")
}

pub fn write_report<W: Write>(writer: W, reports: &[ErrorReport], sys: &System) -> SimResult<()> {
    let mut w = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    for r in reports {
        w.write_record([
            r.name.clone(),
            r.displacement_error.to_string(),
            r.velocity_error.to_string(),
            r.true_error.to_string(),
        ])?;
    }

    for b in sys.sorted_by_name() {
        w.write_record([
            b.name.clone(),
            b.x.x.to_string(),
            b.x.y.to_string(),
            b.x.z.to_string(),
            b.v.x.to_string(),
            b.v.y.to_string(),
            b.v.z.to_string(),
        ])?;
    }

    w.flush()?;
    Ok(())
}

/// Write the report into `dir`, replacing any earlier run with the same dt
pub fn save_report(
    dir: &Path,
    dt: f64,
    reports: &[ErrorReport],
    sys: &System,
) -> SimResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(output_file_name(dt));
    let file = File::create(&path)?;
    write_report(BufWriter::new(file), reports, sys)?;
    info!("Wrote report to {}", path.display());
    Ok(path)
}

/// Write the state back in input format (file units), insertion order
pub fn write_state<W: Write>(writer: W, sys: &System, unit_scale: f64) -> SimResult<()> {
    if !unit_scale.is_finite() || unit_scale <= 0.0 {
        return Err(SimError::InvalidUnitScale { scale: unit_scale });
    }

    let mut w = csv::Writer::from_writer(writer);

    for b in &sys.bodies {
        let x = b.x / unit_scale;
        let v = b.v / unit_scale;
        w.write_record([
            b.name.clone(),
            b.m.to_string(),
            x.x.to_string(),
            x.y.to_string(),
            x.z.to_string(),
            v.x.to_string(),
            v.y.to_string(),
            v.z.to_string(),
        ])?;
    }

    w.flush()?;
    Ok(())
}

pub fn save_state(path: &Path, sys: &System, unit_scale: f64) -> SimResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_state(BufWriter::new(file), sys, unit_scale)?;
    info!("Wrote final state to {}", path.display());
    Ok(())
}
