use gravsim::{save_report, save_state, IntegratorConfig, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gravsim")]
#[command(about = "Direct n-body gravity simulation scored against an ideal end state")]
struct Args {
    /// Initial state CSV (name, mass, x, y, z, vx, vy, vz in kg, km, km/s)
    initial: PathBuf,

    /// Ideal end state CSV in the same format
    ideal: PathBuf,

    /// Timestep in seconds, negative integrates backward
    #[arg(allow_negative_numbers = true)]
    dt: f64,

    /// Optional YAML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for output_<dt>dt.csv, overrides the configuration
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// semi_implicit_euler or explicit_euler, overrides the configuration
    #[arg(long)]
    integrator: Option<IntegratorConfig>,

    /// Also write the final state in input format to this path
    #[arg(long)]
    state_out: Option<PathBuf>,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.config {
        Some(path) => ScenarioConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => ScenarioConfig::default(),
    };

    if let Some(dir) = &args.output_dir {
        cfg.output.directory = dir.clone();
    }
    if let Some(integrator) = args.integrator {
        cfg.engine.integrator = integrator;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = load_config(&args)?;

    let scenario = Scenario::from_files(&cfg, &args.initial, &args.ideal, args.dt)
        .context("failed to set up simulation")?;

    let percent = cfg.output.progress_percent;
    let mut last_reported = 0;
    let outcome = scenario
        .run(|step, total| {
            if percent == 0 || total == 0 {
                return;
            }
            let done = step * 100 / total;
            if done >= last_reported + percent || step == total {
                last_reported = done - done % percent;
                info!("Step {step}/{total} ({done}%)");
            }
        })
        .context("simulation failed")?;

    println!("name,displacement_error_pct,velocity_error_pct,true_error_pct");
    for r in &outcome.reports {
        println!(
            "{},{},{},{}",
            r.name, r.displacement_error, r.velocity_error, r.true_error
        );
    }

    let summary = &outcome.summary;
    println!("Mean true error: {}%", summary.mean_true_error);
    if let Some((name, worst)) = &summary.worst {
        println!("Worst body: {name} ({worst}%)");
    }
    if summary.undefined_terms > 0 {
        println!("Undefined error terms: {}", summary.undefined_terms);
    }
    if outcome.stats.degenerate_pairs > 0 {
        println!(
            "Skipped {} coincident pair evaluations",
            outcome.stats.degenerate_pairs
        );
    }

    let path = save_report(&cfg.output.directory, args.dt, &outcome.reports, &outcome.system)
        .context("failed to write report")?;
    println!("Report written to {}", path.display());

    if let Some(state_out) = &args.state_out {
        save_state(state_out, &outcome.system, cfg.input.unit_scale)
            .with_context(|| format!("failed to write state {}", state_out.display()))?;
    }

    Ok(())
}
