use orbitsim::{ScenarioConfig, Scenario, ExportConfig};
use orbitsim::{run_2d, run_headless};

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "2D Newtonian orbit simulator")]
struct Args {
    /// Scenario file, looked up in the crate's `scenarios/` directory unless it
    /// is an existing path
    #[arg(short, long, default_value = "sun_earth_venus.yaml")]
    file_name: String,

    /// Multiplier applied to the scenario's time step
    #[arg(short, long, default_value_t = 1.0)]
    speed: f64,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Number of steps for a headless run
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Write the state export here instead of the scenario's export path
    #[arg(long)]
    export: Option<String>,
}

// resolve here to keep main clean
fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.is_file() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let scenario_cfg = ScenarioConfig::from_yaml_file(&scenario_path(&args.file_name))?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).with_speed(args.speed);

    if let Some(path) = args.export {
        let interval = scenario.export.as_ref().map_or(1.0, |e| e.interval);
        scenario.export = Some(ExportConfig { path, interval });
    }

    if args.headless {
        let summary = run_headless(&mut scenario, args.steps)?;
        println!(
            "{} steps, t = {:e}, {} bodies, energy drift {:e}",
            summary.steps, summary.time, summary.bodies, summary.energy_drift
        );
    } else {
        run_2d(scenario);
    }

    Ok(())
}
