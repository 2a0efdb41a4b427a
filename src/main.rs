use orbitsim::{ScenarioConfig, Scenario, Parameters, TraceRenderer};
use orbitsim::bench_step;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless central-mass orbit simulation")]
struct Args {
    /// Scenario file, relative to `scenarios/` unless absolute
    #[arg(short, long, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run the built-in solar system instead of loading a file
    #[arg(long)]
    preset: bool,

    /// Override the number of frames to step
    #[arg(long)]
    frames: Option<u64>,

    /// Include orbit trail segments in the trace output
    #[arg(long)]
    trails: bool,

    /// Time the integrator instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    if args.preset {
        return Scenario::solar_system(Parameters::default()).context("failed to build solar system preset");
    }

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    Scenario::build_scenario(scenario_cfg).context("failed to build scenario")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        return bench_step().context("benchmark setup failed");
    }

    info!("Starting program...");
    let mut scenario = load_scenario(&args)?;
    info!("Simulation initialized with {} bodies", scenario.simulation.registry().len());

    let frames = args.frames.unwrap_or(scenario.run.frames);
    let stdout = io::stdout();
    let mut renderer = TraceRenderer::new(stdout.lock()).with_trails(args.trails);

    scenario
        .simulation
        .run(frames, scenario.run.dt, scenario.run.trace_every, &mut renderer)
        .context("failed to write trace")?;

    info!(
        "Closing after {} frames, {:.3e} simulated seconds",
        scenario.simulation.frame(),
        scenario.simulation.elapsed()
    );
    info!("Program terminated");

    Ok(())
}
