//! CLI for the emulsion LAMP amplicon adsorption model.
//!
//! Loads droplet-diameter measurements, runs the saturation integrator, and
//! prints the time course; optionally writes the series as JSON for the
//! plotting pipeline.

use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use emulsion_lamp_rust::adsorption::GrowthModel;
use emulsion_lamp_rust::constants::DEFAULT_DIAMETER_FILE;
use emulsion_lamp_rust::droplet::{DropletSummary, Statistic};
use emulsion_lamp_rust::droplet_data::load_droplet_samples;
use emulsion_lamp_rust::error::ModelError;
use emulsion_lamp_rust::sim::{Outcome, RunResult, SimProps, Simulation};

type BoxError = Box<dyn std::error::Error>;

#[derive(Parser)]
#[command(name = "lamp-model")]
#[command(about = "Model emulsion LAMP amplicon creation and adsorption", long_about = None)]
struct Cli {
    /// Droplet diameter data file (single 'Diameter (um)' column)
    #[arg(short, long, default_value = DEFAULT_DIAMETER_FILE)]
    input: PathBuf,

    /// Doubling time of the LAMP reaction (seconds)
    #[arg(short, long)]
    doubling_time: f64,

    /// Base-pair length of the primary target
    #[arg(short, long)]
    length: u32,

    /// Droplet size statistic: avg or med
    #[arg(short = 't', long = "stat")]
    stat: String,

    /// Growth model: exp or log
    #[arg(short, long)]
    growth: String,

    /// Number of amplicon size classes (multimers at integer multiples of
    /// the target length)
    #[arg(short, long, default_value_t = 1)]
    sizes: u32,

    /// Iteration ceiling in seconds (defaults to 600 for exp, 1800 for log)
    #[arg(long)]
    max_seconds: Option<u32>,

    /// Logistic shape rate constant b (s⁻¹)
    #[arg(long)]
    logistic_rate: Option<f64>,

    /// Write the saturation series to this file as JSON
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BoxError> {
    // Selector validation happens before anything touches the filesystem
    let statistic: Statistic = cli.stat.parse()?;
    let mut growth: GrowthModel = cli.growth.parse()?;
    if let Some(rate) = cli.logistic_rate {
        match growth {
            GrowthModel::Logistic { .. } => growth = GrowthModel::Logistic { rate },
            GrowthModel::Exponential => {
                return Err(ModelError::InvalidParameter(
                    "--logistic-rate only applies to the logistic growth model".to_string(),
                )
                .into());
            }
        }
    }

    let samples = load_droplet_samples(&cli.input)?;
    let summary = DropletSummary::from_samples(&samples)?;
    print_summary(&summary, samples.len());

    let sim = Simulation::new(SimProps {
        summary,
        statistic,
        growth,
        doubling_time_s: cli.doubling_time,
        base_pair_length: cli.length,
        size_classes: cli.sizes,
        max_seconds: cli.max_seconds,
    })?;
    let result = sim.run();
    print_result(&result);

    if let Some(path) = &cli.out {
        let json = serde_json::to_string_pretty(&result.series)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        println!("💾 Saturation series written to {}", path.display());
    }

    Ok(())
}

fn print_summary(summary: &DropletSummary, count: usize) {
    println!("{}", "=== DROPLET SIZE ANALYSIS ===".bold());
    println!("🧫 Measured droplets: {}", count);
    println!(
        "   Average volume:        {:.3} pL",
        summary.mean_volume_pl()
    );
    println!(
        "   Median volume:         {:.3} pL",
        summary.median_volume_pl()
    );
    println!(
        "   Average surface area:  {:.3e} nm²",
        summary.mean_surface_area_nm2
    );
    println!(
        "   Median surface area:   {:.3e} nm²",
        summary.median_surface_area_nm2
    );
    println!();
}

fn print_result(result: &RunResult) {
    println!("{}", "=== SATURATION TIME COURSE ===".bold());
    match result.outcome {
        Outcome::Saturated => {
            let minutes = result.steps_executed as f64 / 60.0;
            println!(
                "✅ Interface saturated after {} steps ({:.2} min)",
                result.steps_executed, minutes
            );
        }
        Outcome::TimedOut => {
            println!(
                "{} ceiling of {} s reached before saturation; partial series follows",
                "⏳ Timed out:".yellow(),
                result.steps_executed
            );
        }
    }
    if let (Some(t), Some(s)) = (
        result.series.time_min.last(),
        result.series.saturation_pct.last(),
    ) {
        println!(
            "   Final reported sample: {:.2} min, {:.4}% coverage",
            t, s
        );
    }
    println!("   Series length: {} samples", result.series.len());
}
