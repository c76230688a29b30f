use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use terrain::{Colormap, RunParams, render};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "faultgen")]
#[command(about = "Generate a fault-line heightmap and save it as an image")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// WIDTH HEIGHT THREADS FAULTS, each at least 1
    #[arg(value_name = "VALUES")]
    values: Vec<String>,

    /// Output image path
    #[arg(short, long, default_value = "terrain.png")]
    output: PathBuf,

    /// Colour scheme: gray or terrain
    #[arg(short, long, default_value = "gray")]
    colormap: Colormap,
}

fn run(args: Args) -> anyhow::Result<()> {
    let params = RunParams::from_args(&args.values)?;
    println!("Parameters: {params}");

    let report = terrain::generate(&params)?;
    println!("Execution time: {} ms", report.elapsed.as_millis());
    tracing::debug!(
        workers = ?report.workers,
        min = report.snapshot.min,
        max = report.snapshot.max,
        "height range"
    );

    let img = render::render(&report.snapshot, args.colormap)?;
    render::save_png(&img, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!("Saved terrain image to {:?}", args.output);

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
