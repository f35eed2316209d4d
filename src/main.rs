//! `floorplan` — count chairs per room in an ASCII floor plan.
//!
//! ```text
//! floorplan -i rooms.txt                # writes out.txt
//! floorplan -i rooms.txt -o report.txt -v
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use floorplan::{report, Apartment, Grid, GridOptions};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Plan file to read.
    #[arg(short, long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Where to write the report.
    #[arg(short, long = "output", value_name = "PATH", default_value = "out.txt")]
    output: PathBuf,

    /// Print the report to stdout as well, and log tracing details.
    #[arg(short, long)]
    verbose: bool,

    /// Pad short rows with blanks instead of rejecting the plan.
    #[arg(long)]
    pad_rows: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Default: WARN for everything, INFO for floorplan (DEBUG with -v).
    // Override with RUST_LOG.
    let crate_level = if args.verbose { "floorplan=debug" } else { "floorplan=info" };
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive(crate_level.parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading plan {}", args.input.display()))?;
    let grid = Grid::parse(
        &text,
        GridOptions {
            pad_rows: args.pad_rows,
        },
    )
    .with_context(|| format!("loading plan {}", args.input.display()))?;
    info!(height = grid.height(), width = grid.width(), "plan loaded");

    let apartment = Apartment::build(&grid)
        .with_context(|| format!("tracing rooms of {}", args.input.display()))?;

    let output = report::render(&apartment);
    fs::write(&args.output, &output)
        .with_context(|| format!("writing report {}", args.output.display()))?;

    if args.verbose {
        println!("{output}");
    }
    Ok(())
}
