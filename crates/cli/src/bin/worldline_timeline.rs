//! Sample the worldline at evenly spaced instants and write them as CSV.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use worldline::export::{timeline, writer_for_path};
use worldline::state::WorldlineCalculator;

#[allow(dead_code)]
#[path = "shared/mod.rs"]
mod shared;

use shared::ObserverArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Worldline timeline CSV generator")]
struct Cli {
    #[command(flatten)]
    observer: ObserverArgs,

    /// Number of intervals between birth and target (writes steps + 1 rows)
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Output CSV path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    shared::init_tracing();
    let cli = Cli::parse();
    let observer = cli.observer.resolve()?;

    let states = WorldlineCalculator::new()
        .cmb_reference(observer.cmb_reference)
        .timeline(
            &observer.birth,
            observer.latitude_deg,
            observer.target.as_ref().map(Into::into),
            cli.steps,
        )?;

    let writer = writer_for_path(&cli.output)?;
    let rows = timeline::write_csv(writer, &states)?;
    info!(rows, output = %cli.output.display(), "wrote timeline");
    Ok(())
}
