use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "counter", version, about = "Simulate a service counter, one minute per tick")]
pub struct Cli {
    /// Simulation length in minutes (prompted for when omitted)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: Option<u64>,

    /// Number of tellers (prompted for when omitted)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub tellers: Option<u64>,

    /// CSV file of arrivals with columns `tick,service_ticks`.
    /// Without it, the service time of each arrival is prompted for.
    #[arg(long)]
    pub arrivals: Option<PathBuf>,

    /// Directory to write CSV snapshots, tick summaries and the report into
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print (and write) the counter state every N minutes; 0 disables
    #[arg(long, default_value_t = 1)]
    pub snapshot_interval: u64,
}
