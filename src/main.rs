use aerobalance::logging::init_logging;
use aerobalance::{BalanceType, ReductionJob, RunConfig};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Reduce wind-tunnel balance tables to aerodynamic coefficients")]
struct Cli {
    /// Run file (TOML) describing tables, layout and test article
    config: PathBuf,

    /// Override the balance type from the run file (e.g. sixteen-rod, eighteen-rod)
    #[arg(long)]
    balance: Option<BalanceType>,

    /// Debug-level logging, unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = RunConfig::load(&cli.config)?;
    if let Some(balance) = cli.balance {
        config.balance = balance;
    }

    let summary = ReductionJob::new(config).run()?;
    println!(
        "{} rows written to {} and {}",
        summary.rows,
        summary.body_file.display(),
        summary.aero_file.display()
    );

    Ok(())
}
