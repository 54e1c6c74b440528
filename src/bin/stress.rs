use std::path::PathBuf;

use clap::Parser;

use stock_keeper_rs::logging;
use stock_keeper_rs::stress::{print_summary, run_stress, write_csv, StressConfig};

#[derive(Parser, Debug)]
#[command(name = "stress")]
#[command(about = "Cross-check the restock solvers, sorts and searches on random catalogs")]
struct Args {
    /// Number of random catalogs to check
    #[arg(long, default_value = "500")]
    trials: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Largest catalog to generate (the recursive solver is exponential)
    #[arg(long, default_value = "14")]
    max_items: usize,

    /// Largest budget to draw
    #[arg(long, default_value = "400")]
    max_budget: f64,

    /// Output CSV file with one row per trial
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = StressConfig {
        trials: args.trials,
        seed: args.seed,
        max_items: args.max_items,
        max_budget: args.max_budget,
        csv: args.csv,
    };

    let report = match run_stress(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_summary(&report);

    if let Some(path) = &config.csv {
        if let Err(e) = write_csv(&report, path) {
            eprintln!("Error writing CSV: {}", e);
        } else {
            println!("Wrote trial results to {:?}", path);
        }
    }

    if !report.all_passed() {
        std::process::exit(1);
    }
}
