use std::path::Path;

use crate::error::Result;
use crate::stress::runner::StressReport;

/// Write one row per trial.
pub fn write_csv(report: &StressReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "trial",
        "items",
        "duplicate_names",
        "critical",
        "budget",
        "max_benefit",
        "total_cost",
        "selected",
        "sorts_agree",
        "lookups_agree",
        "violations",
    ])?;

    for t in &report.trials {
        wtr.write_record([
            t.trial.to_string(),
            t.items.to_string(),
            t.duplicate_names.to_string(),
            t.critical.to_string(),
            format!("{:.2}", t.budget),
            t.max_benefit.to_string(),
            t.total_cost.to_string(),
            t.selected.to_string(),
            t.sorts_agree.to_string(),
            t.lookups_agree.to_string(),
            t.violations.join(" | "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print run totals and any failing trials.
pub fn print_summary(report: &StressReport) {
    let total = report.trials.len();
    let failed: Vec<_> = report.failures().collect();
    let with_duplicates = report.trials.iter().filter(|t| t.duplicate_names > 0).count();
    let nothing_critical = report.trials.iter().filter(|t| t.critical == 0).count();
    let zero_budget = report.trials.iter().filter(|t| t.budget == 0.0).count();

    println!();
    println!("=== Stress summary (seed {}) ===", report.seed);
    println!("Trials: {}", total);
    println!("  with duplicate names: {}", with_duplicates);
    println!("  with no critical items: {}", nothing_critical);
    println!("  with zero budget: {}", zero_budget);
    println!("Failed: {}", failed.len());

    for t in &failed {
        println!(
            "  #{}: sorts_agree={} lookups_agree={}",
            t.trial, t.sorts_agree, t.lookups_agree
        );
        for v in &t.violations {
            println!("      {}", v);
        }
    }
    println!();
}
