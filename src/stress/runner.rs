use std::collections::HashSet;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::error::{Result, StockError};
use crate::models::Method;
use crate::planner::{compare_critical, extract_critical};
use crate::state::Catalog;
use crate::stress::generator::{random_budget, random_catalog};

/// Configuration for a stress run.
#[derive(Debug, Clone)]
pub struct StressConfig {
    pub trials: usize,
    pub seed: u64,
    /// Upper bound on catalog size. The recursive solver is exponential, keep it small.
    pub max_items: usize,
    pub max_budget: f64,
    pub csv: Option<PathBuf>,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            trials: 500,
            seed: 123,
            max_items: 14,
            max_budget: 400.0,
            csv: None,
        }
    }
}

impl StressConfig {
    /// Reject bounds the generator cannot sample from.
    pub fn validate(&self) -> Result<()> {
        if !self.max_budget.is_finite() || self.max_budget < 0.0 {
            return Err(StockError::InvalidArgument(format!(
                "max budget must be a finite non-negative number, got {}",
                self.max_budget
            )));
        }
        Ok(())
    }
}

/// What one random catalog revealed.
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub trial: usize,
    pub items: usize,
    pub duplicate_names: usize,
    pub critical: usize,
    pub budget: f64,
    pub max_benefit: u64,
    pub total_cost: u64,
    pub selected: usize,
    pub violations: Vec<String>,
    pub sorts_agree: bool,
    pub lookups_agree: bool,
}

impl TrialResult {
    pub fn passed(&self) -> bool {
        self.violations.is_empty() && self.sorts_agree && self.lookups_agree
    }
}

/// All trials of a run.
#[derive(Debug, Clone, Default)]
pub struct StressReport {
    pub seed: u64,
    pub trials: Vec<TrialResult>,
}

impl StressReport {
    pub fn failures(&self) -> impl Iterator<Item = &TrialResult> {
        self.trials.iter().filter(|t| !t.passed())
    }

    pub fn all_passed(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Generate one catalog and cross-check searches, sorts and solvers on it.
pub fn run_trial(rng: &mut impl Rng, config: &StressConfig, trial: usize) -> Result<TrialResult> {
    let items = random_catalog(rng, config.max_items);
    let budget = random_budget(rng, config.max_budget);

    let distinct: HashSet<&str> = items.iter().map(|i| i.name.as_str()).collect();
    let duplicate_names = items.len() - distinct.len();

    let mut by_merge = Catalog::unsorted(items.clone());
    let mut by_quick = Catalog::unsorted(items.clone());
    by_merge.sort_by_name_merge();
    by_quick.sort_by_name_quick();
    let sorts_agree = by_merge.items() == by_quick.items() && by_merge.is_sorted_by_name();

    let sorted = Catalog::sorted(items);
    let lookups_agree = sorted.is_sorted_by_name()
        && sorted.items().iter().all(|item| {
            let binary = sorted.find_by_name_sorted(&item.name).map(|i| &i.name);
            let sequential = sorted.find_by_name_sequential(&item.name).map(|i| &i.name);
            binary.is_some() && binary == sequential
        });

    let critical = extract_critical(&sorted);
    let comparison = compare_critical(&critical, budget)?;
    let reference = comparison.result(Method::Iterative);

    Ok(TrialResult {
        trial,
        items: sorted.len(),
        duplicate_names,
        critical: critical.len(),
        budget,
        max_benefit: reference.map_or(0, |r| r.max_benefit),
        total_cost: reference.map_or(0, |r| r.total_cost),
        selected: reference.map_or(0, |r| r.selected_count),
        violations: comparison.violations.iter().map(ToString::to_string).collect(),
        sorts_agree,
        lookups_agree,
    })
}

/// Run every trial from a single seeded generator.
pub fn run_stress(config: &StressConfig) -> Result<StressReport> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut trials = Vec::with_capacity(config.trials);

    info!(
        trials = config.trials,
        seed = config.seed,
        max_items = config.max_items,
        "starting stress run"
    );

    for i in 0..config.trials {
        let result = run_trial(&mut rng, config, i + 1)?;
        if !result.passed() {
            warn!(trial = result.trial, violations = ?result.violations, "trial failed");
        }
        trials.push(result);

        if (i + 1) % (config.trials / 10).max(1) == 0 {
            let pct = ((i + 1) as f64 / config.trials as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    Ok(StressReport {
        seed: config.seed,
        trials,
    })
}
