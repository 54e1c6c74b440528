// ─────────────────────────────────────────────────────────────────────────────
// Restock scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Benefit multiplier: `benefit = floor(deficit * price * (1 + criticality) * BENEFIT_SCALE)`.
pub const BENEFIT_SCALE: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Solver limits
// ─────────────────────────────────────────────────────────────────────────────

/// Above this many critical items the naive recursive solver gets a warning;
/// it still runs.
pub const RECURSIVE_WARN_THRESHOLD: usize = 20;

/// Recursion depth equals the critical item count, so the recursive and
/// memoized solvers refuse lists longer than this.
pub const MAX_RECURSION_DEPTH: usize = 1_000;

/// Largest iterative table, in cells, before the solver refuses to allocate it.
pub const MAX_TABLE_CELLS: u64 = 20_000_000;

// ─────────────────────────────────────────────────────────────────────────────
// Interface
// ─────────────────────────────────────────────────────────────────────────────

/// Item source read when `--file` is not given.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Minimum Jaro-Winkler similarity for a name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// How many suggestions to offer after a failed lookup.
pub const MAX_SUGGESTIONS: usize = 5;
