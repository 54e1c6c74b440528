use std::collections::HashMap;

use crate::models::Method;

/// One candidate: what it costs and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub cost: u64,
    pub benefit: u64,
}

impl Entry {
    pub fn new(cost: u64, benefit: u64) -> Self {
        Self { cost, benefit }
    }
}

/// Best total benefit and the chosen entry indices, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub value: u64,
    pub chosen: Vec<usize>,
}

/// Capacity beyond which no answer changes.
///
/// `best(i, w)` is constant for every `w > cost_1 + ... + cost_i`: every
/// residual capacity along the way stays positive, so the `w = 0` base case
/// is never hit. The `+ 1` matters only for zero-cost entries, which a
/// residual of exactly 0 would otherwise drop.
pub fn effective_capacity(entries: &[Entry], capacity: u64) -> u64 {
    let total = entries
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(e.cost));
    capacity.min(total.saturating_add(1))
}

/// Solve the 0/1 knapsack with the given method.
///
/// `best(i, w)` is the highest benefit reachable with the first `i` entries
/// and capacity `w`. `best(0, _) = best(_, 0) = 0`, and
///
/// ```text
/// best(i, w) = best(i-1, w)                                   if cost_i > w
///            = max(best(i-1, w), best(i-1, w-cost_i) + ben_i)   otherwise
/// ```
///
/// Benefit sums saturate at `u64::MAX`. Every method walks the choice back
/// from `(n, capacity)` and takes entry `i` only when that is strictly better
/// than skipping it, so all three return the same selection.
pub fn solve(method: Method, entries: &[Entry], capacity: u64) -> Solution {
    match method {
        Method::Recursive => solve_recursive(entries, capacity),
        Method::Memoized => solve_memoized(entries, capacity),
        Method::Iterative => solve_iterative(entries, capacity),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recursive
// ─────────────────────────────────────────────────────────────────────────────

fn best_recursive(entries: &[Entry], i: usize, w: u64) -> u64 {
    if i == 0 || w == 0 {
        return 0;
    }

    let entry = entries[i - 1];
    let skip = best_recursive(entries, i - 1, w);
    if entry.cost > w {
        return skip;
    }

    let take = best_recursive(entries, i - 1, w - entry.cost).saturating_add(entry.benefit);
    skip.max(take)
}

/// Plain double recursion. Exponential; meant for small inputs.
pub fn solve_recursive(entries: &[Entry], capacity: u64) -> Solution {
    let capacity = effective_capacity(entries, capacity);
    let value = best_recursive(entries, entries.len(), capacity);
    let chosen = walk_back(entries, capacity, |i, w| best_recursive(entries, i, w));
    Solution { value, chosen }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memoized
// ─────────────────────────────────────────────────────────────────────────────

/// Cache keyed by (remaining entries, remaining capacity), local to one solve.
struct Memo<'a> {
    entries: &'a [Entry],
    cache: HashMap<(usize, u64), u64>,
}

impl<'a> Memo<'a> {
    fn new(entries: &'a [Entry]) -> Self {
        Self {
            entries,
            cache: HashMap::new(),
        }
    }

    fn best(&mut self, i: usize, w: u64) -> u64 {
        if i == 0 || w == 0 {
            return 0;
        }
        if let Some(&value) = self.cache.get(&(i, w)) {
            return value;
        }

        let entry = self.entries[i - 1];
        let skip = self.best(i - 1, w);
        let value = if entry.cost > w {
            skip
        } else {
            skip.max(self.best(i - 1, w - entry.cost).saturating_add(entry.benefit))
        };

        self.cache.insert((i, w), value);
        value
    }
}

/// Top-down recursion with memoization.
pub fn solve_memoized(entries: &[Entry], capacity: u64) -> Solution {
    let capacity = effective_capacity(entries, capacity);
    let mut memo = Memo::new(entries);
    let value = memo.best(entries.len(), capacity);
    let chosen = walk_back(entries, capacity, |i, w| memo.best(i, w));
    Solution { value, chosen }
}

// ─────────────────────────────────────────────────────────────────────────────
// Iterative
// ─────────────────────────────────────────────────────────────────────────────

/// Cells [`solve_iterative`] allocates for this input, saturating.
pub fn table_cells(entries: &[Entry], capacity: u64) -> u64 {
    let rows = entries.len() as u64 + 1;
    rows.saturating_mul(effective_capacity(entries, capacity).saturating_add(1))
}

/// Bottom-up table over `(0..=n) x (0..=capacity)`.
///
/// Allocates [`table_cells`] entries; callers bound that first.
pub fn solve_iterative(entries: &[Entry], capacity: u64) -> Solution {
    let capacity = usize::try_from(effective_capacity(entries, capacity)).unwrap_or(usize::MAX);
    let n = entries.len();
    let mut table = vec![vec![0u64; capacity.saturating_add(1)]; n + 1];

    for i in 1..=n {
        let entry = entries[i - 1];
        for w in 1..=capacity {
            let skip = table[i - 1][w];
            table[i][w] = match usize::try_from(entry.cost) {
                Ok(cost) if cost <= w => {
                    skip.max(table[i - 1][w - cost].saturating_add(entry.benefit))
                }
                _ => skip,
            };
        }
    }

    // A row that differs from the one above means entry i was taken.
    let mut chosen = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if table[i][w] != table[i - 1][w] {
            chosen.push(i - 1);
            w -= entries[i - 1].cost as usize;
        }
    }
    chosen.reverse();

    Solution {
        value: table[n][capacity],
        chosen,
    }
}

/// Re-derive the selection from `(n, capacity)`, preferring to skip on ties.
fn walk_back<F>(entries: &[Entry], capacity: u64, mut best: F) -> Vec<usize>
where
    F: FnMut(usize, u64) -> u64,
{
    let mut chosen = Vec::new();
    let mut w = capacity;

    for i in (1..=entries.len()).rev() {
        if w == 0 {
            break;
        }
        let entry = entries[i - 1];
        if entry.cost > w {
            continue;
        }
        let skip = best(i - 1, w);
        let take = best(i - 1, w - entry.cost).saturating_add(entry.benefit);
        if take > skip {
            chosen.push(i - 1);
            w -= entry.cost;
        }
    }

    chosen.reverse();
    chosen
}
