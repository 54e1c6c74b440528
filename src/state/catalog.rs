use std::cmp::Ordering;

use strsim::jaro_winkler;
use tracing::debug;

use crate::models::Item;
use crate::planner::constants::SUGGESTION_THRESHOLD;
use crate::state::sorting::{insertion_sort_by, merge_sort_by, quick_sort_by};

/// How the catalog keeps its items ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMode {
    /// Ascending by name; lookups use binary search.
    Sorted,
    /// Insertion order; lookups scan sequentially.
    Unsorted,
}

/// The in-memory stock list.
///
/// All mutation goes through these methods. In [`CatalogMode::Sorted`] the
/// items are ordered by name (`name[i] <= name[i + 1]`). Names are expected
/// to be unique but this is not enforced.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    mode: CatalogMode,
}

fn by_name(a: &Item, b: &Item) -> Ordering {
    a.name.cmp(&b.name)
}

/// Dated items ascending, undated ones last.
fn by_expiry(a: &&Item, b: &&Item) -> Ordering {
    match (a.expiry_date, b.expiry_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Catalog {
    /// Build a name-ordered catalog by inserting each item at its search position.
    pub fn sorted(items: Vec<Item>) -> Self {
        let mut catalog = Self {
            items: Vec::with_capacity(items.len()),
            mode: CatalogMode::Sorted,
        };
        for item in items {
            catalog.insert_sorted(item);
        }
        catalog
    }

    /// Build a catalog that keeps the given order.
    pub fn unsorted(items: Vec<Item>) -> Self {
        Self {
            items,
            mode: CatalogMode::Unsorted,
        }
    }

    pub fn with_mode(items: Vec<Item>, mode: CatalogMode) -> Self {
        match mode {
            CatalogMode::Sorted => Self::sorted(items),
            CatalogMode::Unsorted => Self::unsorted(items),
        }
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_sorted_by_name(&self) -> bool {
        self.items.windows(2).all(|w| w[0].name <= w[1].name)
    }

    /// Leftmost index whose name is not less than `name`.
    ///
    /// Everything before the returned index sorts strictly before `name`, so
    /// a new item goes ahead of any existing item with the same name.
    pub fn locate_insertion_point(&self, name: &str) -> usize {
        let mut left = 0;
        let mut right = self.items.len();

        while left < right {
            let mid = left + (right - left) / 2;
            if self.items[mid].name.as_str() < name {
                left = mid + 1;
            } else {
                right = mid;
            }
        }
        left
    }

    /// Insert keeping name order. O(n) for the shift.
    pub fn insert_sorted(&mut self, item: Item) {
        let pos = self.locate_insertion_point(&item.name);
        debug!(name = %item.name, pos, "inserting item");
        self.items.insert(pos, item);
    }

    /// Append at the end.
    ///
    /// A sorted catalog drops to [`CatalogMode::Unsorted`] if this breaks
    /// name order.
    pub fn append_unsorted(&mut self, item: Item) {
        if self.mode == CatalogMode::Sorted
            && self.items.last().is_some_and(|last| last.name > item.name)
        {
            debug!(name = %item.name, "append breaks name order, catalog is now unsorted");
            self.mode = CatalogMode::Unsorted;
        }
        self.items.push(item);
    }

    /// Insert the way the current mode expects.
    pub fn insert(&mut self, item: Item) {
        match self.mode {
            CatalogMode::Sorted => self.insert_sorted(item),
            CatalogMode::Unsorted => self.append_unsorted(item),
        }
    }

    /// Binary search for an exact name.
    ///
    /// Only meaningful on a name-ordered catalog. With duplicate names the
    /// match returned is whichever one the search lands on first.
    pub fn find_by_name_sorted(&self, name: &str) -> Option<&Item> {
        let mut left = 0;
        let mut right = self.items.len();

        while left < right {
            let mid = left + (right - left) / 2;
            let item = &self.items[mid];
            match item.name.as_str().cmp(name) {
                Ordering::Equal => return Some(item),
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid,
            }
        }
        None
    }

    /// Linear scan; the first item with this name wins.
    pub fn find_by_name_sequential(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Look up by name using the search that suits the current mode.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        match self.mode {
            CatalogMode::Sorted => self.find_by_name_sorted(name),
            CatalogMode::Unsorted => self.find_by_name_sequential(name),
        }
    }

    /// Re-order by name with merge sort.
    pub fn sort_by_name_merge(&mut self) {
        let items = std::mem::take(&mut self.items);
        self.items = merge_sort_by(items, &by_name);
        self.mode = CatalogMode::Sorted;
        debug!(len = self.items.len(), "catalog sorted with merge sort");
    }

    /// Re-order by name with quick sort. Same output as the merge variant.
    pub fn sort_by_name_quick(&mut self) {
        let items = std::mem::take(&mut self.items);
        self.items = quick_sort_by(items, &by_name);
        self.mode = CatalogMode::Sorted;
        debug!(len = self.items.len(), "catalog sorted with quick sort");
    }

    /// All items by expiry date, soonest first; items that never expire last.
    pub fn expiry_ordered_view(&self) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        insertion_sort_by(&mut view, by_expiry);
        view
    }

    /// Items below their ideal quantity, in catalog order.
    pub fn below_ideal_fifo(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_below_ideal()).collect()
    }

    /// Names that look like `query`, best match first.
    pub fn suggest_names(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.to_lowercase();
        let mut scored: Vec<(&str, f64)> = self
            .items
            .iter()
            .map(|item| {
                let score = jaro_winkler(&item.name.to_lowercase(), &query);
                (item.name.as_str(), score)
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.dedup_by(|a, b| a.0 == b.0);
        scored.into_iter().take(limit).map(|(name, _)| name).collect()
    }
}
