use std::cmp::Ordering;

/// Top-down merge sort. Ties take from the left run first.
pub fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);

    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

/// Quick sort with a middle pivot and a three-way, order-preserving partition.
///
/// Elements equal to the pivot are split by whether they sat before or after
/// it, so the pivot lands among its equals exactly where a stable sort puts it.
pub fn quick_sort_by<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let pivot_at = items.len() / 2;
    let pivot = items.remove(pivot_at);

    let mut less = Vec::new();
    let mut equal_before = Vec::new();
    let mut equal_after = Vec::new();
    let mut greater = Vec::new();

    for (i, item) in items.into_iter().enumerate() {
        match compare(&item, &pivot) {
            Ordering::Less => less.push(item),
            Ordering::Greater => greater.push(item),
            Ordering::Equal if i < pivot_at => equal_before.push(item),
            Ordering::Equal => equal_after.push(item),
        }
    }

    let mut sorted = quick_sort_by(less, compare);
    sorted.extend(equal_before);
    sorted.push(pivot);
    sorted.extend(equal_after);
    sorted.extend(quick_sort_by(greater, compare));
    sorted
}

/// In-place insertion sort. Shifts only past strictly greater elements.
pub fn insertion_sort_by<T, F>(items: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (key, tag): sorting compares keys only, tags reveal stability.
    fn pairs() -> Vec<(u8, char)> {
        vec![
            (3, 'a'),
            (1, 'b'),
            (3, 'c'),
            (2, 'd'),
            (1, 'e'),
            (3, 'f'),
            (0, 'g'),
        ]
    }

    fn by_key(a: &(u8, char), b: &(u8, char)) -> Ordering {
        a.0.cmp(&b.0)
    }

    fn expected() -> Vec<(u8, char)> {
        vec![
            (0, 'g'),
            (1, 'b'),
            (1, 'e'),
            (2, 'd'),
            (3, 'a'),
            (3, 'c'),
            (3, 'f'),
        ]
    }

    #[test]
    fn test_merge_sort_is_stable() {
        assert_eq!(merge_sort_by(pairs(), &by_key), expected());
    }

    #[test]
    fn test_quick_sort_is_stable() {
        assert_eq!(quick_sort_by(pairs(), &by_key), expected());
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut items = pairs();
        insertion_sort_by(&mut items, by_key);
        assert_eq!(items, expected());
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<(u8, char)> = Vec::new();
        assert!(merge_sort_by(empty.clone(), &by_key).is_empty());
        assert!(quick_sort_by(empty, &by_key).is_empty());

        let one = vec![(5, 'z')];
        assert_eq!(merge_sort_by(one.clone(), &by_key), one);
        assert_eq!(quick_sort_by(one.clone(), &by_key), one);
    }

    #[test]
    fn test_all_equal_keys_keep_order() {
        let items: Vec<(u8, char)> = "abcdefgh".chars().map(|c| (7, c)).collect();
        assert_eq!(quick_sort_by(items.clone(), &by_key), items);
        assert_eq!(merge_sort_by(items.clone(), &by_key), items);
    }
}
