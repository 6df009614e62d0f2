//! Pure combination generation: no validation, no I/O.
//!
//! Items are expanded from per-group counts into a flat list ("A1", "A2",
//! "B1", ...), then an exhaustive backtracking search enumerates every
//! selection of exactly `length` items with at most one item per prefix
//! group. Output order is lexicographic over flat-list indices and fully
//! deterministic for a fixed input.

use crate::domain::model::Combination;

/// Expands group counts into the flat item list, in group order then suffix
/// order: `build_items(&[3, 2])` yields `["A1", "A2", "A3", "B1", "B2"]`.
pub fn build_items(group_counts: &[u32]) -> Vec<String> {
    let mut items = Vec::new();
    for (group, &count) in group_counts.iter().enumerate() {
        let prefix = group_prefix(group);
        for suffix in 1..=count {
            items.push(format!("{}{}", prefix, suffix));
        }
    }
    items
}

/// Generates every valid combination of exactly `length` items.
///
/// A `length` of 0 yields a single empty combination (the recursion's base
/// case matches immediately). A `length` larger than the number of non-empty
/// groups yields an empty result set. Inputs are not validated here; the
/// caller is responsible for rejecting malformed payloads.
pub fn generate(group_counts: &[u32], length: usize) -> Vec<Combination> {
    let items = build_items(group_counts);
    let mut valid_combinations = Vec::new();
    let mut current = Vec::with_capacity(length);

    find_combinations(&items, length, 0, &mut current, &mut valid_combinations);
    valid_combinations
}

fn find_combinations(
    items: &[String],
    length: usize,
    start: usize,
    current: &mut Combination,
    valid_combinations: &mut Vec<Combination>,
) {
    if current.len() == length {
        valid_combinations.push(current.clone());
        return;
    }

    for i in start..items.len() {
        let prefix = items[i].chars().next();

        // At most one item per prefix group in any combination.
        if current.iter().any(|item| item.chars().next() == prefix) {
            continue;
        }

        current.push(items[i].clone());
        find_combinations(items, length, i + 1, current, valid_combinations);
        current.pop();
    }
}

// Groups beyond index 25 fall outside the 26-letter alphabet; the service
// layer rejects such payloads before the generator runs.
fn group_prefix(group: usize) -> char {
    char::from_u32('A' as u32 + group as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}
