//! Subset-sum enumeration — backtracking search over index subsets.
//!
//! State:
//!   index : usize      — next decision position in `values`
//!   acc   : i64        — sum of the values at indices already included
//!   path  : Vec<usize> — indices included so far, strictly increasing
//!
//! Transitions (evaluated in order):
//!   acc == target                  → record `path`, stop extending it
//!   index >= len || acc > target   → abandon the path
//!   otherwise                      → include `values[index]`, or exclude it
//!
//! The frontier is an explicit LIFO stack, so the traversal is depth-first
//! with the include branch explored first and no recursion depth limit.
//! Each frontier entry owns its own `path`; branches never share state.
//!
//! The `acc > target` cutoff assumes non-negative values. Negative values
//! keep the function total but leave the enumeration incomplete.

/// Enumerates every index subset of `values` whose elements sum exactly to
/// `target`, in include-first depth-first order.
pub fn subset_sum(values: &[i64], target: i64) -> Vec<Vec<usize>> {
    let mut matches: Vec<Vec<usize>> = Vec::new();
    let mut frontier: Vec<(usize, i64, Vec<usize>)> = vec![(0, 0, Vec::new())];

    while let Some((index, acc, path)) = frontier.pop() {
        if acc == target {
            matches.push(path);
            continue;
        }
        if index >= values.len() || acc > target {
            continue;
        }
        // exclude pushed below include so the include branch pops first
        frontier.push((index + 1, acc, path.clone()));
        let mut included = path;
        included.push(index);
        frontier.push((index + 1, acc + values[index], included));
    }

    matches
}
