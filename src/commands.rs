use anyhow::{bail, Context};
use serde::Serialize;

use crate::cli::Command;
use crate::computation_map::DRILLS_COMPUTATION_MAP;
use crate::parse::parse_sequence;

#[derive(Serialize)]
struct SubsetSumReport {
    values: Vec<i64>,
    target: i64,
    matches: Vec<SubsetMatch>,
}

#[derive(Serialize)]
struct SubsetMatch {
    indices: Vec<usize>,
    selected: Vec<i64>,
}

#[derive(Serialize)]
struct SortReport {
    input: Vec<i64>,
    sorted: Vec<i64>,
}

pub fn execute_command(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::SubsetSum { values, target, json } => {
            use crate::optimization::invariant::{Invariant, NonNegative, SumsTo};
            use crate::optimization::subset_sum::subset_sum;

            let values = parse_sequence(&values).context("invalid --values")?;
            for &v in &values {
                if !NonNegative.check(&v) {
                    bail!("subset-sum is defined for non-negative values, got {v}");
                }
            }

            let matches = subset_sum(&values, target);
            let sums_to = SumsTo { values: &values, target };
            assert!(matches.iter().all(|path| sums_to.check(path)));

            if json {
                let report = SubsetSumReport {
                    target,
                    matches: matches
                        .into_iter()
                        .map(|indices| SubsetMatch {
                            selected: indices.iter().map(|&i| values[i]).collect(),
                            indices,
                        })
                        .collect(),
                    values,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} match(es) for target {target}", matches.len());
                for path in &matches {
                    let selected: Vec<i64> = path.iter().map(|&i| values[i]).collect();
                    println!("{path:?} -> {selected:?}");
                }
            }
        }
        Command::MergeSort { values, json } => {
            use crate::sorting::invariant::{Invariant, Sorted};
            use crate::sorting::merge_sort::merge_sort;

            let input = parse_sequence(&values).context("invalid --values")?;
            let sorted = merge_sort(&input);
            assert!(Sorted.check(&sorted));

            if json {
                println!("{}", serde_json::to_string_pretty(&SortReport { input, sorted })?);
            } else {
                println!("{sorted:?}");
            }
        }
        Command::SelectionSort { values, json } => {
            use crate::sorting::invariant::{Invariant, Sorted};
            use crate::sorting::selection_sort::selection_sort;

            let input = parse_sequence(&values).context("invalid --values")?;
            let mut sorted = input.clone();
            selection_sort(&mut sorted);
            assert!(Sorted.check(&sorted));

            if json {
                println!("{}", serde_json::to_string_pretty(&SortReport { input, sorted })?);
            } else {
                println!("{sorted:?}");
            }
        }
        Command::Map => {
            println!("=== Computation Map ===");
            for (path, comp_type, determinism) in DRILLS_COMPUTATION_MAP.iter() {
                println!("{:<28} | {:<20} | {}", path, comp_type, determinism);
            }
        }
    }
    Ok(())
}
