/// Mapping of drill modules in src to type of computation
/// and whether deterministic or stochastic
pub const DRILLS_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Optimization
    (
        "optimization/subset_sum.rs",
        "Combinatorial search",
        "Deterministic",
    ),
    // Sorting
    ("sorting/merge_sort.rs", "Sorting", "Deterministic"),
    ("sorting/selection_sort.rs", "Sorting", "Deterministic"),
];
