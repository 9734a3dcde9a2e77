//! # Algo Drills
//!
//! Standalone algorithm drills organized by category. Each drill is
//! self-contained; none depend on each other.
//!
//! ## Modules
//!
//! - `optimization` – Combinatorial search (backtracking subset-sum enumeration)
//! - `sorting` – Ordering algorithms (merge, selection)
//! - `parse` – Integer-sequence parsing for the demo driver
//! - `computation_map` – Inventory of drill modules and their computation kinds
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algo_drills::optimization::subset_sum::subset_sum;
//!
//! let matches = subset_sum(&[4, 32, 2, 35, 67, 3, 53, 5], 39);
//! assert!(matches.contains(&vec![0, 1, 5]));
//! ```

pub mod cli;
pub mod commands;
pub mod computation_map;
pub mod optimization;
pub mod parse;
pub mod sorting;

pub use commands::execute_command;
pub use optimization::subset_sum::subset_sum;
pub use sorting::merge_sort::merge_sort;
pub use sorting::selection_sort::selection_sort;
