pub mod invariant;
pub mod subset_sum;
