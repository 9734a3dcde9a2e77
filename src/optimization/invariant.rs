/// Invariant trait for search and enumeration checks
pub trait Invariant<T> {
    /// Checks if a value satisfies the invariant
    fn check(&self, value: &T) -> bool;
}

/// Non-negative invariant for integers
pub struct NonNegative;

impl Invariant<i64> for NonNegative {
    fn check(&self, value: &i64) -> bool {
        *value >= 0
    }
}

/// A path of indices must select elements of `values` summing to `target`
pub struct SumsTo<'a> {
    pub values: &'a [i64],
    pub target: i64,
}

impl Invariant<Vec<usize>> for SumsTo<'_> {
    fn check(&self, path: &Vec<usize>) -> bool {
        let mut total = 0i64;
        for &index in path {
            match self.values.get(index) {
                Some(value) => total += value,
                None => return false,
            }
        }
        total == self.target
    }
}
