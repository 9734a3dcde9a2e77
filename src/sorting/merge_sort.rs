/// Out-of-place recursive merge sort. Ties take from the left run, so equal
/// elements keep their relative order.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mid = input.len() / 2;
    let left = merge_sort(&input[..mid]);
    let right = merge_sort(&input[mid..]);
    merge(&left, &right)
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}
