use std::cmp::Ordering;

/// Halve a sorted slice until the target is cornered. The input must be
/// sorted ascending; that precondition is not re-checked here.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut low = 0usize;
    let mut high = arr.len();
    while low < high {
        let middle = low + (high - low) / 2;
        match arr[middle].cmp(target) {
            Ordering::Equal => return Some(middle),
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
        }
    }
    None
}
