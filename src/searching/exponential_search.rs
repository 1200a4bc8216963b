use crate::searching::binary_search::binary_search;

/// Double a probe bound until it passes the target, then binary-search
/// the last doubled block. Suits unbounded or streamed sorted data.
pub fn exponential_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    if arr[0] == *target {
        return Some(0);
    }
    let mut bound = 1usize;
    while bound < arr.len() && arr[bound] < *target {
        bound *= 2;
    }
    let low = bound / 2;
    let high = arr.len().min(bound + 1);
    binary_search(&arr[low..high], target).map(|offset| low + offset)
}
