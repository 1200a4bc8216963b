use std::cmp::Ordering;

/// Probe a sorted integer slice at the position the target would occupy
/// if values were spread evenly. O(log log n) on uniform data, O(n)
/// worst case.
pub fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    let mut low = 0usize;
    let mut high = arr.len().checked_sub(1)?;
    while low <= high && target >= arr[low] && target <= arr[high] {
        if arr[low] == arr[high] {
            return (arr[low] == target).then_some(low);
        }
        let span = (high - low) as i128;
        let offset = (target - arr[low]) as i128 * span / (arr[high] - arr[low]) as i128;
        let probe = low + offset as usize;
        match arr[probe].cmp(&target) {
            Ordering::Equal => return Some(probe),
            Ordering::Less => low = probe + 1,
            Ordering::Greater => high = probe.checked_sub(1)?,
        }
    }
    None
}
