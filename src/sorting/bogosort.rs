use rand::seq::SliceRandom;

use crate::sorting::is_sorted::is_sorted;

/// Shuffle until sorted. Expected O(n * n!) runtime; keep inputs tiny.
pub fn bogosort<T: Ord>(arr: &mut [T]) {
    let mut rng = rand::thread_rng();
    while !is_sorted(arr) {
        arr.shuffle(&mut rng);
    }
}
