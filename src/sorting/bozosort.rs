use rand::Rng;

use crate::sorting::is_sorted::is_sorted;

/// Bogosort's cousin: swap two positions picked at random until the
/// slice happens to be sorted. Expected O(n!) runtime; keep inputs
/// tiny.
pub fn bozosort<T: Ord>(arr: &mut [T]) {
    let mut rng = rand::thread_rng();
    while !is_sorted(arr) {
        let a = rng.gen_range(0..arr.len());
        let b = rng.gen_range(0..arr.len());
        arr.swap(a, b);
    }
}
