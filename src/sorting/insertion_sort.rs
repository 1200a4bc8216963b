/// Grow a sorted prefix one element at a time, sinking each new element
/// to its place by adjacent swaps. Stable; O(n^2) worst case.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
