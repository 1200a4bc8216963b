/// Select the minimum of the unsorted suffix and swap it into place.
/// Always O(n^2) comparisons, at most n - 1 swaps.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        let mut smallest = i;
        for j in i + 1..arr.len() {
            if arr[j] < arr[smallest] {
                smallest = j;
            }
        }
        if smallest != i {
            arr.swap(i, smallest);
        }
    }
}
