/// Repeated neighbor swaps; exits early once a pass makes no swap.
/// O(n^2) worst case, O(n) on already sorted input.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut unsorted = arr.len();
    loop {
        let mut swapped = false;
        for i in 1..unsorted {
            if arr[i - 1] > arr[i] {
                arr.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
        unsorted -= 1;
    }
}
