/// Bubble sort split into alternating phases: compare pairs anchored at
/// odd indices, then at even ones, until a full cycle swaps nothing.
/// O(n^2); the phase structure is what makes it parallelizable.
pub fn odd_even_sort<T: Ord>(arr: &mut [T]) {
    let mut swapped = true;
    while swapped {
        swapped = false;
        for phase in [1, 0] {
            for i in (phase..arr.len().saturating_sub(1)).step_by(2) {
                if arr[i] > arr[i + 1] {
                    arr.swap(i, i + 1);
                    swapped = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_unordered_input() {
        let mut v = vec![34, 2, 10, -9, 7, 0];
        odd_even_sort(&mut v);
        assert_eq!(v, vec![-9, 0, 2, 7, 10, 34]);
    }

    #[test]
    fn tolerates_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        odd_even_sort(&mut empty);
        assert!(empty.is_empty());
        let mut pair = vec![2, 1];
        odd_even_sort(&mut pair);
        assert_eq!(pair, vec![1, 2]);
    }
}
