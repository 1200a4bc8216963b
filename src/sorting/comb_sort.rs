/// Bubble sort over a shrinking gap (factor 1.3), which moves small
/// elements near the tail to the front far faster than adjacent swaps.
pub fn comb_sort<T: Ord>(arr: &mut [T]) {
    let mut gap = arr.len();
    let mut swapped = true;
    while gap > 1 || swapped {
        gap = (gap * 10 / 13).max(1);
        swapped = false;
        for i in 0..arr.len().saturating_sub(gap) {
            if arr[i] > arr[i + gap] {
                arr.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_shrinking_gap() {
        let mut v = vec![8, 4, 1, 56, 3, -44, 23, -6, 28, 0];
        comb_sort(&mut v);
        assert_eq!(v, vec![-44, -6, 0, 1, 3, 4, 8, 23, 28, 56]);
    }

    #[test]
    fn tolerates_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        comb_sort(&mut empty);
        assert!(empty.is_empty());
    }
}
