/// Multiply-and-surrender: recursively sort each half so the half
/// maxima surface, move the larger of the two to the end, then sort
/// everything before it. Deliberately pessimal; keep inputs small.
pub fn slowsort<T: Ord>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let end = arr.len() - 1;
    let center = end / 2;
    slowsort(&mut arr[..=center]);
    slowsort(&mut arr[center + 1..]);
    if arr[end] < arr[center] {
        arr.swap(center, end);
    }
    slowsort(&mut arr[..end]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_unordered_input() {
        let mut v = vec![9, -3, 5, 0, 5, 2];
        slowsort(&mut v);
        assert_eq!(v, vec![-3, 0, 2, 5, 5, 9]);
    }

    #[test]
    fn tolerates_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        slowsort(&mut empty);
        assert!(empty.is_empty());
        let mut single = vec![4];
        slowsort(&mut single);
        assert_eq!(single, vec![4]);
    }
}
