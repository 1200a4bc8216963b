use crate::sorting::bogosort::bogosort;

/// Bogosort applied recursively: settle the first `n - 1` elements,
/// then bogosort the whole slice with the last element joined in.
/// Designed not to finish before the heat death of the universe on any
/// sizable input; keep inputs tiny.
pub fn bogobogosort<T: Ord>(arr: &mut [T]) {
    if arr.len() > 1 {
        let split = arr.len() - 1;
        bogobogosort(&mut arr[..split]);
    }
    bogosort(arr);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eventually_sorts_a_tiny_slice() {
        let mut v = vec![3, 1, 2, 0];
        bogobogosort(&mut v);
        assert_eq!(v, vec![0, 1, 2, 3]);
    }

    #[test]
    fn trivial_inputs_come_back_unchanged() {
        let mut empty: Vec<i32> = vec![];
        bogobogosort(&mut empty);
        assert!(empty.is_empty());
        let mut single = vec![8];
        bogobogosort(&mut single);
        assert_eq!(single, vec![8]);
    }
}
