/// Split a sorted slice at two probe points per round instead of one.
/// Fewer rounds than binary search, more comparisons per round.
pub fn ternary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut low = 0usize;
    let mut high = arr.len();
    while low < high {
        let third = (high - low) / 3;
        let first = low + third;
        let second = high - 1 - third;
        if arr[first] == *target {
            return Some(first);
        }
        if arr[second] == *target {
            return Some(second);
        }
        if *target < arr[first] {
            high = first;
        } else if *target > arr[second] {
            low = second + 1;
        } else {
            low = first + 1;
            high = second;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_in_every_region() {
        let arr = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        for (i, n) in arr.iter().enumerate() {
            assert_eq!(ternary_search(&arr, n), Some(i));
        }
    }

    #[test]
    fn misses_and_trivial_inputs() {
        assert_eq!(ternary_search(&[1, 3, 5], &4), None);
        assert_eq!(ternary_search::<i32>(&[], &4), None);
        assert_eq!(ternary_search(&[4], &4), Some(0));
    }
}
