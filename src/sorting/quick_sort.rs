/// In-place quick sort with a median-of-three pivot, which sidesteps the
/// quadratic blowup on already sorted input that a fixed pivot suffers.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let pivot = partition_around_median(arr);
    let (left, rest) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut rest[1..]);
}

/// Move the median of first/middle/last to the end, partition around it
/// and return its final position.
fn partition_around_median<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    let middle = arr.len() / 2;
    if arr[middle] < arr[0] {
        arr.swap(middle, 0);
    }
    if arr[last] < arr[0] {
        arr.swap(last, 0);
    }
    if arr[middle] < arr[last] {
        arr.swap(middle, last);
    }
    let mut boundary = 0;
    for probe in 0..last {
        if arr[probe] <= arr[last] {
            arr.swap(boundary, probe);
            boundary += 1;
        }
    }
    arr.swap(boundary, last);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_unordered_input() {
        let mut v = vec![10, 7, 8, 9, 1, 5];
        quick_sort(&mut v);
        assert_eq!(v, vec![1, 5, 7, 8, 9, 10]);
    }

    #[test]
    fn sorted_input_stays_fast_and_correct() {
        let mut v: Vec<i32> = (0..200).collect();
        quick_sort(&mut v);
        assert_eq!(v, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_heavy_input() {
        let mut v = vec![2, 1, 2, 1, 2, 1, 2];
        quick_sort(&mut v);
        assert_eq!(v, vec![1, 1, 1, 2, 2, 2, 2]);
    }
}
