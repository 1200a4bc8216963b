/// Swap the ends if misordered, then recursively sort the first two
/// thirds, the last two thirds, and the first two thirds again. The
/// thirds overlap by rounding the 2/3 cut upward; rounding it down
/// breaks the sort on some inputs. O(n^2.71).
pub fn stooge_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    if len < 2 {
        return;
    }
    if arr[len - 1] < arr[0] {
        arr.swap(0, len - 1);
    }
    if len > 2 {
        let third = len / 3;
        stooge_sort(&mut arr[..len - third]);
        stooge_sort(&mut arr[third..]);
        stooge_sort(&mut arr[..len - third]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_unordered_input() {
        let mut v = vec![2, 4, 5, 3, 1];
        stooge_sort(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn reverse_sorted_input() {
        let mut v: Vec<i32> = (0..10).rev().collect();
        stooge_sort(&mut v);
        assert_eq!(v, (0..10).collect::<Vec<_>>());
    }
}
