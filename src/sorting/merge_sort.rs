/// Recursive merge sort. Allocates the output rather than sorting in
/// place; stable, O(n log n).
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let middle = arr.len() / 2;
    let left = merge_sort(&arr[..middle]);
    let right = merge_sort(&arr[middle..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                if l <= r {
                    out.extend(left.next());
                } else {
                    out.extend(right.next());
                }
            }
            (Some(_), None) => out.extend(left.next()),
            (None, Some(_)) => out.extend(right.next()),
            (None, None) => return out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_leaves_input_alone() {
        let v = vec![38, 27, 43, 3, 9, 82, 10];
        let sorted = merge_sort(&v);
        assert_eq!(sorted, vec![3, 9, 10, 27, 38, 43, 82]);
        assert_eq!(v[0], 38);
    }

    #[test]
    fn tolerates_trivial_inputs() {
        assert_eq!(merge_sort::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(merge_sort(&[1]), vec![1]);
    }
}
