/// Counting sort's sibling: one hole per value in the range, each
/// element dropped into its hole, holes drained in order. Where
/// counting sort tallies occurrences, the holes here keep the elements
/// themselves. O(n + k) where k is the range width, which must be
/// allocatable.
pub fn pigeonhole_sort(arr: &[i64]) -> Vec<i64> {
    let Some(&first) = arr.first() else {
        return Vec::new();
    };
    let (low, high) = arr.iter().fold((first, first), |(low, high), &n| {
        (low.min(n), high.max(n))
    });
    let mut holes: Vec<Vec<i64>> = vec![Vec::new(); high.abs_diff(low) as usize + 1];
    for &n in arr {
        holes[n.abs_diff(low) as usize].push(n);
    }
    holes.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_negative_values() {
        assert_eq!(
            pigeonhole_sort(&[8, 3, 2, 7, 4, 6, 8, -1]),
            vec![-1, 2, 3, 4, 6, 7, 8, 8]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(pigeonhole_sort(&[]), Vec::<i64>::new());
    }
}
