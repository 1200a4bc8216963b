/// Distribution sort for integer keys: tally occurrences over the value
/// range, then replay them in order. O(n + k) where k is the range width.
pub fn counting_sort(arr: &[i64]) -> Vec<i64> {
    let Some(&first) = arr.first() else {
        return Vec::new();
    };
    let (low, high) = arr.iter().fold((first, first), |(low, high), &n| {
        (low.min(n), high.max(n))
    });
    let mut tally = vec![0usize; (high - low) as usize + 1];
    for &n in arr {
        tally[(n - low) as usize] += 1;
    }
    let mut out = Vec::with_capacity(arr.len());
    for (offset, &count) in tally.iter().enumerate() {
        out.extend(std::iter::repeat(low + offset as i64).take(count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_negative_values() {
        assert_eq!(
            counting_sort(&[4, -2, 10, -2, 0, 4]),
            vec![-2, -2, 0, 4, 4, 10]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(counting_sort(&[]), Vec::<i64>::new());
    }
}
