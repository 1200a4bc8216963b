/// Least-significant-digit radix sort over base-10 buckets. Negative
/// values are sorted by magnitude and replayed in reverse ahead of the
/// rest. O(n * d) where d is the digit count of the widest value.
pub fn radix_sort(arr: &[i64]) -> Vec<i64> {
    let negatives: Vec<u64> = arr
        .iter()
        .filter(|&&n| n < 0)
        .map(|&n| n.unsigned_abs())
        .collect();
    let rest: Vec<u64> = arr.iter().filter(|&&n| n >= 0).map(|&n| n as u64).collect();
    let mut out = Vec::with_capacity(arr.len());
    out.extend(
        sort_by_digit(negatives)
            .into_iter()
            .rev()
            .map(|magnitude| (magnitude as i64).wrapping_neg()),
    );
    out.extend(sort_by_digit(rest).into_iter().map(|m| m as i64));
    out
}

fn sort_by_digit(mut values: Vec<u64>) -> Vec<u64> {
    let Some(&widest) = values.iter().max() else {
        return values;
    };
    let mut divisor = 1u64;
    loop {
        let mut buckets: Vec<Vec<u64>> = vec![Vec::new(); 10];
        for &v in &values {
            buckets[(v / divisor % 10) as usize].push(v);
        }
        values = buckets.into_iter().flatten().collect();
        if widest / divisor < 10 {
            return values;
        }
        divisor *= 10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_increasing_digit_position() {
        assert_eq!(
            radix_sort(&[170, 45, 75, 90, 2, 802, 24, 66]),
            vec![2, 24, 45, 66, 75, 90, 170, 802]
        );
    }

    #[test]
    fn negative_values_come_first() {
        assert_eq!(radix_sort(&[-5, 100, -200, 0, 3]), vec![-200, -5, 0, 3, 100]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(radix_sort(&[]), Vec::<i64>::new());
    }
}
