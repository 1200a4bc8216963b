use crate::sorting::insertion_sort::insertion_sort;

/// Distribution sort: spread the elements across `ceil(sqrt(n))`
/// buckets that evenly split the value range, insertion sort each
/// bucket and concatenate. Near O(n) when values are spread evenly,
/// O(n^2) when one bucket swallows everything.
pub fn bucket_sort(arr: &[i64]) -> Vec<i64> {
    let Some(&first) = arr.first() else {
        return Vec::new();
    };
    let (low, high) = arr.iter().fold((first, first), |(low, high), &n| {
        (low.min(n), high.max(n))
    });
    let bucket_count = (arr.len() as f64).sqrt().ceil() as usize;
    // Wide enough that the largest value maps to the last bucket.
    let bucket_width = high.abs_diff(low) / bucket_count as u64 + 1;
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); bucket_count];
    for &n in arr {
        buckets[(n.abs_diff(low) / bucket_width) as usize].push(n);
    }
    let mut out = Vec::with_capacity(arr.len());
    for bucket in &mut buckets {
        insertion_sort(bucket);
        out.append(bucket);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_across_buckets() {
        assert_eq!(
            bucket_sort(&[29, 25, -3, 49, 9, 37, 21, 43]),
            vec![-3, 9, 21, 25, 29, 37, 43, 49]
        );
    }

    #[test]
    fn single_value_runs_collapse_into_one_bucket() {
        assert_eq!(bucket_sort(&[5, 5, 5, 5]), vec![5, 5, 5, 5]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(bucket_sort(&[]), Vec::<i64>::new());
    }
}
