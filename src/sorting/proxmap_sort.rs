/// Proxmap sort: a proximity map computed from hit counts tells every
/// key where its run begins in the output, and keys settle into their
/// runs insertion-style. O(n) when keys spread evenly, O(n^2) when one
/// run swallows everything; the value range must be allocatable.
pub fn proxmap_sort(arr: &[i64]) -> Vec<i64> {
    let Some(&first) = arr.first() else {
        return Vec::new();
    };
    let (low, high) = arr.iter().fold((first, first), |(low, high), &n| {
        (low.min(n), high.max(n))
    });
    let mut hit_counts = vec![0usize; high.abs_diff(low) as usize + 1];
    for &n in arr {
        hit_counts[n.abs_diff(low) as usize] += 1;
    }
    // Running totals become the proximity map: the slot where each
    // key's run starts.
    let mut next_start = 0usize;
    let starts: Vec<usize> = hit_counts
        .iter()
        .map(|&count| {
            let start = next_start;
            next_start += count;
            start
        })
        .collect();
    let mut slots: Vec<Option<i64>> = vec![None; arr.len()];
    for &n in arr {
        let start = starts[n.abs_diff(low) as usize];
        let mut hole = start;
        while slots[hole].is_some() {
            hole += 1;
        }
        // Walk larger occupants up so the run stays ordered as it fills.
        while hole > start {
            match slots[hole - 1] {
                Some(prev) if prev > n => {
                    slots[hole] = Some(prev);
                    hole -= 1;
                }
                _ => break,
            }
        }
        slots[hole] = Some(n);
    }
    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_land_in_their_mapped_runs() {
        assert_eq!(proxmap_sort(&[3, 1, 3, 0, 2]), vec![0, 1, 2, 3, 3]);
        assert_eq!(
            proxmap_sort(&[66, -5, 12, 0, 12, -5]),
            vec![-5, -5, 0, 12, 12, 66]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(proxmap_sort(&[]), Vec::<i64>::new());
    }
}
