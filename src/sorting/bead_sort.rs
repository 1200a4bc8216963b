/// Gravity sort: hang each magnitude as a row of beads across vertical
/// poles, let the beads fall, and read the settled rows back out.
/// Negative values ride the same abacus on their magnitudes and are
/// replayed in reverse. O(n * max) time and O(max) poles, so large
/// magnitudes are impractical by construction.
pub fn bead_sort(arr: &[i64]) -> Vec<i64> {
    let positives: Vec<u64> = arr.iter().filter(|&&n| n > 0).map(|&n| n as u64).collect();
    let negatives: Vec<u64> = arr
        .iter()
        .filter(|&&n| n < 0)
        .map(|&n| n.unsigned_abs())
        .collect();
    let zeros = arr.iter().filter(|&&n| n == 0).count();
    let mut out = Vec::with_capacity(arr.len());
    out.extend(
        drop_beads(&negatives)
            .into_iter()
            .rev()
            .map(|magnitude| (magnitude as i64).wrapping_neg()),
    );
    out.extend(std::iter::repeat(0).take(zeros));
    out.extend(drop_beads(&positives).into_iter().map(|m| m as i64));
    out
}

/// Settle strictly positive values and return them ascending. Pole `i`
/// collects one bead from every value exceeding `i`; after the fall,
/// row `r` from the bottom spans as many poles as the r-th largest
/// value.
fn drop_beads(values: &[u64]) -> Vec<u64> {
    let Some(&tallest) = values.iter().max() else {
        return Vec::new();
    };
    let mut poles = vec![0u64; tallest as usize];
    for &v in values {
        for pole in poles.iter_mut().take(v as usize) {
            *pole += 1;
        }
    }
    let mut rows: Vec<u64> = (0..values.len() as u64)
        .map(|row| poles.iter().filter(|&&height| height > row).count() as u64)
        .collect();
    rows.reverse();
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beads_settle_into_order() {
        assert_eq!(bead_sort(&[7, 3, 9, 1, 5]), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn zeros_and_negatives_partition_around_the_abacus() {
        assert_eq!(bead_sort(&[3, 0, -2, 1, 0, -5]), vec![-5, -2, 0, 0, 1, 3]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(bead_sort(&[]), Vec::<i64>::new());
    }
}
