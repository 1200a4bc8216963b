use crate::sorting::bubble_sort::bubble_sort;

/// The pessimal sort. Depth 0 is plain bubble sort; depth `k` builds
/// every permutation of the input, bubble sorts that factorial-sized
/// list lexicographically, and hands its first entry to depth `k - 1`.
/// Factorial time and space; strictly a curiosity.
pub fn worstsort<T: Ord + Clone>(arr: &[T], depth: usize) -> Vec<T> {
    if depth == 0 {
        let mut out = arr.to_vec();
        bubble_sort(&mut out);
        return out;
    }
    let mut perms = permutations(arr);
    bubble_sort(&mut perms);
    match perms.into_iter().next() {
        Some(smallest) => worstsort(&smallest, depth - 1),
        None => Vec::new(),
    }
}

/// All orderings of `items`, by Heap's algorithm.
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn step<T: Clone>(k: usize, work: &mut [T], out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(work.to_vec());
            return;
        }
        for i in 0..k {
            step(k - 1, work, out);
            if i < k - 1 {
                if k % 2 == 0 {
                    work.swap(i, k - 1);
                } else {
                    work.swap(0, k - 1);
                }
            }
        }
    }

    let mut work = items.to_vec();
    let mut out = Vec::new();
    step(work.len(), &mut work, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_bubble_sort() {
        assert_eq!(worstsort(&[2, 1], 0), vec![1, 2]);
        assert_eq!(worstsort::<i32>(&[], 0), Vec::<i32>::new());
    }

    #[test]
    fn positive_depth_sorts_through_permutations() {
        assert_eq!(worstsort(&[3, 1, 2], 1), vec![1, 2, 3]);
        assert_eq!(worstsort(&[4, 2, 3, 1], 2), vec![1, 2, 3, 4]);
    }

    #[test]
    fn permutation_count_is_factorial() {
        assert_eq!(permutations(&[1, 2, 3]).len(), 6);
        assert_eq!(permutations::<i32>(&[]).len(), 1);
    }
}
