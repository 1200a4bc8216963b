/// Bidirectional bubble sort: a forward pass carries the largest element
/// right, the return pass carries the smallest left.
pub fn cocktail_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let mut low = 0;
    let mut high = arr.len() - 1;
    loop {
        let mut swapped = false;
        for i in low..high {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
        high -= 1;
        swapped = false;
        for i in (low..high).rev() {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
        low += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_both_directions() {
        let mut v = vec![5, 1, 4, 2, 8, 0, 2];
        cocktail_sort(&mut v);
        assert_eq!(v, vec![0, 1, 2, 2, 4, 5, 8]);
    }

    #[test]
    fn reverse_sorted_input() {
        let mut v: Vec<i32> = (0..20).rev().collect();
        cocktail_sort(&mut v);
        assert_eq!(v, (0..20).collect::<Vec<_>>());
    }
}
