/// Jump through a sorted slice in sqrt(n) strides, then scan the one
/// block that can hold the target.
pub fn jump_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    let stride = ((n as f64).sqrt().ceil() as usize).max(1);
    let mut block = 0usize;
    while block < n && arr[(block + stride - 1).min(n - 1)] < *target {
        block += stride;
    }
    if block >= n {
        return None;
    }
    let end = (block + stride).min(n);
    arr[block..end]
        .iter()
        .position(|item| item == target)
        .map(|offset| block + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_and_misses() {
        let arr = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
        assert_eq!(jump_search(&arr, &13), Some(7));
        assert_eq!(jump_search(&arr, &0), Some(0));
        assert_eq!(jump_search(&arr, &89), Some(11));
        assert_eq!(jump_search(&arr, &7), None);
        assert_eq!(jump_search(&arr, &100), None);
        assert_eq!(jump_search::<i32>(&[], &1), None);
    }
}
