/// Scan left to right; first match wins. Works on unsorted input.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|item| item == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_match() {
        assert_eq!(linear_search(&[5, 3, 5, 1], &5), Some(0));
        assert_eq!(linear_search(&[5, 3, 5, 1], &1), Some(3));
        assert_eq!(linear_search(&[5, 3, 5, 1], &2), None);
        assert_eq!(linear_search::<i32>(&[], &2), None);
    }
}
