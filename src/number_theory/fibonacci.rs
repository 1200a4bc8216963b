/// The n-th Fibonacci number, 0-indexed: 0, 1, 1, 2, 3, 5, ...
/// `u128` holds the sequence up to n = 186.
pub fn fibonacci(n: usize) -> u128 {
    fibonacci_from(n, 0, 1)
}

/// The n-th element of a Fibonacci-style recurrence with custom seeds,
/// e.g. seeds (2, 1) give the Lucas numbers.
pub fn fibonacci_from(n: usize, first: u128, second: u128) -> u128 {
    let (mut a, mut b) = (first, second);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(50), 12_586_269_025);
    }

    #[test]
    fn custom_seeds_follow_the_recurrence() {
        let lucas: Vec<u128> = (0..8).map(|n| fibonacci_from(n, 2, 1)).collect();
        assert_eq!(lucas, vec![2, 1, 3, 4, 7, 11, 18, 29]);
    }
}
