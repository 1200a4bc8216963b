use super::error::NumberTheoryError;

/// Trial division over the 6k +/- 1 candidates, after striking out
/// multiples of 2 and 3. Values below 2 are neither prime nor composite.
pub fn primality_test(n: u64) -> Result<bool, NumberTheoryError> {
    if n <= 1 {
        return Err(NumberTheoryError::NeitherPrimeNorComposite(n));
    }
    if n <= 3 {
        return Ok(true);
    }
    if n % 2 == 0 || n % 3 == 0 {
        return Ok(false);
    }
    let mut k = 5u64;
    while k <= n / k {
        if n % k == 0 || n % (k + 2) == 0 {
            return Ok(false);
        }
        k += 6;
    }
    Ok(true)
}

/// Wilson's theorem: n is prime exactly when (n - 1)! mod n == n - 1.
/// The factorial is reduced mod n at every step, so it never overflows.
pub fn wilsons_theorem(n: u64) -> Result<bool, NumberTheoryError> {
    if n <= 1 {
        return Err(NumberTheoryError::NeitherPrimeNorComposite(n));
    }
    let mut factorial = 1u64;
    for k in 2..n {
        factorial = ((factorial as u128 * k as u128) % n as u128) as u64;
    }
    Ok(factorial == n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_values() {
        assert_eq!(primality_test(2), Ok(true));
        assert_eq!(primality_test(3), Ok(true));
        assert_eq!(primality_test(97), Ok(true));
        assert_eq!(primality_test(4), Ok(false));
        assert_eq!(primality_test(100), Ok(false));
        assert_eq!(primality_test(7919), Ok(true));
        assert_eq!(primality_test(25), Ok(false));
    }

    #[test]
    fn rejects_zero_and_one() {
        assert_eq!(
            primality_test(0),
            Err(NumberTheoryError::NeitherPrimeNorComposite(0))
        );
        assert_eq!(
            primality_test(1),
            Err(NumberTheoryError::NeitherPrimeNorComposite(1))
        );
        assert_eq!(
            wilsons_theorem(1),
            Err(NumberTheoryError::NeitherPrimeNorComposite(1))
        );
    }

    #[test]
    fn wilson_agrees_with_trial_division() {
        for n in 2..60u64 {
            assert_eq!(wilsons_theorem(n), primality_test(n), "n = {n}");
        }
    }
}
