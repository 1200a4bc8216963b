use super::error::NumberTheoryError;

/// Greatest common divisor by Euclid's algorithm. Every pair has one
/// except (0, 0).
pub fn gcd(a: u64, b: u64) -> Result<u64, NumberTheoryError> {
    if a == 0 && b == 0 {
        return Err(NumberTheoryError::UndefinedGcd);
    }
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    Ok(a)
}

/// Least common multiple via `a / gcd * b`, undefined when either
/// argument is 0. Errors instead of wrapping when the result does not
/// fit in a `u64`.
pub fn lcm(a: u64, b: u64) -> Result<u64, NumberTheoryError> {
    if a == 0 || b == 0 {
        return Err(NumberTheoryError::UndefinedLcm);
    }
    let divisor = gcd(a, b)?;
    (a / divisor)
        .checked_mul(b)
        .ok_or(NumberTheoryError::LcmOverflow(a, b))
}
