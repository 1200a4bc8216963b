use thiserror::Error;

/// Domain errors for the arithmetic functions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumberTheoryError {
    #[error("gcd(0, 0) is undefined")]
    UndefinedGcd,
    #[error("lcm is undefined when an argument is 0")]
    UndefinedLcm,
    #[error("lcm({0}, {1}) does not fit in 64 bits")]
    LcmOverflow(u64, u64),
    #[error("{0} is neither prime nor composite")]
    NeitherPrimeNorComposite(u64),
}
