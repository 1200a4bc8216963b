pub mod ackermann;
pub mod digital_root;
pub mod error;
pub mod fibonacci;
pub mod gcd;
pub mod primality;

pub use error::NumberTheoryError;
