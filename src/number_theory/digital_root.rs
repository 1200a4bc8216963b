/// Digit sum applied until one digit remains, computed in closed form:
/// a positive n collapses to 1 + (n - 1) mod 9.
pub fn digital_root(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        1 + (n - 1) % 9
    }
}
