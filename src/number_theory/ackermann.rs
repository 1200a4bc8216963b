/// The Ackermann-Peter function. Total but not primitive recursive; it
/// grows so fast that only m <= 3 with small n is practical to evaluate.
pub fn ackermann_peter(m: u64, n: u64) -> u64 {
    match (m, n) {
        (0, n) => n + 1,
        (m, 0) => ackermann_peter(m - 1, 1),
        (m, n) => ackermann_peter(m - 1, ackermann_peter(m, n - 1)),
    }
}
