/// Single-index sort: step forward while ordered, swap and step back
/// while not. The back-stepping replays an insertion without nested
/// loops.
pub fn gnome_sort<T: Ord>(arr: &mut [T]) {
    let mut i = 0;
    while i < arr.len() {
        if i == 0 || arr[i - 1] <= arr[i] {
            i += 1;
        } else {
            arr.swap(i - 1, i);
            i -= 1;
        }
    }
}
