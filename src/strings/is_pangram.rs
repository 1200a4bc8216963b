/// True when the text uses every ASCII letter at least once, case
/// insensitively. Digits, punctuation and non-ASCII characters are
/// ignored.
pub fn is_pangram(text: &str) -> bool {
    let mut seen = [false; 26];
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            seen[(c.to_ascii_lowercase() as u8 - b'a') as usize] = true;
        }
    }
    seen.iter().all(|&hit| hit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_a_pangram_regardless_of_case() {
        assert!(is_pangram("The quick brown fox jumps over the lazy dog"));
        assert!(is_pangram("SPHINX OF BLACK QUARTZ, JUDGE MY VOW"));
    }

    #[test]
    fn rejects_text_missing_a_letter() {
        assert!(!is_pangram("The quick brown fox jumps over the lazy cat"));
        assert!(!is_pangram(""));
    }
}
