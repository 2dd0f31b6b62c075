//! Shannon entropy over the printable ASCII alphabet.

/// The 100 printable characters used as the symbol universe: digits, ASCII
/// letters, punctuation, then whitespace. Iteration order is fixed so sums
/// accumulate identically on every run.
pub const PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\u{0b}\u{0c}",
);

/// Shannon entropy (bits) of `data`.
///
/// Probabilities are counts of each [`PRINTABLE`] symbol over the total
/// character count, so characters outside the alphabet dilute the
/// distribution without contributing a term. Empty input has entropy 0.
pub fn shannon_entropy(data: &str) -> f64 {
    let size = data.chars().count();
    if size == 0 {
        return 0.0;
    }

    let mut counts = [0usize; 128];
    for c in data.chars().filter(char::is_ascii) {
        counts[c as usize] += 1;
    }

    let size = size as f64;
    PRINTABLE.bytes().fold(0.0, |entropy, symbol| {
        let p = counts[symbol as usize] as f64 / size;
        if p > 0.0 {
            entropy - p * p.log2()
        } else {
            entropy
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_one_hundred_distinct_symbols() {
        assert_eq!(PRINTABLE.len(), 100);
        let mut seen = std::collections::HashSet::new();
        assert!(PRINTABLE.chars().all(|c| seen.insert(c)));
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn single_symbol_is_zero() {
        assert_eq!(shannon_entropy("a"), 0.0);
        assert_eq!(shannon_entropy("zzzzzzzzzzzzzzzz"), 0.0);
    }

    #[test]
    fn two_equiprobable_symbols_is_one_bit() {
        assert_eq!(shannon_entropy("ab"), 1.0);
        assert_eq!(shannon_entropy("aabb"), 1.0);
    }

    #[test]
    fn order_invariant() {
        assert_eq!(
            shannon_entropy("abc").to_bits(),
            shannon_entropy("cba").to_bits()
        );
        assert_eq!(
            shannon_entropy("login.example.com").to_bits(),
            shannon_entropy("moc.elpmaxe.nigol").to_bits()
        );
    }

    #[test]
    fn non_printable_characters_only_dilute() {
        assert_eq!(shannon_entropy("é"), 0.0);
        assert_eq!(shannon_entropy("aé"), 0.5);
    }

    #[test]
    fn uniform_distribution_is_log2_of_support() {
        let e = shannon_entropy("abcdefgh");
        assert!((e - 3.0).abs() < 1e-12);
    }
}
