use rand::Rng;

/// Static word list bundled with the binary, standing in for the live NLTK
/// corpus fetch the original implementation used.
const WORDS: &str = include_str!("../assets/words.txt");

/// Samples `n` words with replacement from the bundled lexicon, matching
/// `random.choices(words.words(), k=n_words)` in the original chatbot tool.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<&'static str> {
    let words: Vec<&'static str> = WORDS.lines().filter(|line| !line.is_empty()).collect();
    (0..n)
        .map(|_| words[rng.random_range(0..words.len())])
        .collect()
}

pub fn len() -> usize {
    WORDS.lines().filter(|line| !line.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn lexicon_is_non_empty() {
        assert!(len() > 0);
    }

    #[test]
    fn sample_returns_requested_count() {
        let mut rng = SmallRng::seed_from_u64(42);
        let words = sample(&mut rng, 10);
        assert_eq!(words.len(), 10);
    }

    #[test]
    fn sampled_words_are_ascii() {
        let mut rng = SmallRng::seed_from_u64(7);
        for word in sample(&mut rng, 50) {
            assert!(word.is_ascii());
            assert!(!word.is_empty());
        }
    }
}
