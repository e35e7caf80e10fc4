// Snowball (Porter2) English stemmer backed by `rust-stemmers`.

use rust_stemmers::{Algorithm, Stemmer as SnowballAlgorithm};

use super::traits::Stemmer;

/// English Snowball stemmer. Input is trimmed and lower-cased first, matching
/// the lower-case stems written by the vector job.
pub struct SnowballStemmer {
    inner: SnowballAlgorithm,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: SnowballAlgorithm::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.trim().to_lowercase();
        self.inner.stem(&lowered).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_plural_and_case() {
        let stemmer = SnowballStemmer::english();
        assert_eq!(stemmer.stem("Foxes"), "fox");
        assert_eq!(stemmer.stem("hospitals"), "hospit");
    }

    #[test]
    fn short_words_unchanged() {
        let stemmer = SnowballStemmer::english();
        assert_eq!(stemmer.stem("fox"), "fox");
        assert_eq!(stemmer.stem("wolf"), "wolf");
    }
}
