// Stemmer trait: swap-ready abstraction.
//
// The vector files are keyed by whatever stemmer the upstream job used, so
// the algorithm has to be replaceable without touching the lookup or overlap
// code. The default is Snowball English; `IdentityStemmer` covers inputs that
// are already stemmed.

/// Reduce a surface word to its lookup key.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

/// Passes words through unchanged apart from trimming and lower-casing.
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.trim().to_lowercase()
    }
}
