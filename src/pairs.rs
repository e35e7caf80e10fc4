// Word pairs as they appear in the classifier's gold standard and ARFF
// annotations: two surface words joined by a comma ("barrel,revolver").

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{ProbeError, Result};
use crate::stemming::traits::Stemmer;

/// A word pair in surface form, plus the stems used to query the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordPair {
    /// The pair exactly as given, used as the report key.
    pub raw: String,
    pub first: String,
    pub second: String,
}

/// A pair reduced to vector-file keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StemmedPair {
    pub pair: WordPair,
    pub first_stem: String,
    pub second_stem: String,
}

impl WordPair {
    /// Parse `word1,word2`. Surrounding whitespace and a `<...>` wrapper
    /// are tolerated.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let inner = trimmed
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(trimmed);

        let mut parts = inner.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) if !a.trim().is_empty() && !b.trim().is_empty() => {
                Ok(Self {
                    raw: inner.to_string(),
                    first: a.trim().to_string(),
                    second: b.trim().to_string(),
                })
            }
            _ => Err(ProbeError::MalformedPair {
                input: input.to_string(),
            }),
        }
    }

    pub fn stem_with(&self, stemmer: &dyn Stemmer) -> StemmedPair {
        StemmedPair {
            pair: self.clone(),
            first_stem: stemmer.stem(&self.first),
            second_stem: stemmer.stem(&self.second),
        }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse a list of pair strings, failing on the first malformed one.
pub fn parse_pairs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<WordPair>> {
    inputs.iter().map(|s| WordPair::parse(s.as_ref())).collect()
}

/// Stem every pair with the same stemmer.
pub fn stem_pairs(pairs: &[WordPair], stemmer: &dyn Stemmer) -> Vec<StemmedPair> {
    pairs.iter().map(|p| p.stem_with(stemmer)).collect()
}

/// The set of stems the lookup builder should collect features for.
pub fn target_stems(pairs: &[StemmedPair]) -> HashSet<String> {
    pairs
        .iter()
        .flat_map(|p| [p.first_stem.clone(), p.second_stem.clone()])
        .collect()
}
