// Word pairs -> feature overlap report.

use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::overlap::{overlap_report, DifferencePolicy, PairOverlap};
use crate::pairs::{stem_pairs, target_stems, WordPair};
use crate::stemming::traits::Stemmer;
use crate::vectors::lookup::build_lookup;
use crate::vectors::record::VectorType;

/// Options shared by every overlap run.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapOptions {
    pub policy: DifferencePolicy,
    pub vector_type: Option<VectorType>,
}

/// Stem the pairs, build the lookup over `files`, and report each pair.
pub fn run(
    pairs: &[WordPair],
    stemmer: &dyn Stemmer,
    files: &[PathBuf],
    options: OverlapOptions,
) -> Result<Vec<PairOverlap>> {
    let stemmed = stem_pairs(pairs, stemmer);
    let targets = target_stems(&stemmed);

    info!(
        pairs = pairs.len(),
        stems = targets.len(),
        policy = ?options.policy,
        "Computing feature overlap"
    );

    let lookup = build_lookup(&targets, files, options.vector_type)?;
    Ok(overlap_report(&stemmed, &lookup, options.policy))
}

/// Report several named groups of pairs with one shared lookup.
///
/// Groups come back in input order, each with its pairs in input order.
pub fn run_groups(
    groups: &[(String, Vec<WordPair>)],
    stemmer: &dyn Stemmer,
    files: &[PathBuf],
    options: OverlapOptions,
) -> Result<Vec<(String, Vec<PairOverlap>)>> {
    let stemmed: Vec<_> = groups
        .iter()
        .map(|(name, pairs)| (name.clone(), stem_pairs(pairs, stemmer)))
        .collect();

    let all: Vec<_> = stemmed.iter().flat_map(|(_, p)| p.iter().cloned()).collect();
    let lookup = build_lookup(&target_stems(&all), files, options.vector_type)?;

    Ok(stemmed
        .into_iter()
        .map(|(name, pairs)| {
            let report = overlap_report(&pairs, &lookup, options.policy);
            (name, report)
        })
        .collect())
}
