// Classifier instance ids -> word pairs -> feature overlap report.

use std::path::PathBuf;

use tracing::info;

use super::pairs::{run, OverlapOptions};
use crate::arff::InstanceIndex;
use crate::error::Result;
use crate::overlap::PairOverlap;
use crate::pairs::{parse_pairs, WordPair};
use crate::stemming::traits::Stemmer;

/// Resolve ids against the ARFF annotations, failing on the first unknown id.
pub fn resolve_pairs(index: &InstanceIndex, ids: &[usize]) -> Result<Vec<WordPair>> {
    let annotations = index.resolve_all(ids)?;
    parse_pairs(&annotations)
}

/// Report feature overlap for classifier instances picked by id.
pub fn run_instances(
    index: &InstanceIndex,
    ids: &[usize],
    stemmer: &dyn Stemmer,
    files: &[PathBuf],
    options: OverlapOptions,
) -> Result<Vec<PairOverlap>> {
    let pairs = resolve_pairs(index, ids)?;
    info!(ids = ids.len(), "Resolved classifier instances to word pairs");
    run(&pairs, stemmer, files, options)
}
