// Pairwise feature overlap.
//
// For each word pair we compare the two stems' feature-label sets: the common
// labels, and the labels that differ. Two difference policies exist and are
// kept as separate operations:
//
//   symmetric: labels unique to either word  (A △ B)
//   one-sided: labels of the first word the second lacks  (A \ B)
//
// A large common set on a false negative, or a tiny one on a false positive,
// points at the feature extraction rather than the classifier.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::pairs::StemmedPair;
use crate::vectors::lookup::FeatureLookup;

/// Which set difference to report alongside the common features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DifferencePolicy {
    #[default]
    Symmetric,
    OneSided,
}

/// Overlap between the two words of one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapResult {
    pub common: BTreeSet<String>,
    pub common_count: usize,
    pub difference_count: usize,
}

/// One line of a report: the pair and its overlap.
#[derive(Debug, Clone, Serialize)]
pub struct PairOverlap {
    pub pair: StemmedPair,
    pub policy: DifferencePolicy,
    pub result: OverlapResult,
}

pub fn intersection(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
    a.intersection(b).cloned().collect()
}

pub fn symmetric_difference(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
    a.symmetric_difference(b).cloned().collect()
}

/// Labels in `a` that are not in `b`.
pub fn one_sided_difference(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
    a.difference(b).cloned().collect()
}

/// Overlap of two feature sets under the given policy.
pub fn compare(a: &BTreeSet<String>, b: &BTreeSet<String>, policy: DifferencePolicy) -> OverlapResult {
    let common = intersection(a, b);
    let difference_count = match policy {
        DifferencePolicy::Symmetric => a.symmetric_difference(b).count(),
        DifferencePolicy::OneSided => a.difference(b).count(),
    };
    OverlapResult {
        common_count: common.len(),
        common,
        difference_count,
    }
}

/// Report common features and the symmetric difference for each pair.
pub fn symmetric_overlap(pairs: &[StemmedPair], lookup: &FeatureLookup) -> Vec<PairOverlap> {
    report(pairs, lookup, DifferencePolicy::Symmetric)
}

/// Report common features and the first word's unshared features for each pair.
pub fn directional_overlap(pairs: &[StemmedPair], lookup: &FeatureLookup) -> Vec<PairOverlap> {
    report(pairs, lookup, DifferencePolicy::OneSided)
}

/// Dispatch on a policy chosen at runtime (e.g. from the CLI).
pub fn overlap_report(
    pairs: &[StemmedPair],
    lookup: &FeatureLookup,
    policy: DifferencePolicy,
) -> Vec<PairOverlap> {
    match policy {
        DifferencePolicy::Symmetric => symmetric_overlap(pairs, lookup),
        DifferencePolicy::OneSided => directional_overlap(pairs, lookup),
    }
}

fn report(pairs: &[StemmedPair], lookup: &FeatureLookup, policy: DifferencePolicy) -> Vec<PairOverlap> {
    pairs
        .iter()
        .map(|pair| {
            for stem in [&pair.first_stem, &pair.second_stem] {
                if !lookup.contains(stem) {
                    warn!(pair = %pair.pair, stem = %stem, "Word not found in any vector file; treating as no features");
                }
            }
            let a = lookup.features(&pair.first_stem);
            let b = lookup.features(&pair.second_stem);
            PairOverlap {
                pair: pair.clone(),
                policy,
                result: compare(a, b, policy),
            }
        })
        .collect()
}
