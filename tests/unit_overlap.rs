// Unit tests for overlap reporting against an in-memory lookup.
//
// Covers the set-relation properties of the two difference policies and
// the unknown-word path, without touching the filesystem.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use pairprobe::overlap::{
    compare, directional_overlap, intersection, one_sided_difference, overlap_report,
    symmetric_difference, symmetric_overlap, DifferencePolicy,
};
use pairprobe::pairs::{parse_pairs, stem_pairs, target_stems};
use pairprobe::stemming::traits::IdentityStemmer;
use pairprobe::vectors::lookup::{ingest, FeatureLookup};

fn set(labels: &[&str]) -> BTreeSet<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

fn lookup_from(data: &str, stems: &[&str]) -> FeatureLookup {
    let targets: HashSet<String> = stems.iter().map(|s| s.to_string()).collect();
    let mut lookup = FeatureLookup::default();
    ingest(&mut lookup, &targets, data.as_bytes(), Path::new("mem"), None).unwrap();
    lookup
}

// ============================================================
// Set relations
// ============================================================

#[test]
fn disjoint_intersection_empty_and_one_sided_is_identity() {
    let a = set(&["x/nsubj", "y/dobj"]);
    let b = set(&["z/amod"]);
    assert!(intersection(&a, &b).is_empty());
    assert_eq!(one_sided_difference(&a, &b), a);
}

#[test]
fn equal_sets_intersect_fully_and_have_no_symmetric_difference() {
    let a = set(&["x/nsubj", "y/dobj", "z/amod"]);
    assert_eq!(intersection(&a, &a), a);
    assert!(symmetric_difference(&a, &a).is_empty());
}

#[test]
fn symmetric_difference_is_commutative() {
    let a = set(&["a", "b", "c"]);
    let b = set(&["c", "d"]);
    assert_eq!(symmetric_difference(&a, &b), symmetric_difference(&b, &a));
}

#[test]
fn compare_common_count_matches_common_set() {
    let a = set(&["a", "b", "c"]);
    let b = set(&["b", "c", "d"]);
    for policy in [DifferencePolicy::Symmetric, DifferencePolicy::OneSided] {
        let r = compare(&a, &b, policy);
        assert_eq!(r.common_count, r.common.len());
    }
}

// ============================================================
// Reports over a lookup
// ============================================================

#[test]
fn fox_wolf_example() {
    let lookup = lookup_from("fox\tX\ta:1,b:2\nwolf\tX\tb:3,c:4\n", &["fox", "wolf"]);
    assert_eq!(lookup.features("fox"), &set(&["a", "b"]));
    assert_eq!(lookup.features("wolf"), &set(&["b", "c"]));

    let pairs = stem_pairs(&parse_pairs(&["fox,wolf"]).unwrap(), &IdentityStemmer);
    let report = symmetric_overlap(&pairs, &lookup);
    assert_eq!(report[0].result.common, set(&["b"]));
    assert_eq!(report[0].result.common_count, 1);
    assert_eq!(report[0].result.difference_count, 2);
}

#[test]
fn directional_report_differs_by_order() {
    let lookup = lookup_from("fox\tX\ta:1,b:2\nwolf\tX\tb:3,c:4,d:1\n", &["fox", "wolf"]);
    let pairs = stem_pairs(&parse_pairs(&["fox,wolf", "wolf,fox"]).unwrap(), &IdentityStemmer);
    let report = directional_overlap(&pairs, &lookup);
    assert_eq!(report[0].result.difference_count, 1);
    assert_eq!(report[1].result.difference_count, 2);
    assert!(report.iter().all(|r| r.policy == DifferencePolicy::OneSided));
}

#[test]
fn dispatch_matches_named_functions() {
    let lookup = lookup_from("fox\tX\ta:1,b:2\nwolf\tX\tb:3,c:4\n", &["fox", "wolf"]);
    let pairs = stem_pairs(&parse_pairs(&["fox,wolf"]).unwrap(), &IdentityStemmer);

    let sym = overlap_report(&pairs, &lookup, DifferencePolicy::Symmetric);
    let dir = overlap_report(&pairs, &lookup, DifferencePolicy::OneSided);
    assert_eq!(sym[0].result, symmetric_overlap(&pairs, &lookup)[0].result);
    assert_eq!(dir[0].result, directional_overlap(&pairs, &lookup)[0].result);
}

#[test]
fn unseen_words_report_zero_common() {
    let lookup = lookup_from("fox\tX\ta:1\n", &["fox", "griffin"]);
    let pairs = stem_pairs(&parse_pairs(&["griffin,fox", "griffin,griffin"]).unwrap(), &IdentityStemmer);
    let report = symmetric_overlap(&pairs, &lookup);

    assert_eq!(report[0].result.common_count, 0);
    assert_eq!(report[0].result.difference_count, 1);
    assert_eq!(report[1].result.common_count, 0);
    assert_eq!(report[1].result.difference_count, 0);
    // Reading an unseen stem never inserts it.
    assert!(!lookup.contains("griffin"));
}

#[test]
fn report_preserves_pair_order() {
    let lookup = FeatureLookup::default();
    let pairs = stem_pairs(
        &parse_pairs(&["food,stove", "barrel,revolver", "hospital,school"]).unwrap(),
        &IdentityStemmer,
    );
    assert_eq!(target_stems(&pairs).len(), 6);
    let raws: Vec<String> = symmetric_overlap(&pairs, &lookup)
        .into_iter()
        .map(|o| o.pair.pair.raw)
        .collect();
    assert_eq!(raws, vec!["food,stove", "barrel,revolver", "hospital,school"]);
}
