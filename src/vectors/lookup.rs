// Feature lookup: stem -> set of feature labels.
//
// Built once per run from every vector file, restricted to the stems of the
// word pairs under analysis. After `build_lookup` returns, the lookup is
// read-only; a stem that never appeared reads as an empty set rather than
// being inserted on access.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::record::{parse_record, VectorType};
use crate::error::{ProbeError, Result};

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// Feature labels per stem. Labels are kept sorted so reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureLookup {
    features: HashMap<String, BTreeSet<String>>,
}

impl FeatureLookup {
    /// Labels seen for `stem`; empty if the stem never appeared.
    pub fn features(&self, stem: &str) -> &BTreeSet<String> {
        self.features.get(stem).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.features.contains_key(stem)
    }

    /// Number of stems with at least one recorded line.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    fn add<'a>(&mut self, stem: &str, labels: impl IntoIterator<Item = &'a str>) {
        let entry = self.features.entry(stem.to_string()).or_default();
        entry.extend(labels.into_iter().map(str::to_string));
    }
}

/// Scan every file and collect feature labels for the target stems.
///
/// `vector_type` restricts which vector lines contribute; `None` unions all
/// of them, which is what the original analysis did (the label sets are the
/// same across types, only the weights differ).
pub fn build_lookup(
    targets: &HashSet<String>,
    files: &[PathBuf],
    vector_type: Option<VectorType>,
) -> Result<FeatureLookup> {
    let mut lookup = FeatureLookup::default();

    let pb = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:30}] {pos}/{len} vector files {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    for path in files {
        pb.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        let file = File::open(path).map_err(|e| ProbeError::io(path, e))?;
        ingest(&mut lookup, targets, BufReader::new(file), path, vector_type)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        files = files.len(),
        targets = targets.len(),
        found = lookup.len(),
        "Built feature lookup"
    );
    Ok(lookup)
}

/// Add the matching lines of one vector file to `lookup`.
///
/// `path` is only used for error messages, so tests can feed in-memory readers.
pub fn ingest<R: BufRead>(
    lookup: &mut FeatureLookup,
    targets: &HashSet<String>,
    reader: R,
    path: &Path,
    vector_type: Option<VectorType>,
) -> Result<()> {
    let mut matched = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ProbeError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }

        // Cheap pre-filter: only target lines get fully parsed.
        let stem = line.split('\t').next().unwrap_or_default();
        if !targets.contains(stem) {
            continue;
        }

        let record = parse_record(&line).map_err(|reason| ProbeError::malformed(path, idx + 1, reason))?;
        if let Some(wanted) = vector_type {
            if !record.has_type(wanted) {
                continue;
            }
        }

        lookup.add(record.stem, record.labels);
        matched += 1;
    }

    debug!(path = %path.display(), matched, "Scanned vector file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn labels(lookup: &FeatureLookup, stem: &str) -> Vec<String> {
        lookup.features(stem).iter().cloned().collect()
    }

    #[test]
    fn collects_labels_for_targets_only() {
        let data = "fox\tX\ta:1,b:2\nwolf\tX\tb:3,c:4\ncat\tX\tz:1\n";
        let mut lookup = FeatureLookup::default();
        ingest(
            &mut lookup,
            &targets(&["fox", "wolf"]),
            data.as_bytes(),
            Path::new("mem"),
            None,
        )
        .unwrap();

        assert_eq!(labels(&lookup, "fox"), vec!["a", "b"]);
        assert_eq!(labels(&lookup, "wolf"), vec!["b", "c"]);
        assert!(!lookup.contains("cat"));
        assert_eq!(lookup.len(), 2);
    }

    #[test]
    fn missing_stem_reads_as_empty_without_inserting() {
        let lookup = FeatureLookup::default();
        assert!(lookup.features("ghost").is_empty());
        assert!(!lookup.contains("ghost"));
        assert!(lookup.is_empty());
    }

    #[test]
    fn unions_labels_across_lines() {
        let data = "fox\tPLAIN\ta:1\nfox\tPMI\tb:0.3\n";
        let mut lookup = FeatureLookup::default();
        ingest(&mut lookup, &targets(&["fox"]), data.as_bytes(), Path::new("mem"), None).unwrap();
        assert_eq!(labels(&lookup, "fox"), vec!["a", "b"]);
    }

    #[test]
    fn vector_type_filter_skips_other_types() {
        let data = "fox\tPLAIN\ta:1\nfox\tPMI\tb:0.3\n";
        let mut lookup = FeatureLookup::default();
        ingest(
            &mut lookup,
            &targets(&["fox"]),
            data.as_bytes(),
            Path::new("mem"),
            Some(VectorType::Pmi),
        )
        .unwrap();
        assert_eq!(labels(&lookup, "fox"), vec!["b"]);
    }

    #[test]
    fn malformed_target_line_reports_line_number() {
        let data = "fox\tX\ta:1\n\nfox\tX\tbroken\n";
        let mut lookup = FeatureLookup::default();
        let err = ingest(&mut lookup, &targets(&["fox"]), data.as_bytes(), Path::new("part-0"), None)
            .unwrap_err();
        match err {
            ProbeError::MalformedRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn non_target_lines_are_not_validated() {
        let data = "cat only-one-field\nfox\tX\ta:1\n";
        let mut lookup = FeatureLookup::default();
        ingest(&mut lookup, &targets(&["fox"]), data.as_bytes(), Path::new("mem"), None).unwrap();
        assert_eq!(labels(&lookup, "fox"), vec!["a"]);
    }
}
