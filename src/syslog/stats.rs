// Syslog parsing into a statistics table.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;
use tracing::{debug, info};

use super::{BYTE_STATISTICS, FEATURE_COUNTER, LEXEME_COUNTER, RECORD_STATISTICS, STAGES};
use crate::error::{ProbeError, Result};

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("static regex"));
static LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z ]+").expect("static regex"));

/// Which family of statistics a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatisticGroup {
    Records,
    Bytes,
}

impl StatisticGroup {
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            StatisticGroup::Records => &RECORD_STATISTICS,
            StatisticGroup::Bytes => &BYTE_STATISTICS,
        }
    }

    pub fn contains(&self, statistic: &str) -> bool {
        self.names().contains(&statistic)
    }
}

/// One cell of the statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub status: String,
    pub statistic: String,
    pub stage: &'static str,
    pub value: u64,
}

/// Everything scraped from a set of syslog files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobStats {
    /// Entries in first-seen order; a repeated key updates its value in place.
    entries: Vec<StatEntry>,
    /// Last `LEXEME_COUNTER` value seen.
    pub lexeme_counter: Option<u64>,
    /// Last `FEATURE_COUNTER` value seen.
    pub feature_counter: Option<u64>,
}

impl JobStats {
    /// Parse every file in order.
    pub fn load(files: &[PathBuf]) -> Result<Self> {
        let mut stats = Self::default();
        for path in files {
            let file = File::open(path).map_err(|e| ProbeError::io(path, e))?;
            let status = status_from_path(path);
            stats.ingest(BufReader::new(file), &status, path)?;
        }
        info!(
            files = files.len(),
            entries = stats.entries.len(),
            "Loaded job statistics"
        );
        Ok(stats)
    }

    /// Add one syslog's statistics under `status`.
    ///
    /// The stage advances after every full block of tracked statistics, so
    /// the n-th block of counters is attributed to the n-th job.
    pub fn ingest<R: BufRead>(&mut self, reader: R, status: &str, path: &Path) -> Result<()> {
        let tracked = RECORD_STATISTICS.len() + BYTE_STATISTICS.len();
        let mut recorded = 0usize;
        let mut stage_index = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ProbeError::io(path, e))?;
            let trimmed = line.trim();

            if trimmed.starts_with(LEXEME_COUNTER) {
                self.lexeme_counter = Some(first_number(trimmed, path, idx + 1)?);
                continue;
            }
            if trimmed.starts_with(FEATURE_COUNTER) {
                self.feature_counter = Some(first_number(trimmed, path, idx + 1)?);
                continue;
            }

            let is_tracked = RECORD_STATISTICS
                .iter()
                .chain(BYTE_STATISTICS.iter())
                .any(|name| trimmed.starts_with(name));
            if !is_tracked {
                continue;
            }

            let statistic = LABEL
                .find(trimmed)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            let value = first_number(trimmed, path, idx + 1)?;

            self.record(StatEntry {
                status: status.to_string(),
                statistic,
                stage: STAGES[stage_index],
                value,
            });

            recorded += 1;
            if recorded % tracked == 0 {
                stage_index = (stage_index + 1) % STAGES.len();
            }
        }

        debug!(path = %path.display(), status, recorded, "Parsed syslog");
        Ok(())
    }

    fn record(&mut self, entry: StatEntry) {
        let existing = self.entries.iter_mut().find(|e| {
            e.status == entry.status && e.statistic == entry.statistic && e.stage == entry.stage
        });
        match existing {
            Some(e) => e.value = entry.value,
            None => self.entries.push(entry),
        }
    }

    pub fn entries(&self) -> &[StatEntry] {
        &self.entries
    }

    /// Rows for one status and statistic family, in table order.
    pub fn select(&self, status: &str, group: StatisticGroup) -> Vec<&StatEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == status && group.contains(&e.statistic))
            .collect()
    }

    /// Distinct statuses in first-seen order.
    pub fn statuses(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for e in &self.entries {
            if !seen.contains(&e.status.as_str()) {
                seen.push(&e.status);
            }
        }
        seen
    }
}

/// Status label from a syslog file name: the part of the stem after the
/// first `-`, with only its first letter upper-cased.
pub fn status_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let label = stem.split_once('-').map(|(_, rest)| rest).unwrap_or(&stem);
    capitalize(label)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn first_number(line: &str, path: &Path, line_no: usize) -> Result<u64> {
    let m = DIGITS
        .find(line)
        .ok_or_else(|| ProbeError::malformed(path, line_no, format!("no value in '{line}'")))?;
    m.as_str()
        .parse()
        .map_err(|e| ProbeError::malformed(path, line_no, format!("bad value '{}': {e}", m.as_str())))
}
