// One line of a co-occurrence vector file.
//
// Shape written by the vector job:
//
//   stem<TAB>VECTOR_TYPE<TAB>label1:weight1,label2:weight2,...
//
// Only the labels matter for overlap analysis; weights are discarded.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Which association measure a vector line carries. The upstream job writes
/// one line per type for every stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum VectorType {
    Plain,
    Relative,
    Pmi,
    #[value(name = "ttest")]
    TTest,
}

impl VectorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VectorType::Plain => "PLAIN",
            VectorType::Relative => "RELATIVE",
            VectorType::Pmi => "PMI",
            VectorType::TTest => "TTEST",
        }
    }
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VectorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PLAIN" => Ok(VectorType::Plain),
            "RELATIVE" => Ok(VectorType::Relative),
            "PMI" => Ok(VectorType::Pmi),
            "TTEST" | "T_TEST" => Ok(VectorType::TTest),
            other => Err(format!("unknown vector type '{other}'")),
        }
    }
}

/// A parsed vector line. Borrowed from the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorRecord<'a> {
    pub stem: &'a str,
    /// Middle field, kept raw so unknown types still parse.
    pub vector_type: &'a str,
    pub labels: Vec<&'a str>,
}

impl VectorRecord<'_> {
    /// True when the record's type field names `wanted`.
    pub fn has_type(&self, wanted: VectorType) -> bool {
        self.vector_type.trim().eq_ignore_ascii_case(wanted.as_str())
    }
}

/// Split a line into its three fields and extract the feature labels.
///
/// Returns a plain reason string on failure; callers attach the file and
/// line number when building `ProbeError::MalformedRecord`.
pub fn parse_record(line: &str) -> Result<VectorRecord<'_>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 3 {
        return Err(format!(
            "expected 3 tab-separated fields, found {}",
            fields.len()
        ));
    }

    let stem = fields[0];
    if stem.is_empty() {
        return Err("empty stem field".to_string());
    }

    let labels = parse_labels(fields[2])?;

    Ok(VectorRecord {
        stem,
        vector_type: fields[1],
        labels,
    })
}

/// Extract labels from a `label:weight,label:weight` list.
///
/// The label is everything before the first colon of each trimmed entry.
pub fn parse_labels(feature_list: &str) -> Result<Vec<&str>, String> {
    feature_list
        .split(',')
        .map(str::trim)
        .map(|entry| match entry.split_once(':') {
            Some((label, _weight)) if !label.is_empty() => Ok(label),
            Some(_) => Err(format!("feature entry '{entry}' has an empty label")),
            None => Err(format!("feature entry '{entry}' has no ':weight' part")),
        })
        .collect()
}
