// Classifier instance ids from the ARFF input file.
//
// The ARFF writer puts a comment line `% <word1,word2>` above every data row,
// so the n-th such annotation (counting from 1) names the word pair of
// instance n in the classifier's prediction output. Header comments such as
// `% Plain frequency measures` have no angle brackets and are not instances.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{ProbeError, Result};

/// Instance annotations in file order. Index 0 holds instance id 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceIndex {
    annotations: Vec<String>,
}

impl InstanceIndex {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ProbeError::FileNotFound {
                dir: path.parent().unwrap_or(Path::new(".")).to_path_buf(),
                pattern: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            },
            _ => ProbeError::io(path, e),
        })?;
        let index = Self::parse(BufReader::new(file), path)?;
        info!(path = %path.display(), instances = index.len(), "Indexed ARFF instances");
        Ok(index)
    }

    pub fn parse<R: BufRead>(reader: R, path: &Path) -> Result<Self> {
        let mut annotations = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| ProbeError::io(path, e))?;
            if let Some(text) = annotation(&line) {
                annotations.push(text.to_string());
            }
        }
        Ok(Self { annotations })
    }

    /// The annotation text for a 1-based instance id.
    pub fn resolve(&self, id: usize) -> Result<&str> {
        id.checked_sub(1)
            .and_then(|i| self.annotations.get(i))
            .map(String::as_str)
            .ok_or(ProbeError::UnknownInstanceId {
                id,
                max: self.annotations.len(),
            })
    }

    pub fn resolve_all(&self, ids: &[usize]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| self.resolve(id).map(str::to_string))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Text between the brackets of a `% <...>` line, if it is one.
fn annotation(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix('%')?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
}
