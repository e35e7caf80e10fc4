// Input file discovery.
//
// The map-reduce jobs write their output as `part-r-00000`, `part-r-00001`,
// ... and the syslogs as `syslog-<status>`, so a name-prefix match inside one
// directory is all the discovery we need.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ProbeError, Result};

/// List regular files in `dir` whose name starts with `prefix`, sorted by name.
///
/// Zero matches is an error: silently iterating over nothing would report
/// every word as unseen.
pub fn find_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ProbeError::FileNotFound {
            dir: dir.to_path_buf(),
            pattern: prefix.to_string(),
        },
        _ => ProbeError::io(dir, e),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ProbeError::io(dir, e))?;
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(prefix));
        if matches && path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(ProbeError::FileNotFound {
            dir: dir.to_path_buf(),
            pattern: prefix.to_string(),
        });
    }

    files.sort();
    debug!(dir = %dir.display(), prefix, count = files.len(), "Discovered input files");
    Ok(files)
}
