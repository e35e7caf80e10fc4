use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Word pairs the classifier wrongly marked as similar.
pub const DEFAULT_FALSE_POSITIVES: [&str; 3] = ["barrel,revolver", "food,stove", "hospital,school"];
/// Word pairs the classifier wrongly marked as dissimilar.
pub const DEFAULT_FALSE_NEGATIVES: [&str; 3] = ["carnivore,lizard", "system,television", "aeroplane,fighter"];

/// ARFF file name written by the classifier input step.
pub const ARFF_FILENAME: &str = "word_pair_similarity.arff";

/// Which stemmer to reduce pair words with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemmerKind {
    /// Snowball English (default)
    Snowball,
    /// Words are already stems
    None,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Everything has a default
/// matching the layout of a pipeline run folder, so a bare `pairprobe overlap`
/// works from inside the analysis directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding run folders (default `..`)
    pub data_root: PathBuf,
    /// Run folder name, e.g. `15-files`
    pub run_folder: String,
    /// Vector output path inside the run folder
    pub vector_subdir: PathBuf,
    /// File name prefix of vector part files
    pub vector_prefix: String,
    pub arff_path: PathBuf,
    pub syslog_dir: PathBuf,
    pub syslog_prefix: String,
    pub false_positives: Vec<String>,
    pub false_negatives: Vec<String>,
    pub stemmer: StemmerKind,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let data_root = env::var("PAIRPROBE_DATA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".."));
        let run_folder = env::var("PAIRPROBE_RUN_FOLDER").unwrap_or_else(|_| "15-files".to_string());

        let arff_path = env::var("PAIRPROBE_ARFF_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_root.join(&run_folder).join("classifier").join(ARFF_FILENAME));

        let stemmer = match env::var("PAIRPROBE_STEMMER").as_deref() {
            Ok("none") | Ok("identity") => StemmerKind::None,
            Ok("snowball") | Err(_) => StemmerKind::Snowball,
            Ok(other) => anyhow::bail!(
                "PAIRPROBE_STEMMER must be 'snowball' or 'none', got '{other}'"
            ),
        };

        Ok(Self {
            data_root,
            run_folder,
            vector_subdir: env::var("PAIRPROBE_VECTOR_SUBDIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("similarity_vectors/output/co-occurrence_vectors")),
            vector_prefix: env::var("PAIRPROBE_VECTOR_PREFIX").unwrap_or_else(|_| "part".to_string()),
            arff_path,
            syslog_dir: env::var("PAIRPROBE_SYSLOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            syslog_prefix: env::var("PAIRPROBE_SYSLOG_PREFIX").unwrap_or_else(|_| "syslog".to_string()),
            false_positives: pair_list("PAIRPROBE_FALSE_POSITIVES", &DEFAULT_FALSE_POSITIVES),
            false_negatives: pair_list("PAIRPROBE_FALSE_NEGATIVES", &DEFAULT_FALSE_NEGATIVES),
            stemmer,
        })
    }

    /// Directory containing the `part*` vector files.
    pub fn vector_dir(&self) -> PathBuf {
        self.data_root.join(&self.run_folder).join(&self.vector_subdir)
    }
}

/// Read a `;`-separated pair list, falling back to `defaults` when unset.
fn pair_list(var: &str, defaults: &[&str]) -> Vec<String> {
    match env::var(var) {
        Ok(value) => split_pair_list(&value),
        Err(_) => defaults.iter().map(|s| s.to_string()).collect(),
    }
}

/// Split `a,b; c,d` into `["a,b", "c,d"]`, dropping empty items.
pub fn split_pair_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
