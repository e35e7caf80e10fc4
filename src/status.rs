// Input status display: shows resolved paths and which inputs are present.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::arff::InstanceIndex;
use crate::config::{Config, StemmerKind};
use crate::error::ProbeError;
use crate::vectors::files::find_files;

/// Display configuration and input availability to the terminal.
pub fn show(config: &Config) {
    println!("{}", "=== pairprobe status ===".bold());

    let stemmer = match config.stemmer {
        StemmerKind::Snowball => "snowball (english)",
        StemmerKind::None => "none (pre-stemmed input)",
    };
    println!("Stemmer: {stemmer}");

    // Vector files
    let vector_dir = config.vector_dir();
    match find_files(&vector_dir, &config.vector_prefix) {
        Ok(files) => println!(
            "Vector files: {} in {} ({})",
            files.len(),
            vector_dir.display(),
            format_bytes(total_size(&files))
        ),
        Err(e) => println!("Vector files: {} ({e})", "missing".red()),
    }

    // ARFF annotations
    match InstanceIndex::from_path(&config.arff_path) {
        Ok(index) => println!(
            "ARFF instances: {} in {}",
            index.len(),
            config.arff_path.display()
        ),
        Err(ProbeError::FileNotFound { .. }) => println!(
            "ARFF instances: {} ({} not found)",
            "missing".red(),
            config.arff_path.display()
        ),
        Err(e) => println!("ARFF instances: {} ({e})", "unreadable".red()),
    }

    // Syslogs
    match find_files(&config.syslog_dir, &config.syslog_prefix) {
        Ok(files) => println!(
            "Syslog files: {} in {}",
            files.len(),
            display_dir(&config.syslog_dir)
        ),
        Err(_) => println!(
            "Syslog files: none matching '{}*' in {}",
            config.syslog_prefix,
            display_dir(&config.syslog_dir)
        ),
    }

    println!(
        "Diagnostic pairs: {} false positives, {} false negatives",
        config.false_positives.len(),
        config.false_negatives.len()
    );
}

fn total_size(files: &[PathBuf]) -> u64 {
    files
        .iter()
        .filter_map(|f| std::fs::metadata(f).ok())
        .map(|m| m.len())
        .sum()
}

fn display_dir(dir: &Path) -> String {
    dir.canonicalize()
        .unwrap_or_else(|_| dir.to_path_buf())
        .display()
        .to_string()
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
