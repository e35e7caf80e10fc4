// Colored terminal output for overlap reports and job statistics.
//
// main.rs handlers delegate all formatting here so the library functions
// stay free of printing.

use colored::Colorize;

use super::markdown::stats_table;
use super::preview_labels;
use crate::overlap::{DifferencePolicy, PairOverlap};
use crate::syslog::stats::{JobStats, StatisticGroup};

/// Display one group of pair overlaps (e.g. the false positives).
pub fn display_overlap_group(title: &str, report: &[PairOverlap], max_labels: usize) {
    println!("\n{}", format!("=== {title} ({} pairs) ===", report.len()).bold());

    if report.is_empty() {
        println!("  No pairs to report.");
        return;
    }

    let diff_header = match report[0].policy {
        DifferencePolicy::Symmetric => "Differ",
        DifferencePolicy::OneSided => "Only 1st",
    };

    println!(
        "  {:<28} {:<24} {:>6}  {:>8}",
        "Pair".dimmed(),
        "Stems".dimmed(),
        "Common".dimmed(),
        diff_header.dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for entry in report {
        let stems = format!("{} / {}", entry.pair.first_stem, entry.pair.second_stem);
        let common = entry.result.common_count.to_string();
        let common = if entry.result.common_count == 0 {
            common.red()
        } else {
            common.green()
        };

        println!(
            "  {:<28} {:<24} {:>6}  {:>8}",
            entry.pair.pair.raw.bold(),
            stems,
            common,
            entry.result.difference_count,
        );

        if !entry.result.common.is_empty() {
            println!(
                "      Shared: {}",
                preview_labels(&entry.result.common, max_labels).dimmed()
            );
        }
    }
}

/// Display resolved instance ids.
pub fn display_resolved(resolved: &[(usize, String)]) {
    println!("\n{}", "=== ARFF Instances ===".bold());
    for (id, pair) in resolved {
        println!("  {:>6}  {}", id.to_string().cyan(), pair);
    }
}

/// Display counter totals and the record/byte tables for one status.
pub fn display_job_stats(stats: &JobStats, status: &str) {
    println!(
        "Total lexemes read from corpus: {}",
        format_counter(stats.lexeme_counter)
    );
    println!(
        "Total features read from corpus: {}",
        format_counter(stats.feature_counter)
    );

    for (group, title) in [
        (StatisticGroup::Records, format!("Input Output with {status} Statistics")),
        (StatisticGroup::Bytes, format!("Byte Statistics with {status}")),
    ] {
        let rows = stats.select(status, group);
        println!("\n{}", title.bold());
        if rows.is_empty() {
            println!("  {}", "No matching statistics.".yellow());
            continue;
        }
        println!("{}", stats_table(&rows));
    }
}

fn format_counter(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "not reported".dimmed().to_string(),
    }
}
