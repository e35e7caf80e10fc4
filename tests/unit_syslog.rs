// Unit tests for syslog statistic extraction.
//
// Tests stage attribution across counter blocks, status labelling from file
// names, and per-status table selection.

use std::fs;

use pairprobe::output::markdown::stats_table;
use pairprobe::syslog::stats::{JobStats, StatisticGroup};
use pairprobe::syslog::{BYTE_STATISTICS, RECORD_STATISTICS, STAGES};
use pairprobe::vectors::files::find_files;

/// One job's counter dump with every tracked statistic set to `base + i`.
fn job_block(base: u64) -> String {
    let mut out = String::from("INFO mapreduce.Job: Counters: 49\n\tFile System Counters\n");
    for (i, name) in RECORD_STATISTICS.iter().chain(BYTE_STATISTICS.iter()).enumerate() {
        out.push_str(&format!("\t\t{name}={}\n", base + i as u64));
    }
    out
}

fn full_syslog() -> String {
    let mut log = String::new();
    log.push_str("\t\tLEXEME_COUNTER=1200\n\t\tFEATURE_COUNTER=98000\n");
    for job in 0..STAGES.len() {
        log.push_str(&job_block((job as u64 + 1) * 100));
    }
    log
}

#[test]
fn blocks_are_attributed_to_stages_in_order() {
    let mut stats = JobStats::default();
    stats
        .ingest(full_syslog().as_bytes(), "10files", std::path::Path::new("mem"))
        .unwrap();

    assert_eq!(stats.entries().len(), STAGES.len() * 10);
    for (job, stage) in STAGES.iter().enumerate() {
        let first = stats
            .entries()
            .iter()
            .find(|e| e.stage == *stage && e.statistic == "Map input records")
            .unwrap();
        assert_eq!(first.value, (job as u64 + 1) * 100);
    }
    assert_eq!(stats.lexeme_counter, Some(1200));
    assert_eq!(stats.feature_counter, Some(98000));
}

#[test]
fn select_filters_by_status_and_group() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("syslog-10files"), full_syslog()).unwrap();
    fs::write(dir.path().join("syslog-no_combiner.log"), job_block(7)).unwrap();
    fs::write(dir.path().join("notes.txt"), "Map input records=1\n").unwrap();

    let files = find_files(dir.path(), "syslog").unwrap();
    assert_eq!(files.len(), 2);
    let stats = JobStats::load(&files).unwrap();

    assert_eq!(stats.statuses(), vec!["10files", "No_combiner"]);

    let records = stats.select("10files", StatisticGroup::Records);
    assert_eq!(records.len(), RECORD_STATISTICS.len() * STAGES.len());
    assert!(records.iter().all(|e| RECORD_STATISTICS.contains(&e.statistic.as_str())));

    let bytes = stats.select("No_combiner", StatisticGroup::Bytes);
    assert_eq!(bytes.len(), BYTE_STATISTICS.len());
    assert!(bytes.iter().all(|e| e.stage == STAGES[0]));
    let bytes_read = bytes.iter().find(|e| e.statistic == "Bytes Read").unwrap();
    assert_eq!(bytes_read.value, 7 + 8);
}

#[test]
fn repeated_statistic_updates_in_place() {
    let log = "\t\tMap input records=5\n\t\tMap input records=9\n";
    let mut stats = JobStats::default();
    stats.ingest(log.as_bytes(), "Run", std::path::Path::new("mem")).unwrap();
    assert_eq!(stats.entries().len(), 1);
    assert_eq!(stats.entries()[0].value, 9);
}

#[test]
fn table_lists_selected_rows() {
    let mut stats = JobStats::default();
    stats.ingest(job_block(1).as_bytes(), "Run", std::path::Path::new("mem")).unwrap();
    let rows = stats.select("Run", StatisticGroup::Bytes);
    let table = stats_table(&rows);
    assert_eq!(table.lines().count(), 2 + BYTE_STATISTICS.len());
    assert!(table.contains("Reduce shuffle bytes"));
    assert!(!table.contains("Map input records"));
}
