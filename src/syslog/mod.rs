// Map-reduce job statistics scraped from syslog dumps.
//
// Each syslog file holds the counter dumps of the four pipeline jobs, in job
// order, for one run configuration (the "status", taken from the file name:
// `syslog-10files` -> "10files"). We pull the record and byte statistics into
// a (status, statistic, stage) -> value table, plus the two custom counters
// the parse job maintains.

pub mod stats;

/// Pipeline jobs in the order their counters appear in a syslog.
pub const STAGES: [&str; 4] = [
    "Parse Syntactic Dependencies",
    "Order And Count Lexeme Feature",
    "Calculate Measures Of Association With Context",
    "Calculate Measures Of Vector Similarity",
];

/// Record-count statistics, as named in the Hadoop counter dump.
pub const RECORD_STATISTICS: [&str; 6] = [
    "Map input records",
    "Map output records",
    "Combine input records",
    "Combine output records",
    "Reduce input records",
    "Reduce output records",
];

/// Byte-count statistics.
pub const BYTE_STATISTICS: [&str; 4] = [
    "Map output bytes",
    "Reduce shuffle bytes",
    "Bytes Read",
    "Bytes Written",
];

pub const LEXEME_COUNTER: &str = "LEXEME_COUNTER";
pub const FEATURE_COUNTER: &str = "FEATURE_COUNTER";
