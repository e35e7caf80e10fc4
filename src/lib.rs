// pairprobe: feature-overlap diagnostics for a distributional-semantics pipeline
//
// This is the library root. Vector parsing, lookup building and overlap
// reporting are separate modules so each stage can be tested on its own;
// `pipeline` composes them for the CLI.

pub mod arff;
pub mod config;
pub mod error;
pub mod output;
pub mod overlap;
pub mod pairs;
pub mod pipeline;
pub mod stemming;
pub mod status;
pub mod syslog;
pub mod vectors;
