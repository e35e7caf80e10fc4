// Pipelines: compose parsing, lookup building and overlap reporting.
//
// Each entry point builds the feature lookup exactly once over all vector
// files, then queries it per pair.

pub mod instances;
pub mod pairs;
