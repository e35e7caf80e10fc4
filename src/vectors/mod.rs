// Co-occurrence vector files: record parsing, file discovery, and the
// stem -> feature-label lookup built from them.

pub mod files;
pub mod lookup;
pub mod record;
