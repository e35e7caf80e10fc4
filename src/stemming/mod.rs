// Word stemming: reduces surface forms to the keys used in vector files.

pub mod snowball;
pub mod traits;
