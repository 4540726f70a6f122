//! Static dictionaries backing text processing.

pub mod abbreviations;
pub mod syllables;
