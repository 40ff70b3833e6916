//! # Core models for ribonucleotide context counting
//!
//! This crate holds the small, shared vocabulary used by the rest of the workspace:
//! strands, incorporation events, nucleotide helpers and the fixed column order of
//! every context matrix. It has no notion of files beyond a couple of reader helpers.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use errors::*;
pub use models::*;
