//! # Input utilities for incorporation data.
//!
//! Three readers live here. [`PositionReader`] turns the six column position files
//! produced by incorporation mapping pipelines into typed records, and
//! [`FastaScanner`] streams a reference genome one chromosome at a time so that only
//! a single chromosome is ever resident in memory. [`read_context_matrix`] reads back
//! the tab separated matrices the counting engine writes.
//!
pub mod error;
pub mod fasta;
pub mod matrix;
pub mod positions;

// re-expose core functions
pub use error::*;
pub use fasta::*;
pub use matrix::*;
pub use positions::*;
