//! # Ribonucleotide context counting
//!
//! Given one or more libraries of ribonucleotide incorporation sites and a reference
//! genome, count the sequence context around every site at mono-, di- and
//! trinucleotide resolution, per library and per chromosome.
//!
//! The genome is streamed exactly once. As each chromosome finishes loading, the
//! events registered on it are resolved into strand-corrected k-mers, added into the
//! [`ContextTable`], and then dropped together with the sequence.
//!
//! ```no_run
//! use rnmp_context::{ContextConfig, count_contexts};
//!
//! let config = ContextConfig {
//!     dinuc: true,
//!     dinuc_distances: vec![1, 2],
//!     output_basename: "out/run1".to_string(),
//!     ..Default::default()
//! };
//!
//! let summary = count_contexts("genome.fa", &["wt.bed", "rnh201.bed"], &config).unwrap();
//! println!("wrote {} files", summary.files.len());
//! ```
//!
pub mod config;
pub mod consts;
pub mod errors;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod select;
pub mod table;

// re-exports
pub use config::*;
pub use errors::*;
pub use extract::*;
pub use output::*;
pub use pipeline::*;
pub use registry::*;
pub use select::*;
pub use table::*;
