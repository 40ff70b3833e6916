use std::io;
use thiserror::Error;

/// Error type for rnmp-io operations.
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error occurred while reading an input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Sequence data appeared before the first FASTA header.
    #[error("FASTA sequence found before any header at line {line}")]
    SequenceBeforeHeader { line: usize },

    /// A FASTA header line carried no chromosome name.
    #[error("Empty FASTA header at line {line}")]
    EmptyHeader { line: usize },

    /// The genome input contained no chromosomes at all.
    #[error("Genome input contains no chromosomes")]
    EmptyGenome,

    /// Position column was not a positive integer.
    #[error("Invalid position {value:?} in {source_name} at line {line}")]
    InvalidPosition {
        source_name: String,
        line: usize,
        value: String,
    },

    /// Strand column was neither `+` nor `-`.
    #[error("Invalid strand {value:?} in {source_name} at line {line}")]
    InvalidStrand {
        source_name: String,
        line: usize,
        value: String,
    },

    /// Weight column was not a finite, non-negative number.
    #[error("Invalid weight {value:?} in {source_name} at line {line}")]
    InvalidWeight {
        source_name: String,
        line: usize,
        value: String,
    },

    /// A context matrix file has no header line.
    #[error("Context matrix {source_name} has no header")]
    MissingHeader { source_name: String },

    /// A context matrix cell is not a number.
    #[error("Invalid count {value:?} in {source_name} at line {line}")]
    InvalidValue {
        source_name: String,
        line: usize,
        value: String,
    },

    /// A context matrix row disagrees with its header.
    #[error("Expected {expected} values in {source_name} at line {line}, found {found}")]
    ColumnMismatch {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for rnmp-io operations.
pub type Result<T> = std::result::Result<T, InputError>;
