use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NucleotideError {
    #[error("Cannot complement symbol '{0}': only A, C, G, T and N are supported")]
    InvalidBase(char),

    #[error("Invalid strand: {0:?}. It must be '+' or '-'")]
    InvalidStrand(String),
}
