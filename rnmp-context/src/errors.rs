use thiserror::Error;

use rnmp_io::InputError;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Reader(#[from] anyhow::Error),

    #[error(transparent)]
    Progress(#[from] indicatif::style::TemplateError),

    #[error("No position files were supplied")]
    NoLibraries,

    #[error("Dinucleotide distance must be a positive integer, got {0}")]
    InvalidDistance(usize),

    #[error("Cannot reverse complement symbol '{symbol}' near {chromosome}:{position}")]
    InvalidBase {
        symbol: char,
        chromosome: String,
        position: u64,
    },
}

pub type Result<T> = std::result::Result<T, ContextError>;
