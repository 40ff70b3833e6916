use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::NucleotideError;

///
/// Strand of an incorporation event. `Plus` sorts before `Minus`, the same
/// way `+` sorts before `-` in plain text.
///
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Clone, Copy)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    pub fn is_reverse(&self) -> bool {
        matches!(self, Strand::Minus)
    }
}

impl FromStr for Strand {
    type Err = NucleotideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            _ => Err(NucleotideError::InvalidStrand(s.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
        }
    }
}
