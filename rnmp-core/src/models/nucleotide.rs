use crate::errors::NucleotideError;

/// The four bases, in the order every context matrix enumerates them.
pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

///
/// Complement a single upper-case base. `N` maps onto itself; anything else
/// outside `ACGT` is rejected rather than guessed.
///
pub fn complement(base: u8) -> Result<u8, NucleotideError> {
    match base {
        b'A' => Ok(b'T'),
        b'C' => Ok(b'G'),
        b'G' => Ok(b'C'),
        b'T' => Ok(b'A'),
        b'N' => Ok(b'N'),
        other => Err(NucleotideError::InvalidBase(other as char)),
    }
}

///
/// Reverse complement a short window of bases.
///
/// # Arguments
/// - seq: upper-case bases, 5' to 3'
///
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>, NucleotideError> {
    seq.iter().rev().map(|b| complement(*b)).collect()
}
