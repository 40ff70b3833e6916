use std::fmt::{self, Display};

use super::nucleotide::BASES;

/// Where the neighbouring base sits relative to the ribonucleotide, 5' to 3'.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum DinucOrientation {
    /// neighbour, then ribonucleotide
    Nr,
    /// ribonucleotide, then neighbour
    Rn,
}

/// Position of the ribonucleotide inside a three base window.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum TrinucOrientation {
    Nnr,
    Nrn,
    Rnn,
}

impl TrinucOrientation {
    pub const ALL: [TrinucOrientation; 3] = [
        TrinucOrientation::Nnr,
        TrinucOrientation::Nrn,
        TrinucOrientation::Rnn,
    ];
}

impl DinucOrientation {
    pub const ALL: [DinucOrientation; 2] = [DinucOrientation::Nr, DinucOrientation::Rn];
}

///
/// One context matrix the engine fills: a resolution plus, where it applies,
/// a distance and an orientation.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Analysis {
    Mono,
    Dinuc {
        distance: usize,
        orientation: DinucOrientation,
    },
    Trinuc(TrinucOrientation),
}

impl Analysis {
    ///
    /// Offsets of the window bases relative to the ribonucleotide, as read
    /// 5' to 3' on the plus strand.
    ///
    pub fn offsets(&self) -> Vec<isize> {
        match self {
            Analysis::Mono => vec![0],
            Analysis::Dinuc {
                distance,
                orientation,
            } => {
                let d = *distance as isize;
                match orientation {
                    DinucOrientation::Nr => vec![-d, 0],
                    DinucOrientation::Rn => vec![0, d],
                }
            }
            Analysis::Trinuc(TrinucOrientation::Nnr) => vec![-2, -1, 0],
            Analysis::Trinuc(TrinucOrientation::Nrn) => vec![-1, 0, 1],
            Analysis::Trinuc(TrinucOrientation::Rnn) => vec![0, 1, 2],
        }
    }

    pub fn width(&self) -> usize {
        self.loop_order().len()
    }

    // window positions from the slowest to the fastest varying column
    fn loop_order(&self) -> &'static [usize] {
        match self {
            Analysis::Mono => &[0],
            Analysis::Dinuc {
                orientation: DinucOrientation::Nr,
                ..
            } => &[1, 0],
            Analysis::Dinuc {
                orientation: DinucOrientation::Rn,
                ..
            } => &[0, 1],
            Analysis::Trinuc(TrinucOrientation::Nnr) => &[2, 1, 0],
            Analysis::Trinuc(TrinucOrientation::Nrn) => &[1, 0, 2],
            Analysis::Trinuc(TrinucOrientation::Rnn) => &[0, 1, 2],
        }
    }

    ///
    /// Column names of this analysis' matrix.
    ///
    /// The ribonucleotide base always varies slowest, so the columns come in
    /// blocks of identical ribonucleotides. Downstream normalisation relies on
    /// this exact order.
    ///
    pub fn columns(&self) -> Vec<String> {
        let order = self.loop_order();
        let width = order.len();
        let total = BASES.len().pow(width as u32);

        (0..total)
            .map(|n| {
                let mut kmer = vec![b'N'; width];
                for (depth, pos) in order.iter().enumerate() {
                    let digit = (n / BASES.len().pow((width - 1 - depth) as u32)) % BASES.len();
                    kmer[*pos] = BASES[digit];
                }
                String::from_utf8_lossy(&kmer).into_owned()
            })
            .collect()
    }

    /// Output file suffix, e.g. `.dinuc_d2_rn`.
    pub fn suffix(&self) -> String {
        format!(".{}", self)
    }
}

impl Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::Mono => write!(f, "mono"),
            Analysis::Dinuc {
                distance,
                orientation,
            } => {
                let o = match orientation {
                    DinucOrientation::Nr => "nr",
                    DinucOrientation::Rn => "rn",
                };
                write!(f, "dinuc_d{}_{}", distance, o)
            }
            Analysis::Trinuc(orientation) => {
                let o = match orientation {
                    TrinucOrientation::Nnr => "nnr",
                    TrinucOrientation::Nrn => "nrn",
                    TrinucOrientation::Rnn => "rnn",
                };
                write!(f, "trinuc_{}", o)
            }
        }
    }
}
