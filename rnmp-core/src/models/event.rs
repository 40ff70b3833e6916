use std::fmt::{self, Display};

use super::strand::Strand;

///
/// Identity of one incorporation site: chromosome, 1-based position and strand.
///
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Clone)]
pub struct EventKey {
    pub chr: String,
    pub position: u64,
    pub strand: Strand,
}

impl Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}({})", self.chr, self.position, self.strand)
    }
}

///
/// One merged incorporation site on a known chromosome.
///
/// `counts[i]` is the occurrence count (or summed weight) reported by library `i`.
/// A zero slot means library `i` never reported this site.
///
#[derive(PartialEq, Debug, Clone)]
pub struct Event {
    pub position: u64,
    pub strand: Strand,
    pub counts: Vec<f64>,
}

impl Event {
    /// 0-based index of the ribonucleotide in its chromosome sequence.
    pub fn index(&self) -> usize {
        (self.position - 1) as usize
    }

    ///
    /// Iterate over `(library index, weight)` for every library that
    /// actually reported this site.
    ///
    pub fn library_weights(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != 0.0)
            .map(|(i, w)| (i, *w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_library_weights_skip_empty_slots() {
        let event = Event {
            position: 4,
            strand: Strand::Plus,
            counts: vec![0.0, 2.0, 0.0, 1.5],
        };

        let weights: Vec<(usize, f64)> = event.library_weights().collect();
        assert_eq!(weights, vec![(1, 2.0), (3, 1.5)]);
        assert_eq!(event.index(), 3);
    }

    #[rstest]
    fn test_event_key_ordering() {
        let a = EventKey {
            chr: "chr1".to_string(),
            position: 10,
            strand: Strand::Minus,
        };
        let b = EventKey {
            chr: "chr1".to_string(),
            position: 10,
            strand: Strand::Plus,
        };
        let c = EventKey {
            chr: "chr1".to_string(),
            position: 9,
            strand: Strand::Minus,
        };

        let mut keys = vec![a.clone(), b.clone(), c.clone()];
        keys.sort();
        assert_eq!(keys, vec![c, b, a]);
    }
}
