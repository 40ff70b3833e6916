use rnmp_core::errors::NucleotideError;
use rnmp_core::models::{Analysis, Event, Strand, reverse_complement};

use crate::errors::{ContextError, Result};

///
/// The window one analysis reads around a ribonucleotide.
///
/// Offsets are stored as read 5' to 3' on the plus strand. For minus strand
/// events the window is mirrored around the ribonucleotide, the bases are read
/// from the plus strand sequence and the result is reverse complemented, so
/// the k-mer always reads 5' to 3' on the strand that carries the event.
///
#[derive(Debug, Clone)]
pub struct ContextWindow {
    forward: Vec<isize>,
    reverse: Vec<isize>,
}

impl ContextWindow {
    pub fn new(analysis: Analysis) -> Self {
        let forward = analysis.offsets();
        let reverse = forward.iter().rev().map(|o| -o).collect();
        ContextWindow {
            forward,
            reverse,
        }
    }

    ///
    /// Resolve the k-mer for a ribonucleotide at 0-based `index`.
    ///
    /// Returns `Ok(None)` when any base of the window falls outside the
    /// sequence; nothing is padded or wrapped.
    ///
    pub fn resolve(
        &self,
        sequence: &[u8],
        index: usize,
        strand: Strand,
    ) -> std::result::Result<Option<Vec<u8>>, NucleotideError> {
        let offsets = match strand {
            Strand::Plus => &self.forward,
            Strand::Minus => &self.reverse,
        };

        let mut window = Vec::with_capacity(offsets.len());
        for offset in offsets {
            let pos = index as isize + offset;
            if pos < 0 || pos as usize >= sequence.len() {
                return Ok(None);
            }
            window.push(sequence[pos as usize]);
        }

        if strand.is_reverse() {
            window = reverse_complement(&window)?;
        }

        Ok(Some(window))
    }
}

/// One k-mer observation: `weight` added to `kmer` for library `library` in analysis `window`.
#[derive(PartialEq, Debug, Clone)]
pub struct ContextHit {
    pub window: usize,
    pub library: usize,
    pub kmer: Vec<u8>,
    pub weight: f64,
}

/// Everything extracted from one chromosome.
#[derive(Debug, Default)]
pub struct ChromosomeExtraction {
    pub hits: Vec<ContextHit>,
    /// Events whose ribonucleotide lies past the end of the sequence.
    pub out_of_bounds: usize,
}

///
/// Extract the context k-mers of every event on one chromosome.
///
/// Windows that leave the sequence contribute nothing for that event, and a
/// library with a zero count at an event produces no hit.
///
/// # Arguments
/// - chromosome: chromosome name, used in error messages
/// - sequence: upper-cased chromosome sequence
/// - events: the chromosome's events
/// - windows: one window per analysis; `ContextHit::window` indexes into it
///
pub fn extract_chromosome(
    chromosome: &str,
    sequence: &[u8],
    events: &[Event],
    windows: &[ContextWindow],
) -> Result<ChromosomeExtraction> {
    let mut extraction = ChromosomeExtraction::default();

    for event in events {
        let index = event.index();
        if index >= sequence.len() {
            extraction.out_of_bounds += 1;
            continue;
        }

        for (w, window) in windows.iter().enumerate() {
            let kmer = window
                .resolve(sequence, index, event.strand)
                .map_err(|e| match e {
                    NucleotideError::InvalidBase(symbol) => ContextError::InvalidBase {
                        symbol,
                        chromosome: chromosome.to_string(),
                        position: event.position,
                    },
                    other => ContextError::Reader(other.into()),
                })?;

            let Some(kmer) = kmer else {
                continue;
            };

            for (library, weight) in event.library_weights() {
                extraction.hits.push(ContextHit {
                    window: w,
                    library,
                    kmer: kmer.clone(),
                    weight,
                });
            }
        }
    }

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use rnmp_core::models::{DinucOrientation, TrinucOrientation};

    const SEQ: &[u8] = b"ACGTACGT";

    fn dinuc(distance: usize, orientation: DinucOrientation) -> ContextWindow {
        ContextWindow::new(Analysis::Dinuc {
            distance,
            orientation,
        })
    }

    fn resolve(window: &ContextWindow, position: usize, strand: Strand) -> Option<String> {
        window
            .resolve(SEQ, position - 1, strand)
            .unwrap()
            .map(|k| String::from_utf8(k).unwrap())
    }

    #[rstest]
    #[case(4, Strand::Plus, "T")]
    #[case(4, Strand::Minus, "A")]
    #[case(2, Strand::Minus, "G")]
    fn test_mono(#[case] position: usize, #[case] strand: Strand, #[case] expected: &str) {
        let window = ContextWindow::new(Analysis::Mono);
        assert_eq!(resolve(&window, position, strand).unwrap(), expected);
    }

    #[rstest]
    // plus: NR = genome[p-1-d] + genome[p-1], RN = genome[p-1] + genome[p-1+d]
    #[case(4, Strand::Plus, 1, Some("GT"), Some("TA"))]
    #[case(4, Strand::Plus, 3, Some("AT"), Some("TG"))]
    // minus: NR = rc(genome[p-1] + genome[p-1+d]), RN = rc(genome[p-1-d] + genome[p-1])
    #[case(4, Strand::Minus, 1, Some("TA"), Some("AC"))]
    #[case(1, Strand::Plus, 1, None, Some("AC"))]
    #[case(1, Strand::Minus, 1, Some("GT"), None)]
    #[case(8, Strand::Plus, 1, Some("GT"), None)]
    #[case(8, Strand::Minus, 1, None, Some("AC"))]
    fn test_dinuc(
        #[case] position: usize,
        #[case] strand: Strand,
        #[case] distance: usize,
        #[case] nr: Option<&str>,
        #[case] rn: Option<&str>,
    ) {
        let nr_window = dinuc(distance, DinucOrientation::Nr);
        let rn_window = dinuc(distance, DinucOrientation::Rn);
        assert_eq!(resolve(&nr_window, position, strand).as_deref(), nr);
        assert_eq!(resolve(&rn_window, position, strand).as_deref(), rn);
    }

    #[rstest]
    #[case(TrinucOrientation::Nnr, Strand::Plus, Some("CGT"))]
    #[case(TrinucOrientation::Nrn, Strand::Plus, Some("GTA"))]
    #[case(TrinucOrientation::Rnn, Strand::Plus, Some("TAC"))]
    #[case(TrinucOrientation::Nnr, Strand::Minus, Some("GTA"))]
    #[case(TrinucOrientation::Nrn, Strand::Minus, Some("TAC"))]
    #[case(TrinucOrientation::Rnn, Strand::Minus, Some("ACG"))]
    fn test_trinuc(
        #[case] orientation: TrinucOrientation,
        #[case] strand: Strand,
        #[case] expected: Option<&str>,
    ) {
        let window = ContextWindow::new(Analysis::Trinuc(orientation));
        let kmer = resolve(&window, 4, strand);
        assert_eq!(kmer.as_deref(), expected);

        // the ribonucleotide sits where the orientation name says it does
        let ribo = match strand {
            Strand::Plus => b'T',
            Strand::Minus => b'A',
        };
        let r = match orientation {
            TrinucOrientation::Nnr => 2,
            TrinucOrientation::Nrn => 1,
            TrinucOrientation::Rnn => 0,
        };
        assert_eq!(kmer.unwrap().as_bytes()[r], ribo);
    }

    #[rstest]
    #[case(1, TrinucOrientation::Nnr)]
    #[case(2, TrinucOrientation::Nnr)]
    #[case(1, TrinucOrientation::Nrn)]
    #[case(8, TrinucOrientation::Nrn)]
    #[case(7, TrinucOrientation::Rnn)]
    #[case(8, TrinucOrientation::Rnn)]
    fn test_trinuc_boundaries(#[case] position: usize, #[case] orientation: TrinucOrientation) {
        let window = ContextWindow::new(Analysis::Trinuc(orientation));
        assert_eq!(resolve(&window, position, Strand::Plus), None);
    }

    #[rstest]
    fn test_minus_strand_nr_rn_are_reverse_complements() {
        let nr = dinuc(2, DinucOrientation::Nr);
        let rn = dinuc(2, DinucOrientation::Rn);
        for index in 2..SEQ.len() - 2 {
            let plus_rn = rn.resolve(SEQ, index, Strand::Plus).unwrap().unwrap();
            let minus_nr = nr.resolve(SEQ, index, Strand::Minus).unwrap().unwrap();
            assert_eq!(minus_nr, reverse_complement(&plus_rn).unwrap());
        }
    }

    #[rstest]
    fn test_extract_chromosome_skips_empty_libraries() {
        let events = vec![
            Event {
                position: 4,
                strand: Strand::Plus,
                counts: vec![1.0, 0.0],
            },
            Event {
                position: 1,
                strand: Strand::Minus,
                counts: vec![0.0, 2.0],
            },
            Event {
                position: 20,
                strand: Strand::Plus,
                counts: vec![1.0, 1.0],
            },
        ];
        let windows = vec![
            ContextWindow::new(Analysis::Mono),
            dinuc(1, DinucOrientation::Rn),
        ];

        let extraction = extract_chromosome("chr1", SEQ, &events, &windows).unwrap();
        assert_eq!(extraction.out_of_bounds, 1);
        assert_eq!(
            extraction.hits,
            vec![
                ContextHit {
                    window: 0,
                    library: 0,
                    kmer: b"T".to_vec(),
                    weight: 1.0
                },
                ContextHit {
                    window: 1,
                    library: 0,
                    kmer: b"TA".to_vec(),
                    weight: 1.0
                },
                // minus strand at position 1: RN needs the base before it
                ContextHit {
                    window: 0,
                    library: 1,
                    kmer: b"T".to_vec(),
                    weight: 2.0
                },
            ]
        );
    }

    #[rstest]
    fn test_invalid_base_on_minus_strand() {
        let events = vec![Event {
            position: 2,
            strand: Strand::Minus,
            counts: vec![1.0],
        }];
        let windows = vec![ContextWindow::new(Analysis::Mono)];

        let result = extract_chromosome("chrX", b"ARGT", &events, &windows);
        assert!(matches!(
            result,
            Err(ContextError::InvalidBase {
                symbol: 'R',
                position: 2,
                ..
            })
        ));

        // plus strand windows are taken verbatim
        let events = vec![Event {
            position: 2,
            strand: Strand::Plus,
            counts: vec![1.0],
        }];
        let extraction = extract_chromosome("chrX", b"ARGT", &events, &windows).unwrap();
        assert_eq!(extraction.hits[0].kmer, b"R".to_vec());
    }
}
