use std::io::BufRead;

use crate::error::{InputError, Result};

///
/// One fully assembled chromosome: its header name, taken verbatim, and its
/// upper-cased sequence.
///
#[derive(PartialEq, Debug, Clone)]
pub struct Chromosome {
    pub name: String,
    pub sequence: Vec<u8>,
}

///
/// Streams a FASTA file one chromosome at a time.
///
/// Sequence lines are concatenated and upper-cased until the next header or
/// the end of input, at which point the finished chromosome is yielded. Blank
/// lines are ignored. Only the chromosome currently being assembled is held in
/// memory.
///
pub struct FastaScanner<R: BufRead> {
    reader: R,
    buf: String,
    line_number: usize,
    header: Option<String>,
    emitted: usize,
    done: bool,
}

impl<R: BufRead> FastaScanner<R> {
    pub fn new(reader: R) -> Self {
        FastaScanner {
            reader,
            buf: String::new(),
            line_number: 0,
            header: None,
            emitted: 0,
            done: false,
        }
    }

    fn fail(&mut self, err: InputError) -> Option<Result<Chromosome>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for FastaScanner<R> {
    type Item = Result<Chromosome>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut sequence: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            let bytes_read = match self.reader.read_line(&mut self.buf) {
                Ok(n) => n,
                Err(e) => return self.fail(e.into()),
            };

            // EOF - flush the last chromosome, if any
            if bytes_read == 0 {
                self.done = true;
                return match self.header.take() {
                    Some(name) => {
                        self.emitted += 1;
                        Some(Ok(Chromosome { name, sequence }))
                    }
                    None if self.emitted == 0 => Some(Err(InputError::EmptyGenome)),
                    None => None,
                };
            }
            self.line_number += 1;

            let line = self.buf.trim_end_matches(['\n', '\r']);
            if let Some(name) = line.strip_prefix('>') {
                if name.is_empty() {
                    let line = self.line_number;
                    return self.fail(InputError::EmptyHeader { line });
                }

                let previous = self.header.replace(name.to_string());
                if let Some(previous) = previous {
                    self.emitted += 1;
                    return Some(Ok(Chromosome {
                        name: previous,
                        sequence,
                    }));
                }
                continue;
            }

            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            if self.header.is_none() {
                let line = self.line_number;
                return self.fail(InputError::SequenceBeforeHeader { line });
            }

            sequence.extend(line.bytes().map(|b| b.to_ascii_uppercase()));
        }
    }
}

///
/// Drive a callback over every chromosome of a FASTA stream, in file order.
///
/// The callback fires exactly once per header, including the last one, and
/// owns the sequence it is handed so it can drop it as soon as it is done.
/// Errors from the callback stop the scan and are returned as is.
///
/// # Returns
/// The number of chromosomes scanned.
///
pub fn scan_fasta<R, F, E>(reader: R, mut on_chromosome: F) -> std::result::Result<usize, E>
where
    R: BufRead,
    F: FnMut(Chromosome) -> std::result::Result<(), E>,
    E: From<InputError>,
{
    let mut scanned = 0;
    for chromosome in FastaScanner::new(reader) {
        on_chromosome(chromosome?)?;
        scanned += 1;
    }
    Ok(scanned)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn scan_all(data: &str) -> Result<Vec<Chromosome>> {
        FastaScanner::new(Cursor::new(data)).collect()
    }

    #[rstest]
    fn test_scan_multiple_chromosomes() {
        let chromosomes = scan_all(">chr1\nacgT\nAC\n\n>chr2 some description\nGG\n").unwrap();

        assert_eq!(chromosomes.len(), 2);
        assert_eq!(chromosomes[0].name, "chr1");
        assert_eq!(chromosomes[0].sequence, b"ACGTAC".to_vec());
        assert_eq!(chromosomes[1].name, "chr2 some description");
        assert_eq!(chromosomes[1].sequence, b"GG".to_vec());
    }

    #[rstest]
    fn test_scan_without_trailing_newline() {
        let chromosomes = scan_all(">chr1\r\nACGTACGT").unwrap();
        assert_eq!(chromosomes[0].name, "chr1");
        assert_eq!(chromosomes[0].sequence, b"ACGTACGT".to_vec());
    }

    #[rstest]
    fn test_header_without_sequence_still_emitted() {
        let chromosomes = scan_all(">empty\n>chr1\nA\n").unwrap();
        assert_eq!(chromosomes[0].name, "empty");
        assert!(chromosomes[0].sequence.is_empty());
        assert_eq!(chromosomes[1].name, "chr1");
    }

    #[rstest]
    fn test_sequence_before_header() {
        let result = scan_all("ACGT\n>chr1\nA\n");
        assert!(matches!(
            result,
            Err(InputError::SequenceBeforeHeader { line: 1 })
        ));
    }

    #[rstest]
    fn test_empty_header() {
        let result = scan_all(">chr1\nA\n>\nC\n");
        assert!(matches!(result, Err(InputError::EmptyHeader { line: 3 })));
    }

    #[rstest]
    #[case("")]
    #[case("\n\n")]
    fn test_empty_genome(#[case] data: &str) {
        assert!(matches!(scan_all(data), Err(InputError::EmptyGenome)));
    }

    #[rstest]
    fn test_scan_fasta_callback() {
        let mut seen: Vec<(String, usize)> = Vec::new();
        let scanned = scan_fasta(Cursor::new(">a\nAC\n>b\nGTT\n"), |chrom| {
            seen.push((chrom.name, chrom.sequence.len()));
            Ok::<(), InputError>(())
        })
        .unwrap();

        assert_eq!(scanned, 2);
        assert_eq!(seen, vec![("a".to_string(), 2), ("b".to_string(), 3)]);
    }
}
