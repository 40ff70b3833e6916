use std::io::BufRead;

use log::debug;

use rnmp_core::models::{EventKey, Strand};

use crate::error::{InputError, Result};

/// Number of tab separated columns in a position file line.
pub const POSITION_COLUMNS: usize = 6;

const CHR_COLUMN: usize = 0;
const POSITION_COLUMN: usize = 2;
const WEIGHT_COLUMN: usize = 3;
const STRAND_COLUMN: usize = 5;

///
/// One incorporation reported by a position file.
///
#[derive(PartialEq, Debug, Clone)]
pub struct PositionRecord {
    pub key: EventKey,
    pub weight: f64,
}

///
/// Parse one line of a position file.
///
/// Lines without exactly six tab separated columns are not position lines and
/// yield `Ok(None)`. The fourth column is only read when `use_weight` is set,
/// otherwise every record weighs 1.
///
/// # Arguments
/// - line: the line, without its line terminator
/// - use_weight: read column 3 as the incorporation weight
/// - source_name: name of the input, used in error messages
/// - line_number: 1-based line number, used in error messages
///
pub fn parse_position_line(
    line: &str,
    use_weight: bool,
    source_name: &str,
    line_number: usize,
) -> Result<Option<PositionRecord>> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() != POSITION_COLUMNS {
        return Ok(None);
    }

    let position = parts[POSITION_COLUMN]
        .parse::<u64>()
        .ok()
        .filter(|p| *p > 0)
        .ok_or_else(|| InputError::InvalidPosition {
            source_name: source_name.to_string(),
            line: line_number,
            value: parts[POSITION_COLUMN].to_string(),
        })?;

    let strand = parts[STRAND_COLUMN]
        .parse::<Strand>()
        .map_err(|_| InputError::InvalidStrand {
            source_name: source_name.to_string(),
            line: line_number,
            value: parts[STRAND_COLUMN].to_string(),
        })?;

    let weight = if use_weight {
        parts[WEIGHT_COLUMN]
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w >= 0.0)
            .ok_or_else(|| InputError::InvalidWeight {
                source_name: source_name.to_string(),
                line: line_number,
                value: parts[WEIGHT_COLUMN].to_string(),
            })?
    } else {
        1.0
    };

    Ok(Some(PositionRecord {
        key: EventKey {
            chr: parts[CHR_COLUMN].to_string(),
            position,
            strand,
        },
        weight,
    }))
}

///
/// Iterator over the records of one position file. Non position lines are
/// skipped; malformed values inside a position line are errors.
///
pub struct PositionReader<R: BufRead> {
    reader: R,
    source_name: String,
    use_weight: bool,
    line_number: usize,
    skipped: usize,
    buf: String,
}

impl<R: BufRead> PositionReader<R> {
    pub fn new(reader: R, source_name: &str, use_weight: bool) -> Self {
        PositionReader {
            reader,
            source_name: source_name.to_string(),
            use_weight,
            line_number: 0,
            skipped: 0,
            buf: String::new(),
        }
    }

    /// Number of lines dropped so far for having the wrong column count.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for PositionReader<R> {
    type Item = Result<PositionRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_number += 1;

            let line = self.buf.trim_end_matches(['\n', '\r']);
            match parse_position_line(line, self.use_weight, &self.source_name, self.line_number)
            {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {
                    debug!(
                        "Skipping line {} of {}: not a position line",
                        self.line_number, self.source_name
                    );
                    self.skipped += 1;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_position_line() {
        let record = parse_position_line("chrI\t99\t100\t7\t.\t-", false, "lib", 1)
            .unwrap()
            .unwrap();

        assert_eq!(record.key.chr, "chrI");
        assert_eq!(record.key.position, 100);
        assert_eq!(record.key.strand, Strand::Minus);
        assert_eq!(record.weight, 1.0);
    }

    #[rstest]
    fn test_parse_position_line_with_weight() {
        let record = parse_position_line("chrI\t99\t100\t2.5\t.\t+", true, "lib", 1)
            .unwrap()
            .unwrap();
        assert_eq!(record.weight, 2.5);
    }

    #[rstest]
    #[case("chrI\t99\t100\t1\t.")]
    #[case("chrI\t99\t100\t1\t.\t+\textra")]
    #[case("track name=ribos")]
    #[case("")]
    fn test_wrong_column_count_is_skipped(#[case] line: &str) {
        assert_eq!(parse_position_line(line, true, "lib", 1).unwrap(), None);
    }

    #[rstest]
    #[case("chrI\t0\tabc\t1\t.\t+")]
    #[case("chrI\t0\t0\t1\t.\t+")]
    #[case("chrI\t0\t-4\t1\t.\t+")]
    fn test_invalid_position(#[case] line: &str) {
        let result = parse_position_line(line, false, "lib", 3);
        assert!(matches!(
            result,
            Err(InputError::InvalidPosition { line: 3, .. })
        ));
    }

    #[rstest]
    fn test_invalid_strand() {
        let result = parse_position_line("chrI\t0\t1\t1\t.\t.", false, "lib", 1);
        assert!(matches!(result, Err(InputError::InvalidStrand { .. })));
    }

    #[rstest]
    #[case("x")]
    #[case("-1")]
    #[case("inf")]
    fn test_invalid_weight(#[case] weight: &str) {
        let line = format!("chrI\t0\t1\t{}\t.\t+", weight);
        let result = parse_position_line(&line, true, "lib", 1);
        assert!(matches!(result, Err(InputError::InvalidWeight { .. })));

        // weights are never looked at unless requested
        assert!(parse_position_line(&line, false, "lib", 1).is_ok());
    }

    #[rstest]
    fn test_reader_skips_and_counts() {
        let data = "header line\nchrI\t0\t5\t1\t.\t+\r\nshort\tline\nchrII\t1\t2\t1\t.\t-\n";
        let mut reader = PositionReader::new(Cursor::new(data), "lib", false);

        let records: Vec<PositionRecord> = reader.by_ref().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key.strand, Strand::Plus);
        assert_eq!(records[1].key.chr, "chrII");
        assert_eq!(reader.skipped(), 2);
    }
}
