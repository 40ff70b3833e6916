use std::io::BufRead;

use crate::error::{InputError, Result};

/// One row of a context matrix: a chromosome (or sample) name and its counts.
#[derive(PartialEq, Debug, Clone)]
pub struct MatrixRow {
    pub name: String,
    pub values: Vec<f64>,
}

///
/// A context matrix as written by the counting engine: a `Sample` header
/// followed by k-mer columns, then one row per chromosome.
///
#[derive(PartialEq, Debug, Clone)]
pub struct ContextMatrix {
    pub header: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

impl ContextMatrix {
    /// k-mer column names, without the leading `Sample` cell.
    pub fn columns(&self) -> &[String] {
        self.header.get(1..).unwrap_or(&[])
    }
}

///
/// Read a context matrix. Every row must carry exactly as many values as the
/// header has k-mer columns.
///
/// # Arguments
/// - reader: the matrix text
/// - source_name: name of the input, used in error messages
///
pub fn read_context_matrix<R: BufRead>(reader: R, source_name: &str) -> Result<ContextMatrix> {
    let mut lines = reader.lines().enumerate();

    let header: Vec<String> = match lines.next() {
        Some((_, line)) => line?
            .trim_end_matches('\r')
            .split('\t')
            .map(|s| s.to_string())
            .collect(),
        None => {
            return Err(InputError::MissingHeader {
                source_name: source_name.to_string(),
            });
        }
    };
    let expected = header.len().saturating_sub(1);

    let mut rows = Vec::new();
    for (index, line) in lines {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split('\t');
        let name = parts.next().unwrap_or_default().to_string();
        let values = parts
            .map(|v| {
                v.parse::<f64>().map_err(|_| InputError::InvalidValue {
                    source_name: source_name.to_string(),
                    line: index + 1,
                    value: v.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() != expected {
            return Err(InputError::ColumnMismatch {
                source_name: source_name.to_string(),
                line: index + 1,
                expected,
                found: values.len(),
            });
        }

        rows.push(MatrixRow { name, values });
    }

    Ok(ContextMatrix { header, rows })
}
