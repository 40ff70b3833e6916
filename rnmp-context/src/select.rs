use std::io::Write;
use std::path::Path;

use rnmp_core::utils::{get_dynamic_reader, library_name};
use rnmp_io::{ContextMatrix, InputError, read_context_matrix};

use crate::consts::DEFAULT_SELECT_CHROMOSOME;
use crate::errors::Result;
use crate::output::format_count;

///
/// A set of chromosome names, optionally inverted to mean "everything else".
///
#[derive(Debug, Clone, PartialEq)]
pub struct ChromosomeSelection {
    pub names: Vec<String>,
    pub invert: bool,
}

impl Default for ChromosomeSelection {
    fn default() -> Self {
        ChromosomeSelection {
            names: vec![DEFAULT_SELECT_CHROMOSOME.to_string()],
            invert: false,
        }
    }
}

impl ChromosomeSelection {
    pub fn matches(&self, chr: &str) -> bool {
        self.names.iter().any(|n| n == chr) != self.invert
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    pub selection: ChromosomeSelection,
    /// Copy every original row to the output before the summary row.
    pub append: bool,
    /// Row name for every summary; defaults to each input's library name.
    pub name: Option<String>,
}

///
/// Column-wise sum of the rows whose chromosome is selected. With no
/// selected rows the sum is all zeros.
///
pub fn sum_selected(matrix: &ContextMatrix, selection: &ChromosomeSelection) -> Vec<f64> {
    let mut sums = vec![0.0; matrix.columns().len()];
    for row in matrix.rows.iter().filter(|r| selection.matches(&r.name)) {
        for (sum, value) in sums.iter_mut().zip(row.values.iter()) {
            *sum += value;
        }
    }
    sums
}

///
/// Collapse selected chromosomes of one or more context matrices into one
/// summary row per matrix.
///
/// The header of the first matrix is written once; every further matrix must
/// have the same number of columns.
///
/// # Arguments
/// - files: context matrices, as written by a counting run
/// - options: which chromosomes, and how to name and lay out the rows
/// - out: destination
///
pub fn select_chromosomes<P: AsRef<Path>, W: Write>(
    files: &[P],
    options: &SelectOptions,
    out: &mut W,
) -> Result<()> {
    let mut expected: Option<usize> = None;

    for file in files {
        let path = file.as_ref();
        let source_name = path.display().to_string();
        let matrix = read_context_matrix(get_dynamic_reader(path)?, &source_name)?;

        match expected {
            None => {
                writeln!(out, "{}", matrix.header.join("\t"))?;
                expected = Some(matrix.columns().len());
            }
            Some(n) if n != matrix.columns().len() => {
                return Err(InputError::ColumnMismatch {
                    source_name,
                    line: 1,
                    expected: n,
                    found: matrix.columns().len(),
                }
                .into());
            }
            Some(_) => {}
        }

        if options.append {
            for row in &matrix.rows {
                write_row(out, &row.name, &row.values)?;
            }
        }

        let name = options
            .name
            .clone()
            .unwrap_or_else(|| library_name(path));
        write_row(out, &name, &sum_selected(&matrix, &options.selection))?;
    }

    Ok(())
}

fn write_row<W: Write>(out: &mut W, name: &str, values: &[f64]) -> std::io::Result<()> {
    let values: Vec<String> = values.iter().map(|v| format_count(*v)).collect();
    writeln!(out, "{}\t{}", name, values.join("\t"))
}
