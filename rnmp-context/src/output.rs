use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::info;

use crate::consts::SAMPLE_COLUMN;
use crate::errors::Result;
use crate::table::{ContextTable, LibraryCounts};

///
/// Output prefix for one library: `{basename}_{library}`, or just the
/// library name when no basename is set.
///
pub fn output_name(basename: &str, library: &str) -> String {
    if basename.is_empty() {
        library.to_string()
    } else {
        format!("{}_{}", basename, library)
    }
}

///
/// Format a count the way the matrices have always carried them: shortest
/// round-trip digits, integral values keep a trailing `.0`, and exponents
/// carry a sign and at least two digits (`1e-05`, `2.5e+16`).
///
pub fn format_count(value: f64) -> String {
    let repr = format!("{:?}", value);

    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

///
/// Write one context matrix: a `Sample` header with the given k-mer columns,
/// then one row per chromosome. Missing buckets are written as zero.
///
pub fn write_matrix<W: Write>(
    writer: &mut W,
    columns: &[String],
    counts: &LibraryCounts,
) -> std::io::Result<()> {
    writeln!(writer, "{}\t{}", SAMPLE_COLUMN, columns.join("\t"))?;

    for (chr, kmers) in counts.rows() {
        let values: Vec<String> = columns
            .iter()
            .map(|c| format_count(kmers.get(c.as_bytes()).copied().unwrap_or(0.0)))
            .collect();
        writeln!(writer, "{}\t{}", chr, values.join("\t"))?;
    }

    Ok(())
}

pub trait ContextWrite {
    ///
    /// Write every matrix to disk, one file per analysis and library.
    ///
    /// # Arguments
    /// - basename: output prefix, may contain a directory
    ///
    /// # Returns
    /// The paths written, analysis-major.
    fn write_matrices(&self, basename: &str) -> Result<Vec<PathBuf>>;
}

impl ContextWrite for ContextTable {
    fn write_matrices(&self, basename: &str) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (a, analysis) in self.analyses().iter().enumerate() {
            let columns = analysis.columns();

            for (l, library) in self.libraries().iter().enumerate() {
                let path = matrix_path(basename, library, &analysis.suffix());

                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }

                let mut writer = BufWriter::new(File::create(&path)?);
                write_matrix(&mut writer, &columns, self.counts(a, l))?;
                writer.flush()?;

                info!("Wrote {}", path.display());
                written.push(path);
            }
        }

        Ok(written)
    }
}

/// Path of the matrix a run writes for one analysis and library.
pub fn matrix_path(basename: &str, library: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", output_name(basename, library), suffix))
}
