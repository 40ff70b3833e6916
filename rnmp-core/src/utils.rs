use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Open a genome or position file for line-by-line reading. Files ending in
/// `.gz` are decompressed on the fly; concatenated gzip members are read
/// through as one stream.
///
/// # Arguments
///
/// - path: file to open
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file =
        File::open(path).with_context(|| format!("Cannot open input {}", path.display()))?;

    let inner: Box<dyn Read> = match path.extension().and_then(OsStr::to_str) {
        Some("gz") => Box::new(MultiGzDecoder::new(file)),
        _ => Box::new(file),
    };

    Ok(BufReader::new(inner))
}

/// Same as [`get_dynamic_reader`], except that `-` reads standard input.
pub fn get_dynamic_reader_w_stdin(input: &str) -> Result<BufReader<Box<dyn Read>>> {
    match input {
        "-" => Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>)),
        path => get_dynamic_reader(Path::new(path)),
    }
}

///
/// Derive a library name from a position file path: the file name with the
/// directory and everything from the first `.` onwards removed.
///
/// `data/wt-rep1.bed.gz` becomes `wt-rep1`.
///
pub fn library_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default();

    match file_name.split('.').next() {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}
