use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use rnmp_core::utils::get_dynamic_reader_w_stdin;
use rnmp_io::scan_fasta;

use crate::config::ContextConfig;
use crate::errors::{ContextError, Result};
use crate::extract::{ContextWindow, extract_chromosome};
use crate::output::ContextWrite;
use crate::registry::PositionRegistry;
use crate::table::ContextTable;

/// What a counting run did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContextSummary {
    pub libraries: usize,
    pub events: usize,
    pub chromosomes_scanned: usize,
    pub events_consumed: usize,
    /// Events on chromosomes the genome never mentioned.
    pub events_unmatched: usize,
    /// Events past the end of their chromosome.
    pub events_out_of_bounds: usize,
    pub files: Vec<PathBuf>,
}

///
/// Stream a genome once and count the context of every registered event.
///
/// Each chromosome is extracted right after its sequence is complete, then
/// its sequence and events are dropped. Nothing is written to disk.
///
/// # Arguments
/// - genome: FASTA text
/// - registry: merged event positions; drained as chromosomes are reached
/// - config: a validated configuration
/// - progress: progress display, use [`ProgressBar::hidden`] for none
///
pub fn count_contexts_from_reader<G: BufRead>(
    genome: G,
    registry: &mut PositionRegistry,
    config: &ContextConfig,
    progress: &ProgressBar,
) -> Result<(ContextTable, ContextSummary)> {
    let analyses = config.analyses();
    let windows: Vec<ContextWindow> = analyses.iter().map(|a| ContextWindow::new(*a)).collect();
    let mut table = ContextTable::new(analyses, registry.libraries().to_vec());

    let mut summary = ContextSummary {
        libraries: registry.libraries().len(),
        events: registry.n_events(),
        ..Default::default()
    };

    let mut seen: HashSet<String> = HashSet::new();
    let scanned = scan_fasta(genome, |chromosome| -> Result<()> {
        if !seen.insert(chromosome.name.clone()) {
            warn!("Chromosome {} appears more than once in the genome", chromosome.name);
        }

        let Some(events) = registry.take_chromosome(&chromosome.name) else {
            progress.inc(1);
            return Ok(());
        };

        let extraction =
            extract_chromosome(&chromosome.name, &chromosome.sequence, &events, &windows)?;
        table.accumulate_hits(&chromosome.name, &extraction.hits);

        if extraction.out_of_bounds > 0 {
            warn!(
                "{} events on {} lie past its end ({} bp)",
                extraction.out_of_bounds,
                chromosome.name,
                chromosome.sequence.len()
            );
        }
        summary.events_consumed += events.len();
        summary.events_out_of_bounds += extraction.out_of_bounds;

        info!(
            "{} finished! Length = {}, events = {}",
            chromosome.name,
            chromosome.sequence.len(),
            events.len()
        );
        progress.set_message(format!("Scanned {}", chromosome.name));
        progress.inc(1);

        Ok(())
    })?;

    summary.chromosomes_scanned = scanned;
    summary.events_unmatched = registry.n_events();
    if summary.events_unmatched > 0 {
        let mut missing: Vec<&str> = registry.chromosomes().collect();
        missing.sort();
        warn!(
            "{} events were never counted, their chromosomes are missing from the genome: {}",
            summary.events_unmatched,
            missing.join(", ")
        );
    }

    Ok((table, summary))
}

///
/// Full counting run: read the position files, stream the genome, write one
/// matrix per analysis and library.
///
/// # Arguments
/// - genome: path to a FASTA file (`.gz` allowed), or `-` for stdin
/// - position_files: one position file per library
/// - config: what to count; validated here
///
pub fn count_contexts<P: AsRef<Path>>(
    genome: &str,
    position_files: &[P],
    config: &ContextConfig,
) -> Result<ContextSummary> {
    let config = config.clone().validate()?;
    let start = Instant::now();

    if position_files.is_empty() {
        return Err(ContextError::NoLibraries);
    }

    let mut registry = PositionRegistry::from_files(position_files, config.use_frequency)?;
    info!(
        "Ribonucleotides extracted! {} events from {} libraries",
        registry.n_events(),
        registry.libraries().len()
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({pos} chromosomes)")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message("Scanning genome...");

    let reader = get_dynamic_reader_w_stdin(genome)?;
    let (table, mut summary) =
        count_contexts_from_reader(reader, &mut registry, &config, &spinner)?;
    spinner.finish_with_message("Calculation finished");

    summary.files = table.write_matrices(&config.output_basename)?;
    info!(
        "Done! Wrote {} files in {:.2?}",
        summary.files.len(),
        start.elapsed()
    );

    Ok(summary)
}
