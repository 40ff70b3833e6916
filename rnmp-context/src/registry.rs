use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use fxhash::FxHashMap;
use log::{info, warn};

use rnmp_core::models::{Event, EventKey};
use rnmp_core::utils::{get_dynamic_reader, library_name};
use rnmp_io::PositionReader;

use crate::errors::{ContextError, Result};

///
/// All incorporation sites of a run, merged across libraries and grouped by
/// chromosome.
///
/// Each `(chromosome, position, strand)` site appears once and carries one
/// count slot per library. Events of a chromosome are sorted by
/// `(position, strand)` and are handed out exactly once, when the genome scan
/// reaches that chromosome.
///
#[derive(Debug)]
pub struct PositionRegistry {
    libraries: Vec<String>,
    events: FxHashMap<String, Vec<Event>>,
}

impl PositionRegistry {
    ///
    /// Build the registry from position files. Library names come from the
    /// file names (see [`library_name`]); `.gz` inputs are decompressed on the fly.
    ///
    /// # Arguments
    /// - files: one position file per library
    /// - use_weight: sum column 3 instead of counting occurrences
    ///
    pub fn from_files<P: AsRef<Path>>(files: &[P], use_weight: bool) -> Result<Self> {
        let sources = files
            .iter()
            .map(|f| {
                let path = f.as_ref();
                Ok((library_name(path), get_dynamic_reader(path)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_readers(sources, use_weight)
    }

    ///
    /// Build the registry from already opened position sources.
    ///
    /// A site reported several times by the same library accumulates in that
    /// library's slot. Sources sharing a library name are one library and
    /// share a slot; other libraries never do.
    ///
    pub fn from_readers<R: BufRead>(sources: Vec<(String, R)>, use_weight: bool) -> Result<Self> {
        if sources.is_empty() {
            return Err(ContextError::NoLibraries);
        }

        let mut libraries: Vec<String> = Vec::with_capacity(sources.len());
        let mut slots: Vec<usize> = Vec::with_capacity(sources.len());
        for (name, _) in &sources {
            match libraries.iter().position(|l| l == name) {
                Some(slot) => {
                    warn!("Library name {} is used more than once, its files are merged", name);
                    slots.push(slot);
                }
                None => {
                    slots.push(libraries.len());
                    libraries.push(name.clone());
                }
            }
        }

        let n_libraries = libraries.len();
        let mut merged: BTreeMap<EventKey, Vec<f64>> = BTreeMap::new();

        for ((name, reader), slot) in sources.into_iter().zip(slots) {
            let mut records = PositionReader::new(reader, &name, use_weight);
            let mut n_records = 0;
            for record in records.by_ref() {
                let record = record?;
                merged
                    .entry(record.key)
                    .or_insert_with(|| vec![0.0; n_libraries])[slot] += record.weight;
                n_records += 1;
            }

            info!(
                "Read {} positions from library {} ({} lines skipped)",
                n_records,
                name,
                records.skipped()
            );
        }

        // BTreeMap iteration is already (chromosome, position, strand) ordered
        let mut events: FxHashMap<String, Vec<Event>> = FxHashMap::default();
        for (key, counts) in merged {
            events.entry(key.chr).or_default().push(Event {
                position: key.position,
                strand: key.strand,
                counts,
            });
        }

        Ok(PositionRegistry { libraries, events })
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    /// Number of events not yet handed out.
    pub fn n_events(&self) -> usize {
        self.events.values().map(|e| e.len()).sum()
    }

    pub fn events(&self, chr: &str) -> Option<&[Event]> {
        self.events.get(chr).map(|e| e.as_slice())
    }

    /// Chromosomes that still hold events, in no particular order.
    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(|k| k.as_str())
    }

    ///
    /// Remove and return the events of one chromosome. A second call for the
    /// same chromosome returns `None`.
    ///
    pub fn take_chromosome(&mut self, chr: &str) -> Option<Vec<Event>> {
        self.events.remove(chr)
    }
}
