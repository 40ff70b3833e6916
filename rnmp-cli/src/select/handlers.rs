use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use rnmp_context::{ChromosomeSelection, SelectOptions, select_chromosomes};

pub fn options_from_matches(matches: &ArgMatches) -> SelectOptions {
    let mut selection = ChromosomeSelection::default();
    if let Some(names) = matches.get_many::<String>("select") {
        selection.names = names.cloned().collect();
    }
    selection.invert = matches.get_flag("invert");

    SelectOptions {
        selection,
        append: matches.get_flag("append"),
        name: matches.get_one::<String>("name").cloned(),
    }
}

pub fn run_select(matches: &ArgMatches) -> Result<()> {
    let files: Vec<&String> = matches
        .get_many::<String>("matrices")
        .expect("At least one context matrix is required.")
        .collect();

    let options = options_from_matches(matches);

    match matches.get_one::<String>("output") {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
            let mut out = BufWriter::new(file);
            select_chromosomes(&files, &options, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            select_chromosomes(&files, &options, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
