use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use rnmp_context::{ContextConfig, count_contexts};

///
/// Turn parsed arguments into a counting configuration. A `--config` file
/// supplies the starting point; switches can only turn analyses on, while
/// `--dist` and `--output` replace what the file says.
///
pub fn config_from_matches(matches: &ArgMatches) -> Result<ContextConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ContextConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to read config file {}", path))?,
        None => ContextConfig::default(),
    };

    config.use_frequency |= matches.get_flag("frequency");
    config.mono |= matches.get_flag("mono");
    config.dinuc |= matches.get_flag("dinuc");
    config.trinuc |= matches.get_flag("trinuc");

    if let Some(distances) = matches.get_many::<usize>("dist") {
        config.dinuc_distances = distances.copied().collect();
        if !config.dinuc {
            warn!("--dist has no effect without --dinuc");
        }
    }

    if let Some(output) = matches.get_one::<String>("output") {
        config.output_basename = output.to_string();
    }

    Ok(config)
}

pub fn run_count(matches: &ArgMatches) -> Result<()> {
    let genome = matches
        .get_one::<String>("genome")
        .expect("A reference genome is required.");

    let libraries: Vec<&String> = matches
        .get_many::<String>("libraries")
        .expect("At least one position file is required.")
        .collect();

    let config = config_from_matches(matches)?;
    let summary = count_contexts(genome, &libraries, &config)?;

    info!(
        "{} events from {} libraries: {} counted, {} on missing chromosomes, {} out of bounds",
        summary.events,
        summary.libraries,
        summary.events_consumed - summary.events_out_of_bounds,
        summary.events_unmatched,
        summary.events_out_of_bounds
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::count::cli::create_count_cli;

    fn parse(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["count"];
        argv.extend_from_slice(args);
        create_count_cli().try_get_matches_from(argv).unwrap()
    }

    #[rstest]
    fn test_flags_to_config() {
        let matches = parse(&["g.fa", "a.bed", "b.bed", "-f", "-d", "--dist", "1", "3", "-o", "out/x"]);
        let config = config_from_matches(&matches).unwrap();

        assert_eq!(config.use_frequency, true);
        assert_eq!(config.mono, false);
        assert_eq!(config.dinuc, true);
        assert_eq!(config.dinuc_distances, vec![1, 3]);
        assert_eq!(config.output_basename, "out/x");

        let libraries: Vec<&String> = matches.get_many::<String>("libraries").unwrap().collect();
        assert_eq!(libraries, vec!["a.bed", "b.bed"]);
    }

    #[rstest]
    fn test_flags_extend_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trinuc = true\noutput_basename = \"from_file\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let matches = parse(&["g.fa", "a.bed", "-m", "--config", &path]);
        let config = config_from_matches(&matches).unwrap();

        assert_eq!(config.mono, true);
        assert_eq!(config.trinuc, true);
        assert_eq!(config.dinuc, false);
        assert_eq!(config.output_basename, "from_file");
    }

    #[rstest]
    fn test_libraries_required() {
        let result = create_count_cli().try_get_matches_from(["count", "g.fa"]);
        assert!(result.is_err());
    }
}
