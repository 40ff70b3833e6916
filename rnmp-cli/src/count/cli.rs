use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const COUNT_CMD: &str = "count";

pub fn create_count_cli() -> Command {
    Command::new(COUNT_CMD)
        .about("Count mono-, di- and trinucleotide contexts around ribonucleotides, one matrix per analysis and library.")
        .arg(
            Arg::new("genome")
                .required(true)
                .help("Reference genome in FASTA format (.gz allowed, - for stdin)"),
        )
        .arg(
            Arg::new("libraries")
                .required(true)
                .num_args(1..)
                .help("Ribonucleotide position files, one per library"),
        )
        .arg(
            arg!(-f --frequency)
                .action(ArgAction::SetTrue)
                .help("Weight each site by the count in column 4 instead of 1"),
        )
        .arg(
            arg!(-m --mono)
                .action(ArgAction::SetTrue)
                .help("Count the ribonucleotide itself"),
        )
        .arg(
            arg!(-d --dinuc)
                .action(ArgAction::SetTrue)
                .help("Count dinucleotides pairing the ribonucleotide with a neighbour"),
        )
        .arg(
            arg!(--dist <DIST>)
                .required(false)
                .num_args(1..)
                .value_parser(value_parser!(usize))
                .help("Neighbour distances for dinucleotide counting (default: 1)"),
        )
        .arg(
            arg!(-t --trinuc)
                .action(ArgAction::SetTrue)
                .help("Count trinucleotides in all three orientations"),
        )
        .arg(
            arg!(-o --output <BASENAME>)
                .required(false)
                .help("Output basename; files are named {basename}_{library}.{analysis}"),
        )
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("TOML file with defaults; command line flags add to it"),
        )
}
