use clap::{Arg, ArgAction, Command, arg};

pub const SELECT_CMD: &str = "select";

pub fn create_select_cli() -> Command {
    Command::new(SELECT_CMD)
        .about("Sum selected chromosome rows of context matrices into one row per matrix.")
        .arg(
            Arg::new("matrices")
                .required(true)
                .num_args(1..)
                .help("Context matrices written by the count command"),
        )
        .arg(
            arg!(-o --output <OUTPUT>)
                .required(false)
                .help("Output file (default: stdout)"),
        )
        .arg(
            arg!(-s --select <CHROMOSOME>)
                .required(false)
                .num_args(1..)
                .help("Chromosomes to sum (default: chrM)"),
        )
        .arg(
            arg!(-v --invert)
                .action(ArgAction::SetTrue)
                .help("Sum every chromosome except the selected ones"),
        )
        .arg(
            arg!(-a --append)
                .action(ArgAction::SetTrue)
                .help("Copy the original rows before each summary row"),
        )
        .arg(
            arg!(--name <NAME>)
                .required(false)
                .help("Name of the summary rows (default: the library name of each input)"),
        )
}
