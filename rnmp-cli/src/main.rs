mod count;
mod select;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "rnmp";
    pub const BIN_NAME: &str = "rnmp";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Count the sequence context of ribonucleotide incorporation sites, per library and per chromosome.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(count::cli::create_count_cli())
        .subcommand(select::cli::create_select_cli())
}

fn init_logging() {
    // RUST_LOG still wins when set
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // CONTEXT COUNTING
        //
        Some((count::cli::COUNT_CMD, matches)) => {
            count::handlers::run_count(matches)?;
        }

        //
        // CHROMOSOME SELECTION
        //
        Some((select::cli::SELECT_CMD, matches)) => {
            select::handlers::run_select(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
