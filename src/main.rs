#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod compare;
mod inspect;
mod sort;
mod util;

error_chain! {
    foreign_links {
        ParseInt(std::num::ParseIntError);
    }

    links {
        Container(traitcontainer::Error, traitcontainer::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }
    }
}

#[derive(Parser)]
#[clap(name = "Container CLI", version = env!("CARGO_PKG_VERSION"), author = "Sebastian Schmidt <sebastian.schmidt@helsinki.fi>")]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Walks a sequence with cursors and prints its length, bounds, reverse order and the element at an index."
    )]
    Inspect(inspect::InspectCommand),
    #[clap(about = "Compares two sequences lexicographically.")]
    Compare(compare::CompareCommand),
    #[clap(about = "Sorts a sequence and verifies the result with a cursor algorithm.")]
    Sort(sort::SortCommand),
}

// The main is unpacked from an error-chain macro.
// Using just the macro makes IntelliJ complain that there would be no main.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    match &options.subcommand {
        Command::Inspect(subcommand) => inspect::inspect(options, subcommand),
        Command::Compare(subcommand) => compare::compare(options, subcommand),
        Command::Sort(subcommand) => sort::sort(options, subcommand),
    }?;

    Ok(())
}
