use crate::util::parse_items;
use crate::CliOptions;
use clap::Parser;
use log::{error, info};
use traitcontainer::algorithm::is_sorted;
use traitcontainer::interface::{Sequence, SequenceMut};

#[derive(Parser)]
pub struct SortCommand {
    #[clap(short, long, help = "The sequence as comma separated integers")]
    pub items: String,

    #[clap(long, help = "Sort in non-increasing instead of non-decreasing order")]
    pub descending: bool,
}

pub(crate) fn sort(_options: &CliOptions, subcommand: &SortCommand) -> crate::Result<()> {
    let mut sequence = parse_items(&subcommand.items)?;
    info!("Sorting {}", sequence.to_debug_string());

    SequenceMut::sort(&mut sequence);
    let mut sorted = is_sorted(sequence.begin(), sequence.end());
    if subcommand.descending {
        SequenceMut::reverse(&mut sequence);
        sorted = sorted && is_sorted(sequence.rbegin(), sequence.rend());
    }

    if !sorted {
        error!("Sequence is not sorted after sorting");
        return Err("the sequence is not sorted after sorting".into());
    }

    info!("Sorted: {}", sequence.to_debug_string());
    Ok(())
}
