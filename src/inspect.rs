use crate::util::parse_items;
use crate::CliOptions;
use clap::Parser;
use itertools::Itertools;
use log::{info, warn};
use traitcontainer::interface::Sequence;

#[derive(Parser)]
pub struct InspectCommand {
    #[clap(short, long, help = "The sequence as comma separated integers, e.g. 10,20,30")]
    pub items: String,

    #[clap(
        long,
        help = "An index to access with the checked accessor and to convert to a cursor and back"
    )]
    pub index: Option<usize>,
}

pub(crate) fn inspect(_options: &CliOptions, subcommand: &InspectCommand) -> crate::Result<()> {
    let sequence = parse_items(&subcommand.items)?;
    info!("Inspecting sequence {}", sequence.to_debug_string());

    info!("Length: {}", sequence.length());
    info!("Distance from begin to end: {}", sequence.end() - sequence.begin());
    info!("Empty: {}", sequence.is_empty());

    match (sequence.front(), sequence.back()) {
        (Ok(front), Ok(back)) => info!("Front: {}, back: {}", front, back),
        (Err(e), _) | (_, Err(e)) => warn!("Cannot access front or back: {}", e),
    }

    info!("Reversed: [{}]", sequence.iter_rev().join(", "));

    if let Some(index) = subcommand.index {
        let item = sequence.at(index)?;
        let cursor = sequence.iterator_at(index);
        info!(
            "Item at index {}: {}, cursor {:?} maps back to index {}",
            index,
            item,
            cursor,
            sequence.index_of(cursor)?
        );
    }

    Ok(())
}
