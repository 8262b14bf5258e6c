use crate::util::parse_items;
use crate::CliOptions;
use clap::Parser;
use log::info;
use std::cmp::Ordering;
use traitcontainer::interface::Sequence;

#[derive(Parser)]
pub struct CompareCommand {
    #[clap(short, long, help = "The left sequence as comma separated integers")]
    pub left: String,

    #[clap(short, long, help = "The right sequence as comma separated integers")]
    pub right: String,
}

pub(crate) fn compare(_options: &CliOptions, subcommand: &CompareCommand) -> crate::Result<()> {
    let left = parse_items(&subcommand.left)?;
    let right = parse_items(&subcommand.right)?;
    info!(
        "Comparing {} with {}",
        left.to_debug_string(),
        right.to_debug_string()
    );

    let relation = match left.sequence_cmp(&right) {
        Ordering::Less => "less than",
        Ordering::Equal => "equal to",
        Ordering::Greater => "greater than",
    };
    info!("The left sequence is {} the right sequence", relation);

    info!("==: {}", left.sequence_eq(&right));
    info!("!=: {}", left.sequence_ne(&right));
    info!("<: {}", left.sequence_lt(&right));
    info!("<=: {}", left.sequence_le(&right));
    info!(">: {}", left.sequence_gt(&right));
    info!(">=: {}", left.sequence_ge(&right));

    Ok(())
}
