use crate::cli::shared::{values_or_stdin, write_labels, OutputArgs};
use clap::Parser;
use routefmt::distance::format_distance;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Format distances given in meters.",
    long_about = None,
    rename_all = "kebab-case",
    allow_negative_numbers = true,
    help_template = crate::cli::shared::HELP_TEMPLATE,
    after_long_help = "\
EXAMPLES:
    $ routefmt distance 850 12345 245600
    850 m
    12.3 km
    246 km"
)]
pub struct DistanceCmdArgs {
    #[arg(help = "distances in meters (default: read from stdin)")]
    pub meters: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn distance_command(args: DistanceCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let values = values_or_stdin(&args.meters)?;
    log::info!("formatting {} distance value(s)", values.len());
    write_labels(&values, &args.output, format_distance)
}
