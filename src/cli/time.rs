use crate::cli::shared::{values_or_stdin, write_labels, OutputArgs};
use clap::Parser;
use routefmt::duration::format_time;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Format travel times given in seconds.",
    long_about = None,
    rename_all = "kebab-case",
    allow_negative_numbers = true,
    help_template = crate::cli::shared::HELP_TEMPLATE,
    after_long_help = "\
EXAMPLES:
    $ routefmt time 1500 5400
    25min
    1h:30m

    With no values, one number per line is read from stdin:

    $ printf '90\\n7500\\n' | routefmt time
    2min
    2h:5m"
)]
pub struct TimeCmdArgs {
    #[arg(help = "travel times in seconds (default: read from stdin)")]
    pub seconds: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn time_command(args: TimeCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let values = values_or_stdin(&args.seconds)?;
    log::info!("formatting {} travel time value(s)", values.len());
    write_labels(&values, &args.output, format_time)
}
