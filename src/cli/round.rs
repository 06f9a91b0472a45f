use crate::cli::shared::{write_labels, OutputArgs};
use clap::Parser;
use routefmt::formatting::format_number;
use routefmt::rounding::round_number;

#[derive(Parser, Debug)]
#[command(author, version, about = "Round values to a number of decimal digits (ties round up).", long_about=None, rename_all = "kebab-case", allow_negative_numbers = true, help_template = crate::cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
pub struct RoundCmdArgs {
    #[arg(
        help = "number of decimal digits. negative values round to tens, hundreds, ...",
        short = 'd',
        long = "digits",
        default_value = "0"
    )]
    pub digits: i32,

    #[arg(help = "values to round", required = true)]
    pub values: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn round_command(args: RoundCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("rounding {} value(s) to {} digit(s)", args.values.len(), args.digits);
    let digits = args.digits;
    write_labels(&args.values, &args.output, |v| {
        format_number(round_number(v, digits))
    })
}
