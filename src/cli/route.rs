use crate::cli::shared::OutputArgs;
use clap::Parser;
use routefmt::route::{parse_route, write_report, ReportFormat};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Summarize a route: total travel time and distance plus one line per maneuver.",
    long_about = None,
    rename_all = "kebab-case",
    help_template = crate::cli::shared::HELP_TEMPLATE,
    arg_required_else_help = true,
    after_long_help = "\
INPUT:
    Tab-separated lines of distance_m, time_s and an optional instruction.
    Blank lines and lines starting with # are ignored. Input may be gzipped.

EXAMPLES:
    Given route.tsv:
        120\t25\tHead north
        1350\t180\tTurn right onto Akersgata

    $ routefmt route route.tsv
    Travel time: 3min
    Distance: 1.5 km
    1. Head north  (120 m)
    2. Turn right onto Akersgata  (1.4 km)

    $ routefmt route -f tsv route.tsv
    #instruction\tdistance\ttime
    Head north\t120 m\t0min
    Turn right onto Akersgata\t1.4 km\t3min
    total\t1.5 km\t3min"
)]
pub struct RouteCmdArgs {
    #[arg(help = "route file (- for stdin)")]
    pub input_path: PathBuf,

    #[arg(
        help = "report format",
        short = 'f',
        long = "format",
        default_value = "text"
    )]
    pub format: ReportFormat,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn route_command(args: RouteCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let reader = routefmt::input::open(&args.input_path)?;
    let route = parse_route(reader)?;
    log::info!(
        "read {} segment(s) from {}",
        route.len(),
        args.input_path.display()
    );
    if route.is_empty() {
        log::warn!("route in {} has no segments", args.input_path.display());
    }

    let mut out = args.output.writer()?;
    write_report(&route, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}
