extern crate routefmt;
use clap::{Parser, Subcommand};
use std::env;
use std::process;

mod cli;
use cli::coord::{coord_command, CoordCmdArgs};
use cli::distance::{distance_command, DistanceCmdArgs};
use cli::round::{round_command, RoundCmdArgs};
use cli::route::{route_command, RouteCmdArgs};
use cli::time::{time_command, TimeCmdArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Format travel times, distances and routes for display.", long_about=None, rename_all = "kebab-case", help_template = cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Round values to a number of decimal digits.
    Round(RoundCmdArgs),
    /// Format travel times given in seconds.
    Time(TimeCmdArgs),
    /// Format distances given in meters.
    Distance(DistanceCmdArgs),
    /// Show coordinates rounded for display.
    Coord(CoordCmdArgs),
    /// Summarize a route file.
    Route(RouteCmdArgs),
}

#[cfg(feature = "mimalloc_allocator")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "routefmt=info");
    }
    env_logger::init();
    let cli = Cli::parse_from(cli::coord::reorder_args(env::args_os()));

    if let Err(e) = run(cli.command) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("{:?}", command);
    match command {
        Commands::Round(args) => round_command(args),
        Commands::Time(args) => time_command(args),
        Commands::Distance(args) => distance_command(args),
        Commands::Coord(args) => coord_command(args),
        Commands::Route(args) => route_command(args),
    }
}
