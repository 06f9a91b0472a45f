use crate::cli::shared::OutputArgs;
use clap::Parser;
use routefmt::coordinate::{Coordinate, DEFAULT_DIGITS};
use std::ffi::OsString;
use std::io::Write;

/// Options of `coord` that take a value.
const VALUE_OPTIONS: [&str; 4] = ["-d", "--digits", "-o", "--output"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Show lat,lon coordinates rounded for display.", long_about=None, rename_all = "kebab-case", help_template = crate::cli::shared::HELP_TEMPLATE, arg_required_else_help = true)]
pub struct CoordCmdArgs {
    #[arg(
        help = "number of decimal digits",
        short = 'd',
        long = "digits",
        default_value_t = DEFAULT_DIGITS,
        allow_hyphen_values = true
    )]
    pub digits: i32,

    #[arg(help = "coordinates as lat,lon in decimal degrees", required = true)]
    pub coordinates: Vec<Coordinate>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Move the coordinates given to `coord` behind a `--` so that negative
/// latitudes are not taken for flags while options may still follow them.
/// Other command lines, and ones that already contain `--`, are returned as is.
pub fn reorder_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();
    if args.get(1).and_then(|a| a.to_str()) != Some("coord") || args.iter().any(|a| a == "--") {
        return args;
    }

    let mut options = args[..2].to_vec();
    let mut coordinates = Vec::new();
    let mut takes_value = false;
    for arg in args.into_iter().skip(2) {
        let is_coordinate = !takes_value
            && arg
                .to_str()
                .is_some_and(|s| s.contains(',') && s.parse::<Coordinate>().is_ok());
        takes_value = arg.to_str().is_some_and(|s| VALUE_OPTIONS.contains(&s));
        if is_coordinate {
            coordinates.push(arg);
        } else {
            options.push(arg);
        }
    }
    if !coordinates.is_empty() {
        options.push(OsString::from("--"));
        options.extend(coordinates);
    }
    options
}

pub fn coord_command(args: CoordCmdArgs) -> Result<(), Box<dyn std::error::Error>> {
    log::info!(
        "rounding {} coordinate(s) to {} digit(s)",
        args.coordinates.len(),
        args.digits
    );
    let mut out = args.output.writer()?;
    for c in &args.coordinates {
        writeln!(out, "{}", c.rounded(args.digits))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reorder(args: &[&str]) -> Vec<String> {
        reorder_args(args.iter().map(OsString::from))
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_reorder_moves_coordinates_behind_separator() {
        assert_eq!(
            reorder(&["routefmt", "coord", "-33.85,151.21", "-d", "2", "59.9,10.7", "-o", "-"]),
            vec!["routefmt", "coord", "-d", "2", "-o", "-", "--", "-33.85,151.21", "59.9,10.7"]
        );
    }

    #[test]
    fn test_reorder_keeps_option_values() {
        assert_eq!(
            reorder(&["routefmt", "coord", "-o", "1,2", "3,4"]),
            vec!["routefmt", "coord", "-o", "1,2", "--", "3,4"]
        );
    }

    #[test]
    fn test_reorder_leaves_other_commands() {
        let args = ["routefmt", "round", "-2.5", "-d", "1"];
        assert_eq!(reorder(&args), args.to_vec());

        let args = ["routefmt", "coord", "-d", "1", "--", "-1,2"];
        assert_eq!(reorder(&args), args.to_vec());
    }

    #[test]
    fn test_reorder_parses() {
        let args = reorder_args(
            ["routefmt", "coord", "-33.856784,151.215297", "-d", "2"]
                .iter()
                .map(OsString::from),
        );
        let parsed = CoordCmdArgs::try_parse_from(args.into_iter().skip(1)).unwrap();
        assert_eq!(parsed.digits, 2);
        assert_eq!(
            parsed.coordinates,
            vec![Coordinate::new(-33.856784, 151.215297).unwrap()]
        );
    }
}
