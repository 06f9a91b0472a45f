use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const HELP_TEMPLATE: &str =
    "{name} v{version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}{after-help}";

#[derive(Parser, Debug)]
pub struct OutputArgs {
    #[arg(
        help = "output file (default: stdout)",
        short = 'o',
        long = "output",
        default_value = "-"
    )]
    pub output_path: PathBuf,
}

impl OutputArgs {
    pub fn writer(&self) -> io::Result<Box<dyn Write>> {
        open_output(&self.output_path)
    }
}

/// Open `path` for writing; `-` is stdout.
pub fn open_output(path: &Path) -> io::Result<Box<dyn Write>> {
    if path.to_str() == Some("-") {
        Ok(Box::new(BufWriter::new(io::stdout().lock())))
    } else {
        let fh = File::create(path).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })?;
        Ok(Box::new(BufWriter::new(fh)))
    }
}

/// Read one number per line, skipping blank lines and `#` comments.
pub fn read_values<R: BufRead>(reader: R) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let mut values = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() || l.starts_with('#') {
            continue;
        }
        let v = l
            .parse::<f64>()
            .map_err(|_| format!("line {}: invalid number: {:?}", i + 1, l))?;
        values.push(v);
    }
    Ok(values)
}

/// Use `values` if any were given on the command line, otherwise read them from stdin.
pub fn values_or_stdin(values: &[f64]) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    if values.is_empty() {
        log::info!("no values given, reading from stdin");
        read_values(io::stdin().lock())
    } else {
        Ok(values.to_vec())
    }
}

/// Write one formatted label per value.
pub fn write_labels<F>(
    values: &[f64],
    output: &OutputArgs,
    label: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Fn(f64) -> String,
{
    let mut out = output.writer()?;
    for v in values {
        writeln!(out, "{}", label(*v))?;
    }
    out.flush()?;
    Ok(())
}
