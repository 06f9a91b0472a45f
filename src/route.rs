use crate::distance::Distance;
use crate::duration::TravelTime;
use clap::ValueEnum;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::str::FromStr;

/// One maneuver of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub distance: Distance,
    pub travel_time: TravelTime,
    pub instruction: String,
}

/// An ordered list of route segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub segments: Vec<Segment>,
}

impl Route {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn total_distance(&self) -> Distance {
        self.segments.iter().map(|s| s.distance).sum()
    }

    pub fn total_travel_time(&self) -> TravelTime {
        self.segments.iter().map(|s| s.travel_time).sum()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Debug)]
pub enum RouteError {
    Io(io::Error),
    MissingField {
        line: usize,
        field: &'static str,
    },
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Io(e) => write!(f, "error reading route: {}", e),
            RouteError::MissingField { line, field } => {
                write!(f, "line {}: missing {} field", line, field)
            }
            RouteError::InvalidNumber { line, field, value } => {
                write!(f, "line {}: invalid {} value: {:?}", line, field, value)
            }
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RouteError {
    fn from(e: io::Error) -> Self {
        RouteError::Io(e)
    }
}

fn parse_quantity(value: &str, line: usize, field: &'static str) -> Result<f64, RouteError> {
    let invalid = || RouteError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    };
    let v = value.trim().parse::<f64>().map_err(|_| invalid())?;
    if !v.is_finite() || v < 0.0 {
        return Err(invalid());
    }
    Ok(v)
}

/// Parse a route from tab-separated `distance_m<TAB>time_s[<TAB>instruction]`
/// lines. Blank lines and `#` comments are skipped.
pub fn parse_route<R>(reader: R) -> Result<Route, RouteError>
where
    R: Read,
{
    let mut reader = BufReader::new(reader);
    let mut segments = Vec::new();
    let mut line = String::new();
    let mut line_number = 0;
    while reader.read_line(&mut line)? > 0 {
        line_number += 1;
        let content = line.trim_end_matches(['\n', '\r']);
        if content.trim().is_empty() || content.trim_start().starts_with('#') {
            line.clear();
            continue;
        }
        let mut fields = content.splitn(3, '\t');
        let distance = match fields.next() {
            Some(d) if !d.trim().is_empty() => parse_quantity(d, line_number, "distance")?,
            _ => {
                return Err(RouteError::MissingField {
                    line: line_number,
                    field: "distance",
                })
            }
        };
        let travel_time = match fields.next() {
            Some(t) => parse_quantity(t, line_number, "time")?,
            None => {
                return Err(RouteError::MissingField {
                    line: line_number,
                    field: "time",
                })
            }
        };
        let instruction = fields.next().unwrap_or("").trim().replace('\t', " ");

        if distance == 0.0 && travel_time == 0.0 {
            log::warn!("line {}: zero-length segment: {:?}", line_number, content);
        }
        log::debug!(
            "segment {}: {} m, {} s, {:?}",
            segments.len() + 1,
            distance,
            travel_time,
            instruction
        );
        segments.push(Segment {
            distance: Distance(distance),
            travel_time: TravelTime(travel_time),
            instruction,
        });
        line.clear();
    }
    Ok(Route { segments })
}

/// ReportFormat selects how a route summary is written.
#[derive(Eq, PartialEq, Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Header with totals followed by a numbered list of maneuvers.
    #[value(name = "text")]
    Text,
    /// One tab-separated row per segment plus a final total row.
    #[value(name = "tsv")]
    Tsv,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Tsv => write!(f, "tsv"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Write a summary of `route` to `writer`.
pub fn write_report<W: Write>(
    route: &Route,
    format: ReportFormat,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => {
            writeln!(writer, "Travel time: {}", route.total_travel_time())?;
            writeln!(writer, "Distance: {}", route.total_distance())?;
            for (i, s) in route.segments.iter().enumerate() {
                let instruction = if s.instruction.is_empty() {
                    "-"
                } else {
                    s.instruction.as_str()
                };
                writeln!(writer, "{}. {}  ({})", i + 1, instruction, s.distance)?;
            }
        }
        ReportFormat::Tsv => {
            writeln!(writer, "#instruction\tdistance\ttime")?;
            for s in &route.segments {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    s.instruction, s.distance, s.travel_time
                )?;
            }
            writeln!(
                writer,
                "total\t{}\t{}",
                route.total_distance(),
                route.total_travel_time()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE: &str = "# distance_m\ttime_s\tinstruction
120\t25\tHead north on Karl Johans gate

1350\t180\tTurn right onto Akersgata
45000\t2400\tContinue onto E18\tthen keep left
";

    fn report(route: &Route, format: ReportFormat) -> String {
        let mut out = Vec::new();
        write_report(route, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_route() {
        let route = parse_route(ROUTE.as_bytes()).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route.segments[0].distance, Distance(120.0));
        assert_eq!(route.segments[0].travel_time, TravelTime(25.0));
        assert_eq!(route.segments[1].instruction, "Turn right onto Akersgata");
        assert_eq!(
            route.segments[2].instruction,
            "Continue onto E18 then keep left"
        );
        assert_eq!(route.total_distance(), Distance(46470.0));
        assert_eq!(route.total_travel_time(), TravelTime(2605.0));
    }

    #[test]
    fn test_parse_route_missing_instruction_and_crlf() {
        let route = parse_route("500\t60\r\n".as_bytes()).unwrap();
        assert_eq!(route.segments[0].instruction, "");
        assert_eq!(route.segments[0].travel_time, TravelTime(60.0));
    }

    #[test]
    fn test_parse_route_empty() {
        let route = parse_route("# nothing here\n\n".as_bytes()).unwrap();
        assert!(route.is_empty());
        assert_eq!(route.total_distance(), Distance(0.0));
    }

    #[test]
    fn test_parse_route_indented_comment() {
        let route = parse_route("  # note\n100\t10\n\t# another\n".as_bytes()).unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route.segments[0].distance, Distance(100.0));
    }

    #[test]
    fn test_parse_route_missing_distance() {
        let err = parse_route("\t10\tTurn left\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            RouteError::MissingField {
                line: 1,
                field: "distance"
            }
        ));
    }

    #[test]
    fn test_parse_route_io_error() {
        use std::error::Error;

        let err = parse_route(&b"100\t10\n\xff\xfe\t20\n"[..]).unwrap_err();
        assert!(matches!(err, RouteError::Io(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("error reading route: "));
    }

    #[test]
    fn test_parse_route_missing_time() {
        let err = parse_route("100\t10\n250\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            RouteError::MissingField {
                line: 2,
                field: "time"
            }
        ));
        assert_eq!(err.to_string(), "line 2: missing time field");
    }

    #[test]
    fn test_parse_route_invalid_numbers() {
        let err = parse_route("# header\nfar\t10\n".as_bytes()).unwrap_err();
        match err {
            RouteError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "distance");
                assert_eq!(value, "far");
            }
            e => panic!("unexpected error: {}", e),
        }

        for bad in ["-5\t10\n", "5\t-10\n", "NaN\t10\n", "5\tinf\n"] {
            assert!(
                matches!(
                    parse_route(bad.as_bytes()),
                    Err(RouteError::InvalidNumber { line: 1, .. })
                ),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_text_report() {
        let route = parse_route(ROUTE.as_bytes()).unwrap();
        assert_eq!(
            report(&route, ReportFormat::Text),
            "Travel time: 43min
Distance: 46.5 km
1. Head north on Karl Johans gate  (120 m)
2. Turn right onto Akersgata  (1.4 km)
3. Continue onto E18 then keep left  (45 km)
"
        );
    }

    #[test]
    fn test_tsv_report() {
        let mut route = parse_route("800\t95\n".as_bytes()).unwrap();
        route.segments.push(Segment {
            distance: Distance(150_000.0),
            travel_time: TravelTime(5400.0),
            instruction: "Merge".to_string(),
        });
        assert_eq!(
            report(&route, ReportFormat::Tsv),
            "#instruction\tdistance\ttime
\t800 m\t2min
Merge\t150 km\t1h:30m
total\t151 km\t1h:32m
"
        );
    }

    #[test]
    fn test_text_report_empty_instruction() {
        let route = parse_route("10\t5\n".as_bytes()).unwrap();
        assert_eq!(
            report(&route, ReportFormat::Text),
            "Travel time: 0min\nDistance: 10 m\n1. -  (10 m)\n"
        );
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("TSV".parse::<ReportFormat>(), Ok(ReportFormat::Tsv));
        assert_eq!("text".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("json".parse::<ReportFormat>().is_err());
    }
}
