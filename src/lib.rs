//! routefmt formats the numbers a map or route display shows: rounded
//! values, travel times and distances, plus whole route summaries.

/// Half-up rounding to a number of decimal digits.
pub mod rounding;

/// Rendering of plain numbers.
pub mod formatting;

/// Travel time labels (`25min`, `1h:30m`).
pub mod duration;

/// Distance labels (`850 m`, `12.3 km`).
pub mod distance;

/// Latitude/longitude parsing and rounded display.
pub mod coordinate;

/// Route segments, parsing and summary reports.
pub mod route;

/// Opening plain or gzip-compressed input.
pub mod input;
