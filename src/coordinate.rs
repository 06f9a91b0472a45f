use crate::formatting::format_number;
use crate::rounding::round_number;
use std::fmt;
use std::str::FromStr;

/// Number of decimal digits used when a coordinate is shown to the user.
pub const DEFAULT_DIGITS: i32 = 4;

#[derive(Debug, PartialEq)]
pub enum CoordinateError {
    InvalidFormat(String),
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::InvalidFormat(s) => {
                write!(f, "invalid coordinate (expected lat,lon): {}", s)
            }
            CoordinateError::LatitudeOutOfRange(v) => {
                write!(f, "latitude out of range [-90, 90]: {}", v)
            }
            CoordinateError::LongitudeOutOfRange(v) => {
                write!(f, "longitude out of range [-180, 180]: {}", v)
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        // written so that NaN fails the range check
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Round both components to `digits` decimal places.
    pub fn rounded(&self, digits: i32) -> Coordinate {
        Coordinate {
            latitude: round_number(self.latitude, digits),
            longitude: round_number(self.longitude, digits),
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (lat, lon) = match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lon), None) => (lat.trim(), lon.trim()),
            _ => return Err(CoordinateError::InvalidFormat(s.to_string())),
        };
        let lat = lat
            .parse::<f64>()
            .map_err(|_| CoordinateError::InvalidFormat(s.to_string()))?;
        let lon = lon
            .parse::<f64>()
            .map_err(|_| CoordinateError::InvalidFormat(s.to_string()))?;
        Coordinate::new(lat, lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            format_number(self.latitude),
            format_number(self.longitude)
        )
    }
}
