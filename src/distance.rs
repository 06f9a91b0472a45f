use crate::formatting::format_number;
use crate::rounding::round_half_up;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Format a distance in meters.
///
/// Up to 1000 m the value is shown in whole meters. Above that it switches to
/// kilometers with one decimal, and above 100 km to whole kilometers.
///
/// # Examples
///
/// ```
/// use routefmt::distance::format_distance;
///
/// assert_eq!(format_distance(850.2), "850 m");
/// assert_eq!(format_distance(12_345.0), "12.3 km");
/// assert_eq!(format_distance(245_600.0), "246 km");
/// ```
pub fn format_distance(meters: f64) -> String {
    let dist = round_half_up(meters);
    if dist > 100_000.0 {
        format!("{} km", format_number(round_half_up(dist / 1000.0)))
    } else if dist > 1000.0 {
        format!("{} km", format_number(round_half_up(dist / 100.0) / 10.0))
    } else {
        format!("{} m", format_number(dist))
    }
}

/// A distance in meters. Displays through [`format_distance`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub fn meters(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_distance(self.0))
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0 + rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Self {
        iter.fold(Distance::default(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a Distance> for Distance {
    fn sum<I: Iterator<Item = &'a Distance>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
