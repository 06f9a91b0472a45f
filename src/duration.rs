use crate::formatting::format_number;
use crate::rounding::round_half_up;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Format a travel time given in seconds as `"{m}min"` or, once it reaches an
/// hour, `"{h}h:{m}m"`. The time is first rounded to whole minutes.
///
/// # Examples
///
/// ```
/// use routefmt::duration::format_time;
///
/// assert_eq!(format_time(1500.0), "25min");
/// assert_eq!(format_time(5400.0), "1h:30m");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = round_half_up(seconds / 60.0);
    let hours = (total / 60.0).trunc();
    if hours > 0.0 && hours.is_finite() {
        let minutes = total - hours * 60.0;
        format!("{}h:{}m", format_number(hours), format_number(minutes))
    } else {
        format!("{}min", format_number(total))
    }
}

/// A travel time in seconds. Displays through [`format_time`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct TravelTime(pub f64);

impl TravelTime {
    pub fn seconds(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.0))
    }
}

impl Add for TravelTime {
    type Output = TravelTime;

    fn add(self, rhs: TravelTime) -> TravelTime {
        TravelTime(self.0 + rhs.0)
    }
}

impl Sum for TravelTime {
    fn sum<I: Iterator<Item = TravelTime>>(iter: I) -> Self {
        iter.fold(TravelTime::default(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a TravelTime> for TravelTime {
    fn sum<I: Iterator<Item = &'a TravelTime>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_minutes() {
        assert_eq!(format_time(0.0), "0min");
        assert_eq!(format_time(29.0), "0min");
        assert_eq!(format_time(30.0), "1min");
        assert_eq!(format_time(90.0), "2min");
        assert_eq!(format_time(1500.0), "25min");
        assert_eq!(format_time(3569.0), "59min");
    }

    #[test]
    fn test_format_time_hours() {
        assert_eq!(format_time(3570.0), "1h:0m");
        assert_eq!(format_time(3600.0), "1h:0m");
        assert_eq!(format_time(5400.0), "1h:30m");
        assert_eq!(format_time(7500.0), "2h:5m");
        assert_eq!(format_time(90000.0), "25h:0m");
    }

    #[test]
    fn test_format_time_negative() {
        assert_eq!(format_time(-90.0), "-1min");
        assert_eq!(format_time(-7200.0), "-120min");
    }

    #[test]
    fn test_format_time_non_finite() {
        assert_eq!(format_time(f64::NAN), "NaNmin");
        assert_eq!(format_time(f64::INFINITY), "infmin");
    }

    #[test]
    fn test_travel_time_sum_and_display() {
        let times = [TravelTime(1800.0), TravelTime(1800.0), TravelTime(600.0)];
        let total: TravelTime = times.iter().sum();
        assert_eq!(total, TravelTime(4200.0));
        assert_eq!(total.to_string(), "1h:10m");
    }
}
