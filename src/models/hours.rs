use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

/// Highest amount of hours a single day can carry.
pub const MAX_HOURS: f64 = 24.0;

/// Hours logged on a single day.
///
/// Values live in `[0, 24]` on a 0.5 grid and are kept as a count of half
/// hours, so totals and the "nothing logged" check are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Hours {
    halves: u8,
}

impl Hours {
    pub const ZERO: Hours = Hours { halves: 0 };

    pub fn from_f64(value: f64) -> AppResult<Self> {
        if !value.is_finite() || !(0.0..=MAX_HOURS).contains(&value) {
            return Err(AppError::InvalidHours(value.to_string()));
        }

        let doubled = value * 2.0;
        if doubled.fract() != 0.0 {
            return Err(AppError::InvalidHours(value.to_string()));
        }

        Ok(Self {
            halves: doubled as u8,
        })
    }

    pub fn halves(&self) -> u8 {
        self.halves
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.halves) / 2.0
    }

    pub fn is_zero(&self) -> bool {
        self.halves == 0
    }
}

impl FromStr for Hours {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Hours::ZERO);
        }

        // accept "7,5" as typed with a comma decimal separator
        let value: f64 = trimmed
            .replace(',', ".")
            .parse()
            .map_err(|_| AppError::InvalidHours(trimmed.to_string()))?;

        Hours::from_f64(value)
    }
}

impl TryFrom<f64> for Hours {
    type Error = AppError;

    fn try_from(value: f64) -> AppResult<Self> {
        Hours::from_f64(value)
    }
}

impl From<Hours> for f64 {
    fn from(h: Hours) -> f64 {
        h.as_f64()
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.halves % 2 == 0 {
            write!(f, "{}", self.halves / 2)
        } else {
            write!(f, "{}.5", self.halves / 2)
        }
    }
}

/// Sum of several days, which may exceed a single day's bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TotalHours {
    halves: u32,
}

impl TotalHours {
    pub fn as_f64(&self) -> f64 {
        f64::from(self.halves) / 2.0
    }

    pub fn is_zero(&self) -> bool {
        self.halves == 0
    }
}

impl<'a> Sum<&'a Hours> for TotalHours {
    fn sum<I: Iterator<Item = &'a Hours>>(iter: I) -> Self {
        TotalHours {
            halves: iter.map(|h| u32::from(h.halves)).sum(),
        }
    }
}

impl fmt::Display for TotalHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.halves % 2 == 0 {
            write!(f, "{}", self.halves / 2)
        } else {
            write!(f, "{}.5", self.halves / 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_half_hour_steps() {
        assert_eq!("7.5".parse::<Hours>().unwrap().halves(), 15);
        assert_eq!("7,5".parse::<Hours>().unwrap().halves(), 15);
        assert_eq!("".parse::<Hours>().unwrap(), Hours::ZERO);
        assert_eq!("24".parse::<Hours>().unwrap().to_string(), "24");
    }

    #[test]
    fn rejects_out_of_grid_values() {
        assert!(matches!("24.5".parse::<Hours>(), Err(AppError::InvalidHours(_))));
        assert!(matches!("-1".parse::<Hours>(), Err(AppError::InvalidHours(_))));
        assert!(matches!("7.25".parse::<Hours>(), Err(AppError::InvalidHours(_))));
        assert!(matches!("abc".parse::<Hours>(), Err(AppError::InvalidHours(_))));
    }

    #[test]
    fn totals_are_exact() {
        let days = [
            Hours::from_f64(7.5).unwrap(),
            Hours::from_f64(0.5).unwrap(),
            Hours::ZERO,
        ];
        let total: TotalHours = days.iter().sum();
        assert_eq!(total.as_f64(), 8.0);
        assert_eq!(total.to_string(), "8");
    }
}
