// Reporting interval of the energy endpoints
use crate::domain::error::DomainError;
use chrono::TimeDelta;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    QuarterOfAnHour,
    Hour,
    Day,
    Week,
}

impl Granularity {
    /// Vendor spelling, used both on the wire and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuarterOfAnHour => "QUARTER_OF_AN_HOUR",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
        }
    }

    /// Length of one reporting interval.
    pub fn interval(self) -> TimeDelta {
        match self {
            Self::QuarterOfAnHour => TimeDelta::minutes(15),
            Self::Hour => TimeDelta::hours(1),
            Self::Day => TimeDelta::days(1),
            Self::Week => TimeDelta::days(7),
        }
    }
}

impl FromStr for Granularity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUARTER_OF_AN_HOUR" => Ok(Self::QuarterOfAnHour),
            "HOUR" => Ok(Self::Hour),
            "DAY" => Ok(Self::Day),
            "WEEK" => Ok(Self::Week),
            other => Err(DomainError::UnsupportedGranularity(other.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interval length for a vendor `timeUnit` string.
pub fn interval_duration(time_unit: &str) -> Result<TimeDelta, DomainError> {
    Ok(time_unit.parse::<Granularity>()?.interval())
}
