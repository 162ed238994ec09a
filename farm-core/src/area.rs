//! Per-area sensor readings for the soil moisture, temperature and humidity pages.

use crate::error::{FarmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which sensor family a reading or series belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensorKind {
    SoilMoisture,
    Temperature,
    Humidity,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [
        SensorKind::SoilMoisture,
        SensorKind::Temperature,
        SensorKind::Humidity,
    ];

    /// Stable identifier used in fixtures and the database.
    pub fn id(&self) -> &'static str {
        match self {
            SensorKind::SoilMoisture => "soil-moisture",
            SensorKind::Temperature => "temperature",
            SensorKind::Humidity => "humidity",
        }
    }

    /// Display unit appended to values.
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::SoilMoisture | SensorKind::Humidity => "%",
            SensorKind::Temperature => "°C",
        }
    }

    /// Classify a value into the status band for this sensor kind.
    ///
    /// Soil moisture: below 50 is low, above 80 is high.
    /// Temperature: below 18 is cold, above 28 is hot.
    /// Humidity: below 50 is dry, above 80 is humid.
    pub fn classify(&self, value: f64) -> ReadingStatus {
        match self {
            SensorKind::SoilMoisture => {
                if value < 50.0 {
                    ReadingStatus::Low
                } else if value > 80.0 {
                    ReadingStatus::High
                } else {
                    ReadingStatus::Optimal
                }
            }
            SensorKind::Temperature => {
                if value < 18.0 {
                    ReadingStatus::Cold
                } else if value > 28.0 {
                    ReadingStatus::Hot
                } else {
                    ReadingStatus::Normal
                }
            }
            SensorKind::Humidity => {
                if value < 50.0 {
                    ReadingStatus::Dry
                } else if value > 80.0 {
                    ReadingStatus::Humid
                } else {
                    ReadingStatus::Normal
                }
            }
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SensorKind {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        SensorKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| FarmError::UnknownLabel {
                field: "sensor kind",
                value: s.to_string(),
            })
    }
}

/// Status category of an area reading. Which variants apply depends on the
/// [`SensorKind`]: soil uses optimal/low/high, temperature normal/hot/cold,
/// humidity normal/dry/humid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    Optimal,
    Low,
    High,
    Normal,
    Hot,
    Cold,
    Dry,
    Humid,
}

impl ReadingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingStatus::Optimal => "optimal",
            ReadingStatus::Low => "low",
            ReadingStatus::High => "high",
            ReadingStatus::Normal => "normal",
            ReadingStatus::Hot => "hot",
            ReadingStatus::Cold => "cold",
            ReadingStatus::Dry => "dry",
            ReadingStatus::Humid => "humid",
        }
    }

    /// True for the in-band statuses (optimal or normal).
    pub fn is_nominal(&self) -> bool {
        matches!(self, ReadingStatus::Optimal | ReadingStatus::Normal)
    }
}

/// Latest reading for one cultivation area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaReading {
    pub area_id: String,
    pub name: String,
    pub kind: SensorKind,
    pub value: f64,
    pub status: ReadingStatus,
    /// Human label such as "2 mins ago"
    pub last_updated: String,
}

impl AreaReading {
    /// Build a reading whose status is derived from the value.
    pub fn new(
        area_id: impl Into<String>,
        name: impl Into<String>,
        kind: SensorKind,
        value: f64,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            area_id: area_id.into(),
            name: name.into(),
            kind,
            value,
            status: kind.classify(value),
            last_updated: last_updated.into(),
        }
    }
}

/// One point in a sensor trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Time-of-day label, e.g. "8:41"
    pub time: String,
    pub value: f64,
}

/// Time window picker shared by the sensor pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Today,
    Week,
    Month,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Today, TimeRange::Week, TimeRange::Month];

    pub fn id(&self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Today => "Today",
            TimeRange::Week => "This Week",
            TimeRange::Month => "This Month",
        }
    }

    /// Parse a picker value; unknown values fall back to today.
    pub fn from_id(id: &str) -> Self {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.id() == id)
            .unwrap_or_default()
    }
}

/// Find the reading for `area_id`, falling back to the first one.
pub fn select_area<'a>(readings: &'a [AreaReading], area_id: &str) -> Option<&'a AreaReading> {
    readings
        .iter()
        .find(|r| r.area_id == area_id)
        .or_else(|| readings.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_soil() {
        assert_eq!(SensorKind::SoilMoisture.classify(45.0), ReadingStatus::Low);
        assert_eq!(SensorKind::SoilMoisture.classify(70.0), ReadingStatus::Optimal);
        assert_eq!(SensorKind::SoilMoisture.classify(85.0), ReadingStatus::High);
    }

    #[test]
    fn test_classify_temperature_bands_are_inclusive() {
        assert_eq!(SensorKind::Temperature.classify(16.0), ReadingStatus::Cold);
        assert_eq!(SensorKind::Temperature.classify(18.0), ReadingStatus::Normal);
        assert_eq!(SensorKind::Temperature.classify(28.0), ReadingStatus::Normal);
        assert_eq!(SensorKind::Temperature.classify(32.0), ReadingStatus::Hot);
    }

    #[test]
    fn test_classify_humidity() {
        assert_eq!(SensorKind::Humidity.classify(45.0), ReadingStatus::Dry);
        assert_eq!(SensorKind::Humidity.classify(68.0), ReadingStatus::Normal);
        assert_eq!(SensorKind::Humidity.classify(88.0), ReadingStatus::Humid);
    }

    #[test]
    fn test_sensor_kind_round_trips_through_id() {
        for kind in SensorKind::ALL {
            assert_eq!(kind.id().parse::<SensorKind>().unwrap(), kind);
        }
        assert!("wind".parse::<SensorKind>().is_err());
    }

    #[test]
    fn test_select_area_falls_back_to_first() {
        let readings = vec![
            AreaReading::new("area1", "Area 1", SensorKind::Humidity, 68.0, "2 mins ago"),
            AreaReading::new("area2", "Area 2", SensorKind::Humidity, 70.0, "3 mins ago"),
        ];
        assert_eq!(select_area(&readings, "area2").unwrap().name, "Area 2");
        assert_eq!(select_area(&readings, "area9").unwrap().name, "Area 1");
        assert!(select_area(&[], "area1").is_none());
    }

    #[test]
    fn test_time_range_from_unknown_id() {
        assert_eq!(TimeRange::from_id("week"), TimeRange::Week);
        assert_eq!(TimeRange::from_id("decade"), TimeRange::Today);
    }
}
