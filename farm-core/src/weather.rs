//! Forecast shapes for the weather page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Rain,
}

impl WeatherIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀",
            WeatherIcon::Cloud => "☁",
            WeatherIcon::Rain => "🌧",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyForecast {
    pub time: &'static str,
    pub temperature: i32,
    pub icon: WeatherIcon,
    /// Chance of precipitation, %
    pub precipitation: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub day: &'static str,
    pub high: i32,
    pub low: i32,
    pub condition: &'static str,
    pub icon: WeatherIcon,
}

/// Snapshot shown in the large current-weather card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub city: &'static str,
    pub temperature: i32,
    pub feels_like: i32,
    pub condition: &'static str,
    pub high: i32,
    pub low: i32,
    pub precipitation_mm: u32,
    pub wind_kmh: u32,
    pub uv_index: &'static str,
    pub humidity: u8,
}

/// Precipitation chance at or above which scheduled irrigation should be skipped.
pub const RAIN_SKIP_THRESHOLD: u8 = 60;

/// The first hour whose rain chance reaches [`RAIN_SKIP_THRESHOLD`].
pub fn first_rain_hour(hours: &[HourlyForecast]) -> Option<&HourlyForecast> {
    hours.iter().find(|h| h.precipitation >= RAIN_SKIP_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rain_hour() {
        let hours = [
            HourlyForecast { time: "1 PM", temperature: 33, icon: WeatherIcon::Cloud, precipitation: 10 },
            HourlyForecast { time: "4 PM", temperature: 32, icon: WeatherIcon::Rain, precipitation: 60 },
            HourlyForecast { time: "5 PM", temperature: 30, icon: WeatherIcon::Rain, precipitation: 80 },
        ];
        assert_eq!(first_rain_hour(&hours).map(|h| h.time), Some("4 PM"));
        assert!(first_rain_hour(&hours[..1]).is_none());
    }
}
