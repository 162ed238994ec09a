//! Constant datasets for charts and forecasts.
//!
//! These are fixed display values, not entity tables, so they are compiled
//! in rather than loaded into the database.

use farm_core::weather::{CurrentConditions, DailyForecast, HourlyForecast, WeatherIcon};
use serde::Serialize;

pub const DEFAULT_LOCATION: &str = "Dagupan, Pangasinan";

pub const CURRENT_CONDITIONS: CurrentConditions = CurrentConditions {
    city: "Dagupan",
    temperature: 33,
    feels_like: 41,
    condition: "Mostly Cloudy",
    high: 33,
    low: 25,
    precipitation_mm: 14,
    wind_kmh: 15,
    uv_index: "Extreme",
    humidity: 66,
};

const fn hour(time: &'static str, temperature: i32, icon: WeatherIcon, precipitation: u8) -> HourlyForecast {
    HourlyForecast { time, temperature, icon, precipitation }
}

const fn day(
    day: &'static str,
    high: i32,
    low: i32,
    condition: &'static str,
    icon: WeatherIcon,
) -> DailyForecast {
    DailyForecast { day, high, low, condition, icon }
}

pub const HOURLY_FORECAST: [HourlyForecast; 8] = [
    hour("1 PM", 33, WeatherIcon::Cloud, 10),
    hour("2 PM", 33, WeatherIcon::Cloud, 15),
    hour("3 PM", 33, WeatherIcon::Cloud, 20),
    hour("4 PM", 32, WeatherIcon::Rain, 60),
    hour("5 PM", 30, WeatherIcon::Rain, 80),
    hour("6 PM", 28, WeatherIcon::Rain, 70),
    hour("7 PM", 27, WeatherIcon::Rain, 50),
    hour("8 PM", 26, WeatherIcon::Cloud, 30),
];

pub const DAILY_FORECAST: [DailyForecast; 7] = [
    day("Today", 33, 25, "Thunderstorms", WeatherIcon::Rain),
    day("Tomorrow", 32, 24, "Partly Cloudy", WeatherIcon::Cloud),
    day("Wednesday", 34, 26, "Sunny", WeatherIcon::Sun),
    day("Thursday", 33, 25, "Scattered Showers", WeatherIcon::Rain),
    day("Friday", 31, 24, "Cloudy", WeatherIcon::Cloud),
    day("Saturday", 32, 25, "Partly Cloudy", WeatherIcon::Cloud),
    day("Sunday", 33, 26, "Sunny", WeatherIcon::Sun),
];

/// A named bar in the dashboard water usage chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarDatum {
    pub name: &'static str,
    pub value: f64,
}

/// One x position of the dashboard multi-line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineDatum {
    pub x: &'static str,
    pub line1: f64,
    pub line2: f64,
    pub line3: f64,
}

pub const DASHBOARD_BARS: [BarDatum; 5] = [
    BarDatum { name: "A", value: 7500.0 },
    BarDatum { name: "B", value: 6000.0 },
    BarDatum { name: "C", value: 5200.0 },
    BarDatum { name: "D", value: 4800.0 },
    BarDatum { name: "E", value: 4200.0 },
];

pub const DASHBOARD_LINES: [LineDatum; 8] = [
    LineDatum { x: "A", line1: 3000.0, line2: 6000.0, line3: 1000.0 },
    LineDatum { x: "B", line1: 3200.0, line2: 7500.0, line3: 2500.0 },
    LineDatum { x: "C", line1: 2800.0, line2: 6200.0, line3: 3500.0 },
    LineDatum { x: "D", line1: 4000.0, line2: 3500.0, line3: 4500.0 },
    LineDatum { x: "E", line1: 3500.0, line2: 4500.0, line3: 4800.0 },
    LineDatum { x: "F", line1: 2000.0, line2: 3000.0, line3: 3500.0 },
    LineDatum { x: "G", line1: 2500.0, line2: 4200.0, line3: 2800.0 },
    LineDatum { x: "H", line1: 6500.0, line2: 2000.0, line3: 1500.0 },
];

/// Soil moisture overview ring on the dashboard, percent.
pub const SOIL_OVERVIEW_PERCENT: f64 = 70.0;

/// Share of the year by season, percent.
pub const SEASONAL_SHARES: [(farm_core::climate::Season, f64); 3] = [
    (farm_core::climate::Season::Dry, 35.0),
    (farm_core::climate::Season::Rainy, 45.0),
    (farm_core::climate::Season::Transition, 20.0),
];

pub const SUMMARY_YEARS: [i32; 3] = [2025, 2024, 2023];

/// Factors with no monthly series; their coefficients are fixed.
pub const REFERENCE_FACTORS: [(&str, f64); 2] = [("Wind Speed", -0.23), ("UV Index", -0.18)];

#[cfg(test)]
mod tests {
    use super::*;
    use farm_core::weather::first_rain_hour;

    #[test]
    fn test_forecast_has_rain_window() {
        assert_eq!(first_rain_hour(&HOURLY_FORECAST).map(|h| h.time), Some("4 PM"));
        assert_eq!(DAILY_FORECAST[0].day, "Today");
    }

    #[test]
    fn test_seasonal_shares_cover_year() {
        let total: f64 = SEASONAL_SHARES.iter().map(|(_, share)| share).sum();
        assert_eq!(total, 100.0);
    }
}
