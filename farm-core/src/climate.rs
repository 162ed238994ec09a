//! Monthly climate and irrigation figures used by the pattern analyzer and
//! the seasonal summary.

use farm_utils::dates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyClimate {
    /// 1-12
    pub month: u32,
    /// Average temperature, °C
    pub temperature: f64,
    /// Average relative humidity, %
    pub humidity: f64,
    /// mm
    pub rainfall: f64,
    /// Average soil moisture, %
    pub soil_moisture: f64,
    /// Litres
    pub water_usage: f64,
    pub irrigation_hours: f64,
}

impl MonthlyClimate {
    /// Short month label, e.g. "Jan".
    pub fn label(&self) -> &'static str {
        dates::MONTH_ABBREVIATIONS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("")
    }

    pub fn season(&self) -> Season {
        Season::of_month(self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Dry,
    Rainy,
    Transition,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Dry, Season::Rainy, Season::Transition];

    /// Dry runs January through April, rainy July through September.
    pub fn of_month(month: u32) -> Season {
        match month {
            1..=4 => Season::Dry,
            7..=9 => Season::Rainy,
            _ => Season::Transition,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Dry => "Dry Season",
            Season::Rainy => "Rainy Season",
            Season::Transition => "Transition",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Season::Dry => "#f59e0b",
            Season::Rainy => "#3b82f6",
            Season::Transition => "#10b981",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_of_month() {
        assert_eq!(Season::of_month(1), Season::Dry);
        assert_eq!(Season::of_month(4), Season::Dry);
        assert_eq!(Season::of_month(5), Season::Transition);
        assert_eq!(Season::of_month(8), Season::Rainy);
        assert_eq!(Season::of_month(12), Season::Transition);
    }

    #[test]
    fn test_label() {
        let m = MonthlyClimate {
            month: 3,
            temperature: 27.0,
            humidity: 62.0,
            rainfall: 80.0,
            soil_moisture: 62.0,
            water_usage: 520.0,
            irrigation_hours: 208.0,
        };
        assert_eq!(m.label(), "Mar");
        assert_eq!(m.season(), Season::Dry);
    }
}
