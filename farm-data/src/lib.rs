//! Data processing for the dashboard pages.
//!
//! This crate turns the raw readings and monthly climate rows into the
//! figures the pages display: stat cards, correlation tables and seasonal
//! totals. Constant datasets that are not entity tables live in [`datasets`].

pub mod datasets;

/// Simple reductions over numeric series.
pub mod stats {
    use farm_core::area::{AreaReading, SeriesPoint};

    pub fn average(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    pub fn min(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::min)
    }

    pub fn max(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::max)
    }

    /// Round to one decimal place.
    pub fn round1(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }

    /// Current / average / min / max of a trend series.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SeriesSummary {
        pub current: f64,
        pub average: f64,
        pub min: f64,
        pub max: f64,
    }

    /// Summarize a series; `None` when it is empty.
    pub fn summarize_series(points: &[SeriesPoint]) -> Option<SeriesSummary> {
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        Some(SeriesSummary {
            current: *values.last()?,
            average: round1(average(&values)?),
            min: min(&values)?,
            max: max(&values)?,
        })
    }

    /// Highest and lowest reading across areas (first wins on ties).
    pub fn extremes(readings: &[AreaReading]) -> Option<(&AreaReading, &AreaReading)> {
        let mut iter = readings.iter();
        let first = iter.next()?;
        let (mut hi, mut lo) = (first, first);
        for r in iter {
            if r.value > hi.value {
                hi = r;
            }
            if r.value < lo.value {
                lo = r;
            }
        }
        Some((hi, lo))
    }

    /// Number of areas whose status is outside the nominal band.
    pub fn alert_count(readings: &[AreaReading]) -> usize {
        readings.iter().filter(|r| !r.status.is_nominal()).count()
    }

    /// Pearson correlation coefficient of two equal-length samples.
    ///
    /// Returns `None` if the lengths differ, there are fewer than two samples,
    /// or either sample has zero variance.
    pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
        if xs.len() != ys.len() || xs.len() < 2 {
            return None;
        }
        let mx = average(xs)?;
        let my = average(ys)?;
        let (mut cov, mut vx, mut vy) = (0.0, 0.0, 0.0);
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - mx;
            let dy = y - my;
            cov += dx * dy;
            vx += dx * dx;
            vy += dy * dy;
        }
        if vx == 0.0 || vy == 0.0 {
            return None;
        }
        Some(cov / (vx.sqrt() * vy.sqrt()))
    }

    /// Scale a temperature on the 0-40 °C gauge to a 0-100 % position.
    pub fn gauge_position(temperature: f64) -> f64 {
        const MIN: f64 = 0.0;
        const MAX: f64 = 40.0;
        (((temperature - MIN) / (MAX - MIN)) * 100.0).clamp(0.0, 100.0)
    }

    /// Stroke offset for a progress ring of the given radius.
    pub fn ring_dash_offset(radius: f64, percentage: f64) -> f64 {
        let circumference = 2.0 * std::f64::consts::PI * radius;
        circumference * (1.0 - percentage.clamp(0.0, 100.0) / 100.0)
    }

    /// (top, bottom) gradient stops for a temperature bar.
    pub fn temperature_gradient(temperature: f64) -> (&'static str, &'static str) {
        if temperature < 18.0 {
            ("#60a5fa", "#2563eb")
        } else if temperature <= 28.0 {
            ("#4ade80", "#16a34a")
        } else {
            ("#f87171", "#dc2626")
        }
    }

    /// (top, bottom) gradient stops for a humidity bar.
    pub fn humidity_gradient(humidity: f64) -> (&'static str, &'static str) {
        if humidity < 50.0 {
            ("#facc15", "#f97316")
        } else if humidity <= 80.0 {
            ("#60a5fa", "#2563eb")
        } else {
            ("#2563eb", "#4338ca")
        }
    }

    /// CSS `linear-gradient` for a pair of stops.
    pub fn css_gradient((top, bottom): (&str, &str)) -> String {
        format!("linear-gradient(to top, {}, {})", bottom, top)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use farm_core::area::SensorKind;

        #[test]
        fn test_basic_reductions() {
            let v = [65.0, 72.0, 68.0];
            assert_eq!(average(&v), Some(205.0 / 3.0));
            assert_eq!(min(&v), Some(65.0));
            assert_eq!(max(&v), Some(72.0));
            assert_eq!(average(&[]), None);
            assert_eq!(min(&[]), None);
        }

        #[test]
        fn test_round1() {
            assert_eq!(round1(69.666), 69.7);
            assert_eq!(round1(27.333), 27.3);
        }

        #[test]
        fn test_summarize_series() {
            let points: Vec<SeriesPoint> = [65.0, 72.0, 68.0, 75.0]
                .iter()
                .enumerate()
                .map(|(i, v)| SeriesPoint { time: format!("8:4{}", i + 1), value: *v })
                .collect();
            let s = summarize_series(&points).unwrap();
            assert_eq!(s.current, 75.0);
            assert_eq!(s.average, 70.0);
            assert_eq!(s.min, 65.0);
            assert_eq!(s.max, 75.0);
            assert!(summarize_series(&[]).is_none());
        }

        #[test]
        fn test_extremes_and_alerts() {
            let readings = vec![
                AreaReading::new("area1", "Area 1", SensorKind::Temperature, 25.0, "now"),
                AreaReading::new("area3", "Area 3", SensorKind::Temperature, 32.0, "now"),
                AreaReading::new("area5", "Area 5", SensorKind::Temperature, 16.0, "now"),
            ];
            let (hi, lo) = extremes(&readings).unwrap();
            assert_eq!(hi.area_id, "area3");
            assert_eq!(lo.area_id, "area5");
            assert_eq!(alert_count(&readings), 2);
        }

        #[test]
        fn test_pearson() {
            let xs = [1.0, 2.0, 3.0, 4.0];
            let up = [2.0, 4.0, 6.0, 8.0];
            let down = [8.0, 6.0, 4.0, 2.0];
            assert!((pearson(&xs, &up).unwrap() - 1.0).abs() < 1e-9);
            assert!((pearson(&xs, &down).unwrap() + 1.0).abs() < 1e-9);
            assert_eq!(pearson(&xs, &[1.0, 1.0, 1.0, 1.0]), None);
            assert_eq!(pearson(&xs, &up[..3]), None);
        }

        #[test]
        fn test_gauge_position_clamps() {
            assert_eq!(gauge_position(20.0), 50.0);
            assert_eq!(gauge_position(-5.0), 0.0);
            assert_eq!(gauge_position(45.0), 100.0);
        }

        #[test]
        fn test_ring_offset() {
            assert_eq!(ring_dash_offset(56.0, 100.0), 0.0);
            let full = 2.0 * std::f64::consts::PI * 56.0;
            assert!((ring_dash_offset(56.0, 70.0) - full * 0.3).abs() < 1e-9);
        }

        #[test]
        fn test_gradients() {
            assert_eq!(temperature_gradient(16.0).0, "#60a5fa");
            assert_eq!(temperature_gradient(28.0).0, "#4ade80");
            assert_eq!(temperature_gradient(28.5).0, "#f87171");
            assert_eq!(humidity_gradient(88.0).1, "#4338ca");
            assert_eq!(humidity_gradient(45.0).0, "#facc15");
            assert_eq!(
                css_gradient(("#fff", "#000")),
                "linear-gradient(to top, #000, #fff)"
            );
        }
    }
}

/// Correlation of soil moisture against environmental factors.
pub mod correlation {
    use crate::stats::pearson;
    use farm_core::climate::MonthlyClimate;
    use serde::Serialize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum Impact {
        High,
        Medium,
        Low,
    }

    impl Impact {
        /// |r| >= 0.8 is high, >= 0.4 medium, anything else low.
        pub fn of(correlation: f64) -> Self {
            let r = correlation.abs();
            if r >= 0.8 {
                Impact::High
            } else if r >= 0.4 {
                Impact::Medium
            } else {
                Impact::Low
            }
        }

        pub fn label(&self) -> &'static str {
            match self {
                Impact::High => "High",
                Impact::Medium => "Medium",
                Impact::Low => "Low",
            }
        }

        /// (background, text) colours for the impact badge.
        pub fn badge_colors(&self) -> (&'static str, &'static str) {
            match self {
                Impact::High => ("#fee2e2", "#991b1b"),
                Impact::Medium => ("#fef9c3", "#854d0e"),
                Impact::Low => ("#dcfce7", "#166534"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct FactorCorrelation {
        pub factor: &'static str,
        pub correlation: f64,
        pub impact: Impact,
    }

    impl FactorCorrelation {
        pub fn new(factor: &'static str, correlation: f64) -> Self {
            Self {
                factor,
                correlation,
                impact: Impact::of(correlation),
            }
        }
    }

    /// Soil moisture correlated with rainfall, humidity and temperature,
    /// followed by the fixed reference factors with no monthly series.
    pub fn soil_moisture_factors(months: &[MonthlyClimate]) -> Vec<FactorCorrelation> {
        let soil: Vec<f64> = months.iter().map(|m| m.soil_moisture).collect();
        let columns: [(&'static str, fn(&MonthlyClimate) -> f64); 3] = [
            ("Rainfall", |m| m.rainfall),
            ("Humidity", |m| m.humidity),
            ("Temperature", |m| m.temperature),
        ];

        let mut out = Vec::with_capacity(columns.len() + crate::datasets::REFERENCE_FACTORS.len());
        for (factor, column) in columns {
            let values: Vec<f64> = months.iter().map(column).collect();
            match pearson(&soil, &values) {
                Some(r) => out.push(FactorCorrelation::new(factor, (r * 100.0).round() / 100.0)),
                None => log::debug!("correlation: skipped {} (degenerate series)", factor),
            }
        }
        out.extend(
            crate::datasets::REFERENCE_FACTORS
                .iter()
                .map(|&(factor, r)| FactorCorrelation::new(factor, r)),
        );
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn month(m: u32, t: f64, h: f64, r: f64, s: f64) -> MonthlyClimate {
            MonthlyClimate {
                month: m,
                temperature: t,
                humidity: h,
                rainfall: r,
                soil_moisture: s,
                water_usage: 0.0,
                irrigation_hours: 0.0,
            }
        }

        #[test]
        fn test_impact_thresholds() {
            assert_eq!(Impact::of(0.92), Impact::High);
            assert_eq!(Impact::of(0.78), Impact::Medium);
            assert_eq!(Impact::of(-0.45), Impact::Medium);
            assert_eq!(Impact::of(-0.23), Impact::Low);
        }

        #[test]
        fn test_soil_moisture_factors() {
            let months = vec![
                month(1, 30.0, 60.0, 100.0, 60.0),
                month(2, 28.0, 65.0, 150.0, 65.0),
                month(3, 26.0, 70.0, 200.0, 70.0),
            ];
            let factors = soil_moisture_factors(&months);
            assert_eq!(factors[0].factor, "Rainfall");
            assert_eq!(factors[0].correlation, 1.0);
            assert_eq!(factors[0].impact, Impact::High);
            assert_eq!(factors[2].factor, "Temperature");
            assert_eq!(factors[2].correlation, -1.0);
            assert_eq!(factors.len(), 3 + crate::datasets::REFERENCE_FACTORS.len());
        }
    }
}

/// Recommendation lines for the sensor pages.
pub mod advice {
    use farm_core::area::{AreaReading, ReadingStatus, SensorKind};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Tone {
        Warning,
        Info,
        Ok,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Advice {
        pub tone: Tone,
        /// Bolded area name, empty for the summary line
        pub subject: String,
        pub text: String,
    }

    fn value_label(reading: &AreaReading) -> String {
        format!("{}{}", reading.value, reading.kind.unit())
    }

    /// Advice for a single out-of-band area; `None` when it is nominal.
    pub fn for_area(reading: &AreaReading) -> Option<Advice> {
        let v = value_label(reading);
        let (tone, text) = match (reading.kind, reading.status) {
            (SensorKind::SoilMoisture, ReadingStatus::Low) => (
                Tone::Warning,
                format!("has low moisture ({}). Consider irrigation within the next 2 hours.", v),
            ),
            (SensorKind::SoilMoisture, ReadingStatus::High) => (
                Tone::Info,
                format!("moisture is high ({}). Reduce watering schedule to prevent over-saturation.", v),
            ),
            (SensorKind::Temperature, ReadingStatus::Hot) => (
                Tone::Warning,
                format!("temperature is high ({}). Consider increased watering or shade installation.", v),
            ),
            (SensorKind::Temperature, ReadingStatus::Cold) => (
                Tone::Info,
                format!("temperature is low ({}). Monitor for frost risk during night hours.", v),
            ),
            (SensorKind::Humidity, ReadingStatus::Humid) => (
                Tone::Warning,
                format!("humidity is high ({}). Improve ventilation to prevent fungal growth.", v),
            ),
            (SensorKind::Humidity, ReadingStatus::Dry) => (
                Tone::Info,
                format!("humidity is low ({}). Increase misting or watering frequency.", v),
            ),
            _ => return None,
        };
        Some(Advice {
            tone,
            subject: reading.name.clone(),
            text,
        })
    }

    /// "1, 2, and 6" style list of area numbers taken from the names.
    fn join_names(names: &[String]) -> String {
        let short: Vec<&str> = names
            .iter()
            .map(|n| n.strip_prefix("Area ").unwrap_or(n))
            .collect();
        match short.as_slice() {
            [] => String::new(),
            [one] => one.to_string(),
            [a, b] => format!("{} and {}", a, b),
            [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
        }
    }

    /// Per-area advice followed by one summary line for the nominal areas.
    pub fn for_readings(readings: &[AreaReading]) -> Vec<Advice> {
        let mut out: Vec<Advice> = readings.iter().filter_map(for_area).collect();
        let nominal: Vec<String> = readings
            .iter()
            .filter(|r| r.status.is_nominal())
            .map(|r| r.name.clone())
            .collect();
        if let Some(kind) = readings.first().map(|r| r.kind) {
            if !nominal.is_empty() {
                let noun = if nominal.len() == 1 { "Area" } else { "Areas" };
                let tail = match kind {
                    SensorKind::SoilMoisture => "are in optimal condition. Continue current irrigation schedule.",
                    SensorKind::Temperature => "are within optimal temperature range. No action required.",
                    SensorKind::Humidity => "are within optimal humidity range. Continue current management.",
                };
                out.push(Advice {
                    tone: Tone::Ok,
                    subject: String::new(),
                    text: format!("{} {} {}", noun, join_names(&nominal), tail),
                });
            }
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn soil(name: &str, value: f64) -> AreaReading {
            AreaReading::new(name.to_lowercase(), name, SensorKind::SoilMoisture, value, "now")
        }

        #[test]
        fn test_for_area() {
            let low = for_area(&soil("Area 3", 45.0)).unwrap();
            assert_eq!(low.tone, Tone::Warning);
            assert_eq!(low.subject, "Area 3");
            assert!(low.text.starts_with("has low moisture (45%)"));
            assert!(for_area(&soil("Area 1", 70.0)).is_none());
        }

        #[test]
        fn test_summary_line_lists_nominal_areas() {
            let readings = vec![
                soil("Area 1", 70.0),
                soil("Area 2", 68.0),
                soil("Area 3", 45.0),
                soil("Area 4", 85.0),
                soil("Area 5", 72.0),
                soil("Area 6", 66.0),
            ];
            let advice = for_readings(&readings);
            assert_eq!(advice.len(), 3);
            assert_eq!(
                advice[2].text,
                "Areas 1, 2, 5, and 6 are in optimal condition. Continue current irrigation schedule."
            );
        }

        #[test]
        fn test_join_names() {
            let names = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
            assert_eq!(join_names(&names(&["Area 1"])), "1");
            assert_eq!(join_names(&names(&["Area 1", "Area 2"])), "1 and 2");
        }
    }
}

/// Yearly totals and averages for the seasonal summary page.
pub mod seasonal {
    use crate::stats::round1;
    use farm_core::climate::{MonthlyClimate, Season};

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SeasonalTotals {
        pub water_usage: f64,
        pub rainfall: f64,
        pub irrigation_hours: f64,
        /// One decimal
        pub avg_temperature: f64,
        /// One decimal
        pub avg_humidity: f64,
    }

    /// Averages divide by 12 regardless of how many rows are present.
    pub fn totals(months: &[MonthlyClimate]) -> SeasonalTotals {
        let sum = |f: fn(&MonthlyClimate) -> f64| months.iter().map(f).sum::<f64>();
        SeasonalTotals {
            water_usage: sum(|m| m.water_usage),
            rainfall: sum(|m| m.rainfall),
            irrigation_hours: sum(|m| m.irrigation_hours),
            avg_temperature: round1(sum(|m| m.temperature) / 12.0),
            avg_humidity: round1(sum(|m| m.humidity) / 12.0),
        }
    }

    /// Months belonging to a season, in calendar order.
    pub fn months_in(months: &[MonthlyClimate], season: Season) -> Vec<&MonthlyClimate> {
        months.iter().filter(|m| m.season() == season).collect()
    }

    /// Month with the highest water usage.
    pub fn peak_usage(months: &[MonthlyClimate]) -> Option<&MonthlyClimate> {
        months
            .iter()
            .reduce(|best, m| if m.water_usage > best.water_usage { m } else { best })
    }

    /// The `count` months ending at `end_month` (1-12), oldest first,
    /// wrapping from January back into December.
    pub fn trailing(months: &[MonthlyClimate], end_month: u32, count: usize) -> Vec<&MonthlyClimate> {
        let count = count.min(12) as i32;
        (0..count)
            .rev()
            .map(|back| (end_month as i32 - 1 - back).rem_euclid(12) as u32 + 1)
            .filter_map(|month| months.iter().find(|m| m.month == month))
            .collect()
    }

    /// The `n` months with the highest soil moisture, in calendar order.
    pub fn wettest(months: &[MonthlyClimate], n: usize) -> Vec<&MonthlyClimate> {
        let mut ranked: Vec<&MonthlyClimate> = months.iter().collect();
        ranked.sort_by(|a, b| b.soil_moisture.total_cmp(&a.soil_moisture));
        ranked.truncate(n);
        ranked.sort_by_key(|m| m.month);
        ranked
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn year() -> Vec<MonthlyClimate> {
            let temp = [25., 26., 27., 29., 30., 29., 28., 28., 28., 27., 26., 25.];
            let hum = [65., 63., 62., 68., 72., 75., 77., 76., 74., 70., 68., 66.];
            let rain = [120., 95., 80., 110., 180., 220., 240., 230., 200., 160., 140., 130.];
            let water = [450., 480., 520., 580., 640., 720., 680., 650., 600., 550., 480., 420.];
            let hours = [180., 192., 208., 232., 256., 288., 272., 260., 240., 220., 192., 168.];
            (0..12)
                .map(|i| MonthlyClimate {
                    month: i as u32 + 1,
                    temperature: temp[i],
                    humidity: hum[i],
                    rainfall: rain[i],
                    soil_moisture: 70.0,
                    water_usage: water[i],
                    irrigation_hours: hours[i],
                })
                .collect()
        }

        #[test]
        fn test_totals() {
            let t = totals(&year());
            assert_eq!(t.water_usage, 6770.0);
            assert_eq!(t.rainfall, 1905.0);
            assert_eq!(t.irrigation_hours, 2708.0);
            assert_eq!(t.avg_temperature, 27.3);
            assert_eq!(t.avg_humidity, 69.7);
        }

        #[test]
        fn test_months_in_season() {
            let months = year();
            assert_eq!(months_in(&months, Season::Dry).len(), 4);
            assert_eq!(months_in(&months, Season::Rainy).len(), 3);
            assert_eq!(months_in(&months, Season::Transition).len(), 5);
        }

        #[test]
        fn test_peak_usage() {
            assert_eq!(peak_usage(&year()).map(|m| m.month), Some(6));
            assert!(peak_usage(&[]).is_none());
        }

        #[test]
        fn test_trailing_wraps_year_end() {
            let months = year();
            let picked: Vec<u32> = trailing(&months, 2, 3).iter().map(|m| m.month).collect();
            assert_eq!(picked, vec![12, 1, 2]);
            assert_eq!(trailing(&months, 6, 1)[0].month, 6);
            assert_eq!(trailing(&months, 12, 40).len(), 12);
        }

        #[test]
        fn test_wettest_in_calendar_order() {
            let mut months = year();
            for (m, v) in [(7, 80.0), (8, 79.0), (6, 78.0), (9, 76.0)] {
                months[m - 1].soil_moisture = v;
            }
            let picked: Vec<u32> = wettest(&months, 3).iter().map(|m| m.month).collect();
            assert_eq!(picked, vec![6, 7, 8]);
        }
    }
}
