//! Environmental pattern analyzer.

use super::{to_json, with_db, SECTION_TITLE, TWO_COLUMNS};
use chrono::Datelike;
use dioxus::prelude::*;
use farm_core::climate::MonthlyClimate;
use farm_core::repository::ReadingRepository;
use farm_data::correlation::soil_moisture_factors;
use farm_data::datasets::{CURRENT_CONDITIONS, DEFAULT_LOCATION, HOURLY_FORECAST};
use farm_data::seasonal::{trailing, wettest};
use farm_ui::components::{ChartContainer, ChartHeader, CARD_STYLE};
use farm_ui::js_bridge;
use farm_ui::state::AppState;

const TRENDS_CHART_ID: &str = "pattern-trends-chart";
const RAINFALL_CHART_ID: &str = "pattern-rainfall-chart";

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
enum AnalysisTab {
    #[default]
    Correlation,
    Trends,
    Patterns,
}

impl AnalysisTab {
    const ALL: [AnalysisTab; 3] = [AnalysisTab::Correlation, AnalysisTab::Trends, AnalysisTab::Patterns];

    fn label(&self) -> &'static str {
        match self {
            AnalysisTab::Correlation => "Correlation Analysis",
            AnalysisTab::Trends => "Trend Analysis",
            AnalysisTab::Patterns => "Pattern Detection",
        }
    }
}

/// Window of months shown in the charts.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
enum AnalyzerRange {
    Month,
    Quarter,
    #[default]
    Year,
    AllTime,
}

impl AnalyzerRange {
    const ALL: [AnalyzerRange; 4] = [
        AnalyzerRange::Month,
        AnalyzerRange::Quarter,
        AnalyzerRange::Year,
        AnalyzerRange::AllTime,
    ];

    fn id(&self) -> &'static str {
        match self {
            AnalyzerRange::Month => "month",
            AnalyzerRange::Quarter => "quarter",
            AnalyzerRange::Year => "year",
            AnalyzerRange::AllTime => "all",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AnalyzerRange::Month => "This Month",
            AnalyzerRange::Quarter => "This Quarter",
            AnalyzerRange::Year => "This Year",
            AnalyzerRange::AllTime => "All Time",
        }
    }

    fn months(&self) -> usize {
        match self {
            AnalyzerRange::Month => 1,
            AnalyzerRange::Quarter => 3,
            AnalyzerRange::Year | AnalyzerRange::AllTime => 12,
        }
    }

    fn from_id(id: &str) -> Self {
        Self::ALL.into_iter().find(|r| r.id() == id).unwrap_or_default()
    }
}

fn window(months: &[MonthlyClimate], range: AnalyzerRange) -> Vec<MonthlyClimate> {
    let end = chrono::Local::now().month();
    trailing(months, end, range.months()).into_iter().cloned().collect()
}

#[component]
pub fn PatternAnalyzer() -> Element {
    let state = use_context::<AppState>();
    let mut climate = use_signal(Vec::<MonthlyClimate>::new);
    let mut tab = use_signal(AnalysisTab::default);
    let mut range = use_signal(AnalyzerRange::default);

    use_effect(move || {
        if let Some(rows) = with_db(state, "Failed to load climate data", |db| db.monthly_climate()) {
            climate.set(rows);
        }
    });

    // ─── Charts for the selected tab and window ───
    use_effect(move || {
        let months = window(&climate.read(), range());
        if months.is_empty() {
            return;
        }
        match tab() {
            AnalysisTab::Trends => {
                let data: Vec<serde_json::Value> = months
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "x": m.label(),
                            "temperature": m.temperature,
                            "humidity": m.humidity,
                            "soilMoisture": m.soil_moisture,
                        })
                    })
                    .collect();
                let config = serde_json::json!({
                    "series": [
                        { "key": "temperature", "color": "#f97316", "label": "Temperature (°C)" },
                        { "key": "humidity", "color": "#3b82f6", "label": "Humidity (%)" },
                        { "key": "soilMoisture", "color": "#10b981", "label": "Soil Moisture (%)" },
                    ],
                })
                .to_string();
                js_bridge::render_line_chart(TRENDS_CHART_ID, &to_json(&data), &config);
            }
            AnalysisTab::Correlation => {
                let data: Vec<serde_json::Value> = months
                    .iter()
                    .map(|m| serde_json::json!({ "name": m.label(), "value": m.rainfall }))
                    .collect();
                let config = serde_json::json!({ "color": "#3b82f6", "yUnit": "mm" }).to_string();
                js_bridge::render_bar_chart(RAINFALL_CHART_ID, &to_json(&data), &config);
            }
            AnalysisTab::Patterns => {}
        }
    });

    let rows = climate.read().clone();
    let factors = soil_moisture_factors(&rows);
    let strongest = factors
        .iter()
        .max_by(|a, b| a.correlation.abs().total_cmp(&b.correlation.abs()))
        .map(|f| (f.factor, (f.correlation.abs() * 100.0).round(), f.correlation >= 0.0));
    let peak_months: Vec<&str> = wettest(&rows, 3).iter().map(|m| m.label()).collect();
    let peak_label = match (peak_months.first(), peak_months.last()) {
        (Some(first), Some(last)) => format!("{}-{}", first, last),
        _ => String::new(),
    };
    let current = CURRENT_CONDITIONS;
    let active_tab = tab();
    let selected_range = range();

    rsx! {
        ChartHeader {
            title: "Environmental Pattern Analyzer".to_string(),
            subtitle: "Analyze correlations between environmental factors".to_string(),
            select {
                style: "padding: 8px 16px; border: 1px solid #d1d5db; border-radius: 8px;",
                aria_label: "Select analysis time range",
                onchange: move |evt: Event<FormData>| range.set(AnalyzerRange::from_id(&evt.value())),
                for (r, id, label) in AnalyzerRange::ALL.map(|r| (r, r.id(), r.label())) {
                    option { key: "{id}", value: id, selected: r == selected_range, "{label}" }
                }
            }
        }

        div {
            style: "background: linear-gradient(135deg, #3b82f6, #2563eb); color: #fff; border-radius: 8px; padding: 24px; margin-bottom: 24px;",
            h2 { style: "margin: 0 0 4px 0; font-size: 20px; font-weight: 600;", "Current Conditions" }
            p { style: "margin: 0 0 16px 0; font-size: 14px; opacity: 0.9;", "{DEFAULT_LOCATION}" }
            div { style: "font-size: 48px; font-weight: 700; margin-bottom: 16px;", "{current.temperature}°C" }
            div {
                style: "display: flex; gap: 16px; overflow-x: auto; padding-bottom: 8px;",
                for hour in HOURLY_FORECAST.iter().take(6) {
                    div {
                        key: "{hour.time}",
                        style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 12px; background: rgba(255,255,255,0.1); border-radius: 8px;",
                        div { style: "font-size: 12px;", "{hour.time}" }
                        div { style: "font-size: 22px;", {hour.icon.glyph()} }
                        div { style: "font-size: 14px; font-weight: 600;", "{hour.temperature}°" }
                    }
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-top: 24px; padding-top: 24px; border-top: 1px solid rgba(255,255,255,0.2);",
                div { div { style: "font-size: 14px; opacity: 0.8;", "Precipitation" } div { style: "font-size: 22px; font-weight: 700;", "{current.precipitation_mm}mm" } }
                div { div { style: "font-size: 14px; opacity: 0.8;", "Wind" } div { style: "font-size: 22px; font-weight: 700;", "{current.wind_kmh} km/h" } }
                div { div { style: "font-size: 14px; opacity: 0.8;", "Humidity" } div { style: "font-size: 22px; font-weight: 700;", "{current.humidity}%" } }
            }
        }

        div {
            style: "{CARD_STYLE} display: flex; gap: 8px; margin-bottom: 24px;",
            for (t, label) in AnalysisTab::ALL.map(|t| (t, t.label())) {
                button {
                    key: "{label}",
                    style: if t == active_tab {
                        "padding: 8px 16px; border: none; border-radius: 8px; font-weight: 500; cursor: pointer; background: #2563eb; color: #fff;"
                    } else {
                        "padding: 8px 16px; border: none; border-radius: 8px; font-weight: 500; cursor: pointer; background: #f3f4f6; color: #374151;"
                    },
                    onclick: move |_| tab.set(t),
                    "{label}"
                }
            }
        }

        match active_tab {
            AnalysisTab::Correlation => rsx! {
                div {
                    style: "{TWO_COLUMNS}",
                    div {
                        style: "{CARD_STYLE}",
                        h2 { style: "{SECTION_TITLE}", "Correlation with Soil Moisture" }
                        for f in factors.iter() {
                            FactorRow {
                                key: "{f.factor}",
                                factor: f.factor,
                                correlation: f.correlation,
                                impact: f.impact.label(),
                                colors: f.impact.badge_colors(),
                            }
                        }
                    }
                    ChartContainer { id: RAINFALL_CHART_ID.to_string(), title: "Rainfall Impact Analysis".to_string() }
                }
            },
            AnalysisTab::Trends => rsx! {
                ChartContainer {
                    id: TRENDS_CHART_ID.to_string(),
                    title: format!("Environmental Factors Over Time ({})", selected_range.label()),
                    min_height: 400,
                }
                div { style: "height: 24px;" }
            },
            AnalysisTab::Patterns => rsx! {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; margin-bottom: 24px;",
                    InsightCard {
                        title: "Strong Correlation",
                        tint: "#f0fdf4",
                        if let Some((factor, pct, positive)) = strongest {
                            "{factor} shows a "
                            strong { {format!("{}% {} correlation", pct, if positive { "positive" } else { "negative" })} }
                            " with soil moisture. Expected rain can reduce irrigation needs significantly."
                        }
                    }
                    InsightCard {
                        title: "Seasonal Pattern",
                        tint: "#eff6ff",
                        "Peak moisture levels occur during "
                        strong { "{peak_label}" }
                        " (rainy season). Reduce irrigation by 40-60% during these months."
                    }
                    InsightCard {
                        title: "Optimization",
                        tint: "#faf5ff",
                        "Smart scheduling based on weather patterns can "
                        strong { "reduce water usage by 35%" }
                        " while maintaining optimal moisture levels."
                    }
                }
            },
        }

        div {
            style: "background: #fff7ed; border: 1px solid #fed7aa; padding: 24px; border-radius: 8px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "AI-Powered Recommendations" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; font-size: 14px; color: #374151;",
                li { style: "margin-bottom: 8px;",
                    span { style: "color: #16a34a; font-weight: 700;", "✓ " }
                    "Based on historical patterns, "
                    strong { "reduce irrigation by 30%" }
                    " this week due to high humidity ({current.humidity}%)."
                }
                li { style: "margin-bottom: 8px;",
                    span { style: "color: #2563eb; font-weight: 700;", "ℹ " }
                    "Thunderstorms expected this afternoon will provide {current.precipitation_mm}mm of rainfall. Skip scheduled irrigation for Areas 1, 3, and 5."
                }
                li {
                    span { style: "color: #9333ea; font-weight: 700;", "💡 " }
                    "Temperature-humidity correlation suggests optimal irrigation window is "
                    strong { "6-9 AM" }
                    " for maximum efficiency."
                }
            }
        }
    }
}

#[component]
fn FactorRow(
    factor: &'static str,
    correlation: f64,
    impact: &'static str,
    colors: (&'static str, &'static str),
) -> Element {
    let width = (correlation.abs() * 100.0).round();
    let bar = if correlation >= 0.0 { "#10b981" } else { "#ef4444" };
    let (bg, fg) = colors;
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;",
                span { style: "font-weight: 500; color: #374151;", "{factor}" }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "font-size: 14px; font-weight: 600;", {format!("{:+.2}", correlation)} }
                    span { style: "padding: 2px 8px; border-radius: 9999px; font-size: 12px; background: {bg}; color: {fg};", "{impact}" }
                }
            }
            div {
                style: "height: 8px; background: #e5e7eb; border-radius: 9999px; overflow: hidden;",
                div { style: "height: 100%; width: {width}%; background: {bar};" }
            }
        }
    }
}

#[component]
fn InsightCard(title: &'static str, tint: &'static str, children: Element) -> Element {
    rsx! {
        div {
            style: "background: {tint}; border: 1px solid #e5e7eb; padding: 24px; border-radius: 8px;",
            h3 { style: "margin: 0 0 12px 0; font-size: 18px; font-weight: 600; color: #1f2937;", "{title}" }
            p { style: "margin: 0; font-size: 14px; color: #374151;", {children} }
        }
    }
}
