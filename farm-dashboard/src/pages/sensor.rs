//! Shared layout for the three sensor monitoring pages.
//!
//! Soil moisture, temperature and humidity differ only in their labels,
//! optimal band and the per-area gauge; everything else (area picker, time
//! range, trend chart, stat cards, area grid, recommendations) is common.

use super::{to_json, with_db, SECTION_TITLE, STATS_GRID};
use dioxus::prelude::*;
use farm_core::area::{select_area, AreaReading, SensorKind, SeriesPoint, TimeRange};
use farm_core::repository::ReadingRepository;
use farm_data::advice::{self, Tone};
use farm_data::stats::{
    alert_count, css_gradient, extremes, gauge_position, humidity_gradient, summarize_series,
    temperature_gradient,
};
use farm_ui::components::{
    AreaSelector, ChartContainer, ChartHeader, ProgressRing, StatCard, StatusBadge,
    TimeRangeSelector, CARD_STYLE,
};
use farm_ui::js_bridge;
use farm_ui::state::AppState;

/// Display settings for one sensor kind.
struct SensorProfile {
    title: &'static str,
    subtitle: &'static str,
    /// Noun used in the chart heading ("Moisture Trend")
    noun: &'static str,
    optimal_label: &'static str,
    optimal_band: (f64, f64),
    color: &'static str,
}

fn profile(kind: SensorKind) -> SensorProfile {
    match kind {
        SensorKind::SoilMoisture => SensorProfile {
            title: "Soil Moisture Monitoring",
            subtitle: "Real-time soil moisture levels across all areas",
            noun: "Moisture",
            optimal_label: "Optimal Range (60-80%)",
            optimal_band: (60.0, 80.0),
            color: "#3b82f6",
        },
        SensorKind::Temperature => SensorProfile {
            title: "Temperature Monitoring",
            subtitle: "Real-time temperature readings across all areas",
            noun: "Temperature",
            optimal_label: "Optimal Range (18-28°C)",
            optimal_band: (18.0, 28.0),
            color: "#f97316",
        },
        SensorKind::Humidity => SensorProfile {
            title: "Humidity Monitoring",
            subtitle: "Real-time humidity levels across all areas",
            noun: "Humidity",
            optimal_label: "Optimal Range (50-80%)",
            optimal_band: (50.0, 80.0),
            color: "#3b82f6",
        },
    }
}

fn tone_glyph(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Warning => ("⚠", "#dc2626"),
        Tone::Info => ("ℹ", "#2563eb"),
        Tone::Ok => ("✓", "#16a34a"),
    }
}

#[component]
pub fn SensorPage(kind: SensorKind) -> Element {
    let state = use_context::<AppState>();
    let profile = profile(kind);
    let unit = kind.unit();
    let chart_id = format!("{}-trend-chart", kind.id());

    let mut readings = use_signal(Vec::<AreaReading>::new);
    let mut series = use_signal(Vec::<SeriesPoint>::new);
    let mut selected = use_signal(String::new);
    let mut range = use_signal(TimeRange::default);

    // ─── Load readings and trend series ───
    use_effect(move || {
        let _ = (state.revision)();
        if let Some(rows) = with_db(state, "Failed to load area readings", |db| db.area_readings(kind)) {
            readings.set(rows);
        }
        if let Some(points) = with_db(state, "Failed to load sensor series", |db| db.series(kind)) {
            series.set(points);
        }
    });

    // ─── Render the trend chart ───
    let effect_chart_id = chart_id.clone();
    use_effect(move || {
        let points = series.read().clone();
        if points.is_empty() {
            return;
        }
        let profile = self::profile(kind);
        let data: Vec<serde_json::Value> = points
            .iter()
            .map(|p| serde_json::json!({ "x": p.time, "value": p.value }))
            .collect();
        let config = serde_json::json!({
            "series": [{ "key": "value", "color": profile.color, "label": profile.noun }],
            "bands": [{ "from": profile.optimal_band.0, "to": profile.optimal_band.1, "color": "#10b981" }],
            "yUnit": kind.unit(),
        })
        .to_string();
        js_bridge::render_line_chart(&effect_chart_id, &to_json(&data), &config);
    });

    let rows = readings.read().clone();
    let summary = summarize_series(&series.read());
    let current_id = selected();
    let current = select_area(&rows, &current_id).or(rows.first()).cloned();
    let alerts = alert_count(&rows);
    let (highest, lowest) = match extremes(&rows) {
        Some((hi, lo)) => (
            format!("{}: {}{}", hi.name, hi.value, unit),
            format!("{}: {}{}", lo.name, lo.value, unit),
        ),
        None => (String::new(), String::new()),
    };
    let recommendations: Vec<(&str, &str, String, String)> = advice::for_readings(&rows)
        .into_iter()
        .map(|item| {
            let (glyph, color) = tone_glyph(item.tone);
            (glyph, color, item.subject, item.text)
        })
        .collect();
    let selected_id = current.as_ref().map(|a| a.area_id.clone()).unwrap_or_default();

    rsx! {
        ChartHeader {
            title: profile.title.to_string(),
            subtitle: profile.subtitle.to_string(),
            TimeRangeSelector {
                selected: range(),
                on_change: move |r: TimeRange| range.set(r),
            }
        }

        if let Some(summary) = summary {
            div {
                style: "{STATS_GRID}",
                StatCard {
                    label: "Current".to_string(),
                    value: format!("{}{}", summary.current, unit),
                    note: range().label().to_string(),
                }
                StatCard {
                    label: format!("Average {}", profile.noun),
                    value: format!("{}{}", summary.average, unit),
                }
                StatCard {
                    label: "Min".to_string(),
                    value: format!("{}{}", summary.min, unit),
                    note: lowest,
                }
                StatCard {
                    label: "Max".to_string(),
                    value: format!("{}{}", summary.max, unit),
                    note: highest,
                }
                StatCard {
                    label: "Alerts".to_string(),
                    value: alerts.to_string(),
                    note: if alerts == 0 { "All areas in range".to_string() } else { "Need attention".to_string() },
                    note_color: if alerts == 0 { "#16a34a".to_string() } else { "#dc2626".to_string() },
                }
            }
        }

        div {
            style: "{CARD_STYLE} margin-bottom: 24px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                if let Some(area) = current.as_ref() {
                    div {
                        h2 { style: "margin: 0; font-size: 20px; font-weight: 600;", "{area.name} - {profile.noun} Trend" }
                        p { style: "margin: 4px 0 0 0; font-size: 14px; color: #4b5563;",
                            "Current: {area.value}{unit} • Last updated: {area.last_updated}"
                        }
                    }
                }
                AreaSelector {
                    areas: rows.clone(),
                    selected: selected_id.clone(),
                    on_select: move |id: String| selected.set(id),
                }
            }
            ChartContainer { id: chart_id.clone(), min_height: 320 }
            div {
                style: "display: flex; align-items: center; gap: 8px; margin-top: 12px; font-size: 14px; color: #4b5563;",
                span { style: "display: inline-block; width: 16px; height: 4px; background: #10b981;" }
                "{profile.optimal_label}"
            }
        }

        h2 { style: "{SECTION_TITLE}", "All Areas Overview" }
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px; margin-bottom: 24px;",
            for area in rows.iter().cloned() {
                AreaCard {
                    key: "{area.area_id}",
                    selected: area.area_id == selected_id,
                    accent: profile.color,
                    area: area.clone(),
                    on_select: move |id: String| selected.set(id),
                }
            }
        }

        div {
            style: "background: #eff6ff; border: 1px solid #bfdbfe; padding: 24px; border-radius: 8px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "Smart Recommendations" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; font-size: 14px; color: #374151;",
                for (idx, (glyph, color, subject, text)) in recommendations.into_iter().enumerate() {
                    li {
                        key: "{idx}",
                        style: "display: flex; gap: 8px; margin-bottom: 8px;",
                        span { style: "font-weight: 700; color: {color};", "{glyph}" }
                        span {
                            if !subject.is_empty() {
                                strong { "{subject} " }
                            }
                            "{text}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AreaCardProps {
    area: AreaReading,
    selected: bool,
    accent: &'static str,
    on_select: EventHandler<String>,
}

/// Clickable card for one area with a kind-specific gauge.
#[component]
fn AreaCard(props: AreaCardProps) -> Element {
    let ring = if props.selected {
        format!("box-shadow: 0 0 0 2px {};", props.accent)
    } else {
        String::new()
    };
    let area_id = props.area.area_id.clone();

    rsx! {
        div {
            style: "{CARD_STYLE} cursor: pointer; {ring}",
            onclick: move |_| props.on_select.call(area_id.clone()),
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 16px;",
                div {
                    h3 { style: "margin: 0; font-size: 18px; font-weight: 600;", "{props.area.name}" }
                    p { style: "margin: 4px 0 0 0; font-size: 12px; color: #6b7280;", "Updated {props.area.last_updated}" }
                }
                StatusBadge { status: props.area.status }
            }
            AreaGauge { area: props.area.clone() }
        }
    }
}

#[component]
fn AreaGauge(area: AreaReading) -> Element {
    match area.kind {
        SensorKind::SoilMoisture => rsx! {
            div {
                style: "display: flex; justify-content: center;",
                ProgressRing { percentage: area.value, label: "Moisture".to_string() }
            }
        },
        SensorKind::Temperature => {
            let height = gauge_position(area.value);
            let fill = css_gradient(temperature_gradient(area.value));
            rsx! {
                div {
                    style: "display: flex; justify-content: center; align-items: center; gap: 32px;",
                    div {
                        style: "position: relative; width: 32px; height: 192px; background: #e5e7eb; border-radius: 9999px; overflow: hidden;",
                        div { style: "position: absolute; bottom: 0; width: 100%; height: {height}%; background: {fill}; transition: height 0.5s;" }
                    }
                    div {
                        style: "display: flex; flex-direction: column; justify-content: space-between; height: 192px; font-size: 12px; color: #6b7280;",
                        for mark in ["40°C", "30°C", "20°C", "10°C", "0°C"] {
                            span { key: "{mark}", "{mark}" }
                        }
                    }
                    span { style: "font-size: 24px; font-weight: 700;", "{area.value}°" }
                }
            }
        }
        SensorKind::Humidity => {
            let fill = css_gradient(humidity_gradient(area.value));
            let width = area.value.clamp(0.0, 100.0);
            rsx! {
                div {
                    div { style: "text-align: center; font-size: 30px; font-weight: 700; color: #2563eb;", "{area.value}%" }
                    div {
                        style: "height: 16px; background: #e5e7eb; border-radius: 9999px; overflow: hidden; margin-top: 12px;",
                        div { style: "height: 100%; width: {width}%; background: {fill}; transition: width 0.5s;" }
                    }
                    div {
                        style: "display: flex; justify-content: space-between; font-size: 12px; color: #6b7280; margin-top: 8px;",
                        span { "0%" }
                        span { "50%" }
                        span { "100%" }
                    }
                }
            }
        }
    }
}
