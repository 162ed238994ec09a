//! Seasonal irrigation behaviour: yearly totals, monthly charts and table.

use super::{to_json, with_db, STATS_GRID, TWO_COLUMNS};
use dioxus::prelude::*;
use farm_core::climate::MonthlyClimate;
use farm_core::repository::ReadingRepository;
use farm_data::datasets::{SEASONAL_SHARES, SUMMARY_YEARS};
use farm_data::seasonal::{peak_usage, totals};
use farm_data::stats::round1;
use farm_ui::components::{ChartContainer, ChartHeader, StatCard, CARD_STYLE};
use farm_ui::js_bridge;
use farm_ui::state::AppState;

const USAGE_CHART_ID: &str = "seasonal-usage-chart";
const CLIMATE_CHART_ID: &str = "seasonal-climate-chart";
const SHARE_CHART_ID: &str = "seasonal-share-chart";

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
enum ViewMode {
    #[default]
    Chart,
    Table,
}

const HEADER_CELL: &str =
    "padding: 12px 16px; text-align: left; font-size: 12px; font-weight: 600; color: #6b7280; text-transform: uppercase;";
const BODY_CELL: &str = "padding: 12px 16px; font-size: 14px; color: #374151; border-top: 1px solid #f3f4f6;";

#[component]
pub fn SeasonalSummary() -> Element {
    let state = use_context::<AppState>();
    let mut climate = use_signal(Vec::<MonthlyClimate>::new);
    let mut year = use_signal(|| SUMMARY_YEARS[0]);
    let mut view = use_signal(ViewMode::default);

    use_effect(move || {
        if let Some(rows) = with_db(state, "Failed to load seasonal data", |db| db.monthly_climate()) {
            climate.set(rows);
        }
    });

    // Charts only exist in chart view, so re-render whenever it comes back.
    use_effect(move || {
        let months = climate.read().clone();
        if view() != ViewMode::Chart || months.is_empty() {
            return;
        }

        let usage: Vec<serde_json::Value> = months
            .iter()
            .map(|m| serde_json::json!({ "name": m.label(), "waterUsage": m.water_usage, "rainfall": m.rainfall }))
            .collect();
        let usage_config = serde_json::json!({
            "series": [
                { "key": "waterUsage", "color": "#3b82f6", "label": "Water Usage (L)" },
                { "key": "rainfall", "color": "#10b981", "label": "Rainfall (mm)" },
            ],
        })
        .to_string();
        js_bridge::render_bar_chart(USAGE_CHART_ID, &to_json(&usage), &usage_config);

        let climate_points: Vec<serde_json::Value> = months
            .iter()
            .map(|m| serde_json::json!({ "x": m.label(), "temperature": m.temperature, "humidity": m.humidity }))
            .collect();
        let climate_config = serde_json::json!({
            "series": [
                { "key": "temperature", "color": "#f97316", "label": "Avg Temp (°C)" },
                { "key": "humidity", "color": "#3b82f6", "label": "Avg Humidity (%)" },
            ],
        })
        .to_string();
        js_bridge::render_line_chart(CLIMATE_CHART_ID, &to_json(&climate_points), &climate_config);

        let shares: Vec<serde_json::Value> = SEASONAL_SHARES
            .iter()
            .map(|(season, pct)| serde_json::json!({ "label": season.label(), "value": pct, "color": season.color() }))
            .collect();
        js_bridge::render_pie_chart(SHARE_CHART_ID, &to_json(&shares), "{}");
    });

    let rows = climate.read().clone();
    let summary = totals(&rows);
    let peak = peak_usage(&rows).map(|m| (m.label(), m.water_usage));
    let dry_pct = round1(dry_share(&rows));
    let selected_year = year();
    let mode = view();
    let table_rows: Vec<(u32, &'static str, &'static str, &'static str, MonthlyClimate)> = rows
        .iter()
        .map(|m| {
            let season = m.season();
            (m.month, m.label(), season.label(), season.color(), m.clone())
        })
        .collect();

    rsx! {
        ChartHeader {
            title: "Seasonal Irrigation Behavior Summary".to_string(),
            subtitle: "Annual water usage patterns and seasonal trends".to_string(),
            select {
                style: "padding: 8px 16px; border: 1px solid #d1d5db; border-radius: 8px;",
                aria_label: "Select year",
                onchange: move |evt: Event<FormData>| {
                    match evt.value().parse::<i32>() {
                        Ok(y) => year.set(y),
                        Err(err) => log::warn!("seasonal: bad year {:?}: {}", evt.value(), err),
                    }
                },
                for y in SUMMARY_YEARS {
                    option { key: "{y}", value: "{y}", selected: y == selected_year, "{y}" }
                }
            }
            ViewToggle { mode, on_change: move |m| view.set(m) }
        }

        div {
            style: "{STATS_GRID}",
            StatCard {
                label: "Total Water Usage".to_string(),
                value: format!("{}L", summary.water_usage),
                icon: "💧".to_string(),
                note: format!("{} annual total", selected_year),
            }
            StatCard {
                label: "Total Rainfall".to_string(),
                value: format!("{}mm", summary.rainfall),
                icon: "🌧".to_string(),
            }
            StatCard {
                label: "Irrigation Hours".to_string(),
                value: format!("{}h", summary.irrigation_hours),
                icon: "⏱".to_string(),
            }
            StatCard {
                label: "Avg Temperature".to_string(),
                value: format!("{}°C", summary.avg_temperature),
                icon: "🌡".to_string(),
            }
            StatCard {
                label: "Avg Humidity".to_string(),
                value: format!("{}%", summary.avg_humidity),
                icon: "💨".to_string(),
            }
        }

        match mode {
            ViewMode::Chart => rsx! {
                div {
                    style: "margin-bottom: 24px;",
                    ChartContainer { id: USAGE_CHART_ID.to_string(), title: "Monthly Water Usage & Rainfall".to_string(), min_height: 320 }
                }
                div {
                    style: "{TWO_COLUMNS}",
                    ChartContainer { id: CLIMATE_CHART_ID.to_string(), title: "Temperature & Humidity Trends".to_string() }
                    div {
                        style: "{CARD_STYLE}",
                        h3 { style: "margin: 0 0 12px 0; font-size: 16px; font-weight: 600;", "Seasonal Distribution" }
                        div { id: SHARE_CHART_ID, style: "width: 100%; min-height: 240px;" }
                        div {
                            style: "display: flex; justify-content: center; gap: 16px; margin-top: 12px; font-size: 14px; color: #4b5563;",
                            for (label, color, pct) in SEASONAL_SHARES.map(|(s, pct)| (s.label(), s.color(), pct)) {
                                span {
                                    key: "{label}",
                                    style: "display: flex; align-items: center; gap: 6px;",
                                    span { style: "display: inline-block; width: 12px; height: 12px; border-radius: 2px; background: {color};" }
                                    "{label} ({pct}%)"
                                }
                            }
                        }
                    }
                }
            },
            ViewMode::Table => rsx! {
                div {
                    style: "{CARD_STYLE} padding: 0; overflow-x: auto; margin-bottom: 24px;",
                    table {
                        style: "width: 100%; border-collapse: collapse;",
                        thead {
                            style: "background: #f9fafb;",
                            tr {
                                for heading in [
                                    "Month",
                                    "Season",
                                    "Water Usage (L)",
                                    "Rainfall (mm)",
                                    "Avg Temp (°C)",
                                    "Avg Humidity (%)",
                                    "Irrigation Hours",
                                ] {
                                    th { key: "{heading}", style: "{HEADER_CELL}", "{heading}" }
                                }
                            }
                        }
                        tbody {
                            for (month, label, season, color, m) in table_rows {
                                tr {
                                    key: "{month}",
                                    td { style: "{BODY_CELL} font-weight: 500;", "{label}" }
                                    td {
                                        style: "{BODY_CELL}",
                                        span {
                                            style: "padding: 2px 8px; border-radius: 9999px; font-size: 12px; color: #fff; background: {color};",
                                            "{season}"
                                        }
                                    }
                                    td { style: "{BODY_CELL}", "{m.water_usage}" }
                                    td { style: "{BODY_CELL}", "{m.rainfall}" }
                                    td { style: "{BODY_CELL}", "{m.temperature}" }
                                    td { style: "{BODY_CELL}", "{m.humidity}" }
                                    td { style: "{BODY_CELL}", "{m.irrigation_hours}" }
                                }
                            }
                            tr {
                                style: "background: #f9fafb; font-weight: 700;",
                                td { style: "{BODY_CELL}", colspan: "2", "Total / Average" }
                                td { style: "{BODY_CELL}", "{summary.water_usage}" }
                                td { style: "{BODY_CELL}", "{summary.rainfall}" }
                                td { style: "{BODY_CELL}", "{summary.avg_temperature}" }
                                td { style: "{BODY_CELL}", "{summary.avg_humidity}" }
                                td { style: "{BODY_CELL}", "{summary.irrigation_hours}" }
                            }
                        }
                    }
                }
            },
        }

        div {
            style: "background: #eff6ff; border: 1px solid #bfdbfe; padding: 24px; border-radius: 8px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "Key Insights & Recommendations" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; font-size: 14px; color: #374151;",
                if let Some((label, usage)) = peak {
                    li { style: "margin-bottom: 8px;",
                        span { style: "color: #2563eb; font-weight: 700;", "ℹ " }
                        "Peak water usage occurs in "
                        strong { "{label}" }
                        " ({usage}L). Plan reservoir capacity ahead of the hot months."
                    }
                }
                li { style: "margin-bottom: 8px;",
                    span { style: "color: #16a34a; font-weight: 700;", "✓ " }
                    "Rainy season (Jul-Sep) rainfall can offset up to 40% of irrigation needs. Reduce scheduled runs accordingly."
                }
                li { style: "margin-bottom: 8px;",
                    span { style: "color: #ca8a04; font-weight: 700;", "⚠ " }
                    "Dry season (Jan-Apr) averages {dry_pct}% of annual water usage. Consider mulching to reduce evaporation."
                }
                li {
                    span { style: "color: #9333ea; font-weight: 700;", "💡 " }
                    "Average humidity of {summary.avg_humidity}% supports early-morning irrigation for best absorption."
                }
            }
        }
    }
}

/// Percentage of the year's water usage that falls in the dry season.
fn dry_share(months: &[MonthlyClimate]) -> f64 {
    let total: f64 = months.iter().map(|m| m.water_usage).sum();
    if total == 0.0 {
        return 0.0;
    }
    let dry: f64 = farm_data::seasonal::months_in(months, farm_core::climate::Season::Dry)
        .iter()
        .map(|m| m.water_usage)
        .sum();
    dry / total * 100.0
}

#[component]
fn ViewToggle(mode: ViewMode, on_change: EventHandler<ViewMode>) -> Element {
    let button = |active: bool| {
        if active {
            "padding: 8px 16px; border: none; background: #2563eb; color: #fff; cursor: pointer;"
        } else {
            "padding: 8px 16px; border: none; background: #fff; color: #374151; cursor: pointer;"
        }
    };
    rsx! {
        div {
            style: "display: flex; border: 1px solid #d1d5db; border-radius: 8px; overflow: hidden;",
            button {
                style: button(mode == ViewMode::Chart),
                onclick: move |_| on_change.call(ViewMode::Chart),
                "📊 Chart"
            }
            button {
                style: button(mode == ViewMode::Table),
                onclick: move |_| on_change.call(ViewMode::Table),
                "📋 Table"
            }
        }
    }
}
