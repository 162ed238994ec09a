//! Overview page: soil moisture ring plus three demo charts.

use super::{to_json, TWO_COLUMNS};
use dioxus::prelude::*;
use farm_data::datasets::{DASHBOARD_BARS, DASHBOARD_LINES, SOIL_OVERVIEW_PERCENT};
use farm_ui::components::{ChartContainer, ProgressRing, CARD_STYLE};
use farm_ui::js_bridge;

const LINES_CHART_ID: &str = "dashboard-lines-chart";
const BARS_CHART_ID: &str = "dashboard-bars-chart";
const AREA_CHART_ID: &str = "dashboard-area-chart";

#[component]
pub fn Dashboard() -> Element {
    use_effect(|| {
        let lines = to_json(&DASHBOARD_LINES);

        let multi_config = serde_json::json!({
            "series": [
                { "key": "line1", "color": "#3b82f6", "label": "Line 1" },
                { "key": "line2", "color": "#10b981", "label": "Line 2" },
                { "key": "line3", "color": "#f59e0b", "label": "Line 3" },
            ],
        })
        .to_string();
        js_bridge::render_line_chart(LINES_CHART_ID, &lines, &multi_config);

        let bar_config = serde_json::json!({ "color": "#3b82f6" }).to_string();
        js_bridge::render_bar_chart(BARS_CHART_ID, &to_json(&DASHBOARD_BARS), &bar_config);

        let area_config = serde_json::json!({
            "series": [{ "key": "line1", "color": "#3b82f6", "label": "Line 1" }],
            "area": true,
        })
        .to_string();
        js_bridge::render_line_chart(AREA_CHART_ID, &lines, &area_config);
    });

    rsx! {
        h1 { style: "margin: 0 0 24px 0; font-size: 24px; font-weight: 700; color: #1f2937;", "Dashboard" }

        div {
            style: "{TWO_COLUMNS}",
            div {
                style: "{CARD_STYLE}",
                h3 { style: "margin: 0 0 16px 0; font-size: 18px; font-weight: 600;", "Soil Moisture Overview" }
                div {
                    style: "display: flex; justify-content: center;",
                    ProgressRing { percentage: SOIL_OVERVIEW_PERCENT }
                }
            }
            ChartContainer { id: LINES_CHART_ID.to_string(), title: "Multi-Line Chart".to_string() }
        }

        div {
            style: "{TWO_COLUMNS}",
            ChartContainer { id: BARS_CHART_ID.to_string(), title: "Water Usage Statistics".to_string() }
            ChartContainer { id: AREA_CHART_ID.to_string(), title: "Area Chart".to_string() }
        }
    }
}
