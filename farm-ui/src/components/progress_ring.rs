//! Circular percentage indicator.

use dioxus::prelude::*;
use farm_data::stats::ring_dash_offset;

const RADIUS: f64 = 56.0;

#[derive(Props, Clone, PartialEq)]
pub struct ProgressRingProps {
    /// 0-100
    pub percentage: f64,
    #[props(default = String::new())]
    pub label: String,
    #[props(default = "#3b82f6".to_string())]
    pub color: String,
}

#[component]
pub fn ProgressRing(props: ProgressRingProps) -> Element {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let offset = ring_dash_offset(RADIUS, props.percentage);
    let pct = props.percentage.round();

    rsx! {
        div {
            style: "position: relative; width: 128px; height: 128px;",
            svg {
                width: "128",
                height: "128",
                style: "transform: rotate(-90deg);",
                circle { cx: "64", cy: "64", r: "{RADIUS}", stroke: "#e5e7eb", stroke_width: "12", fill: "none" }
                circle {
                    cx: "64",
                    cy: "64",
                    r: "{RADIUS}",
                    stroke: "{props.color}",
                    stroke_width: "12",
                    fill: "none",
                    stroke_dasharray: "{circumference}",
                    stroke_dashoffset: "{offset}",
                    stroke_linecap: "round",
                }
            }
            div {
                style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center;",
                span { style: "font-size: 28px; font-weight: 700; color: {props.color};", "{pct}%" }
                if !props.label.is_empty() {
                    span { style: "font-size: 12px; color: #6b7280; margin-top: 4px;", "{props.label}" }
                }
            }
        }
    }
}
