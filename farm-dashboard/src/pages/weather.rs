//! Current conditions, hourly and 7-day forecast, and the rain advisory.

use super::SECTION_TITLE;
use dioxus::prelude::*;
use farm_core::weather::{first_rain_hour, RAIN_SKIP_THRESHOLD};
use farm_data::datasets::{CURRENT_CONDITIONS, DAILY_FORECAST, DEFAULT_LOCATION, HOURLY_FORECAST};
use farm_ui::components::{ChartHeader, CARD_STYLE};

#[component]
pub fn Weather() -> Element {
    let mut location = use_signal(|| DEFAULT_LOCATION.to_string());
    let now = chrono::Local::now();
    let today = now.format("%A, %B %-d").to_string();
    let updated = now.format("%I:%M %p").to_string();
    let current = CURRENT_CONDITIONS;

    let peak_rain = HOURLY_FORECAST.iter().map(|h| h.precipitation).max().unwrap_or(0);
    let rain_advice = first_rain_hour(&HOURLY_FORECAST).map(|hour| {
        format!(
            "Rain chance reaches {}% from {}. Skip scheduled irrigation for the rest of the day.",
            hour.precipitation, hour.time
        )
    });

    rsx! {
        ChartHeader {
            title: "Weather Update".to_string(),
            subtitle: "Current conditions and forecast".to_string(),
            div {
                style: "display: flex; align-items: center; gap: 8px; padding: 8px 16px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px;",
                span { style: "color: #2563eb;", "📍" }
                input {
                    r#type: "text",
                    aria_label: "Location",
                    value: "{location}",
                    style: "border: none; outline: none; font-weight: 500; color: #374151;",
                    oninput: move |evt: Event<FormData>| location.set(evt.value()),
                }
            }
        }

        div {
            style: "background: linear-gradient(135deg, #3b82f6, #4338ca); color: #fff; border-radius: 16px; padding: 32px; margin-bottom: 24px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 24px;",
                div {
                    h2 { style: "margin: 0 0 16px 0; font-size: 24px; font-weight: 600;", "📍 {current.city}" }
                    div { style: "font-size: 72px; font-weight: 700;", "{current.temperature}°" }
                    div { style: "font-size: 24px;", "{current.condition}" }
                    div { style: "font-size: 18px; opacity: 0.9;", "Feels like {current.feels_like}°" }
                    div { style: "font-size: 14px; opacity: 0.8; margin-top: 8px;", "H: {current.high}° / L: {current.low}°" }
                }
                div {
                    style: "text-align: right;",
                    div { style: "font-size: 64px;", "☀" }
                    div { style: "font-size: 14px; opacity: 0.9;", "{today}" }
                    div { style: "font-size: 12px; opacity: 0.75; margin-top: 4px;", "Last updated: {updated}" }
                }
            }

            h3 { style: "margin: 0 0 16px 0; font-size: 18px; font-weight: 600;", "Hourly Forecast" }
            div {
                style: "display: flex; gap: 16px; overflow-x: auto; padding-bottom: 8px;",
                for hour in HOURLY_FORECAST.iter() {
                    div {
                        key: "{hour.time}",
                        style: "display: flex; flex-direction: column; align-items: center; gap: 8px; min-width: 72px; padding: 12px; background: rgba(255,255,255,0.1); border-radius: 8px;",
                        div { style: "font-size: 14px;", "{hour.time}" }
                        div { style: "font-size: 24px;", {hour.icon.glyph()} }
                        div { style: "font-size: 18px; font-weight: 600;", "{hour.temperature}°" }
                        div { style: "font-size: 12px; opacity: 0.8;", "💧 {hour.precipitation}%" }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-top: 24px; padding-top: 24px; border-top: 1px solid rgba(255,255,255,0.2);",
                ConditionStat { label: "Precipitation", value: format!("{} mm", current.precipitation_mm) }
                ConditionStat { label: "Wind Speed", value: format!("{} km/h", current.wind_kmh) }
                ConditionStat { label: "UV Index", value: current.uv_index.to_string() }
                ConditionStat { label: "Humidity", value: format!("{}%", current.humidity) }
            }
        }

        h2 { style: "{SECTION_TITLE}", "7-Day Forecast" }
        div {
            style: "{CARD_STYLE} margin-bottom: 24px; padding: 0;",
            for day in DAILY_FORECAST.iter() {
                div {
                    key: "{day.day}",
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 16px 20px; border-bottom: 1px solid #f3f4f6;",
                    div {
                        style: "display: flex; align-items: center; gap: 16px; min-width: 240px;",
                        span { style: "width: 100px; font-weight: 600; color: #1f2937;", "{day.day}" }
                        span { style: "font-size: 24px;", {day.icon.glyph()} }
                        span { style: "color: #4b5563;", "{day.condition}" }
                    }
                    div {
                        style: "display: flex; gap: 24px;",
                        span { span { style: "color: #6b7280; font-size: 14px;", "High " } strong { style: "color: #dc2626; font-size: 20px;", "{day.high}°" } }
                        span { span { style: "color: #6b7280; font-size: 14px;", "Low " } strong { style: "color: #2563eb; font-size: 20px;", "{day.low}°" } }
                    }
                }
            }
        }

        div {
            style: "background: #fff7ed; border: 1px solid #fed7aa; border-radius: 8px; padding: 24px; margin-bottom: 24px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "⛈ Weather Alert" }
            p { style: "margin: 0 0 12px 0; font-size: 14px; color: #374151;",
                strong { "Thunderstorm Watch" }
                " in effect from 3:00 PM to 8:00 PM today."
            }
            ul {
                style: "margin: 0; padding-left: 20px; font-size: 14px; color: #374151;",
                li { "Heavy rainfall expected in the afternoon" }
                li { "Strong winds up to 40 km/h possible" }
                li { "Consider delaying outdoor irrigation activities" }
            }
        }

        div {
            style: "background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: 8px; padding: 24px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "Irrigation Recommendations" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; font-size: 14px; color: #374151;",
                if let Some(advice) = rain_advice {
                    li { style: "margin-bottom: 8px;", span { style: "color: #ca8a04; font-weight: 700;", "⚠ " } "{advice}" }
                } else {
                    li { style: "margin-bottom: 8px;",
                        span { style: "color: #16a34a; font-weight: 700;", "✓ " }
                        "Rain chance stays below {RAIN_SKIP_THRESHOLD}% (peak {peak_rain}%). Keep the regular irrigation schedule."
                    }
                }
                li { style: "margin-bottom: 8px;",
                    span { style: "color: #16a34a; font-weight: 700;", "✓ " }
                    "Expected rainfall of {current.precipitation_mm}mm should provide adequate moisture. Consider reducing irrigation by 30%."
                }
                li { style: "margin-bottom: 8px;",
                    span { style: "color: #2563eb; font-weight: 700;", "ℹ " }
                    "High humidity ({current.humidity}%) may increase disease risk. Monitor for fungal growth."
                }
                li {
                    span { style: "color: #ca8a04; font-weight: 700;", "⚠ " }
                    "{current.uv_index} UV index. Plants may require additional shade during peak hours (12-3 PM)."
                }
            }
        }
    }
}

#[component]
fn ConditionStat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            div { style: "font-size: 14px; opacity: 0.8;", "{label}" }
            div { style: "font-size: 22px; font-weight: 700;", "{value}" }
        }
    }
}
